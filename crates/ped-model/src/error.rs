//! Model-level error type.

use thiserror::Error;

use ped_core::PedestrianId;
use ped_engine::EngineError;
use ped_geom::GeomError;
use ped_net::NetError;

/// Errors surfaced by the pedestrian model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The pedestrian is not registered with the model.
    #[error("pedestrian {0} is not registered")]
    PedestrianNotFound(PedestrianId),

    #[error(transparent)]
    Net(#[from] NetError),

    #[error(transparent)]
    Geometry(#[from] GeomError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type ModelResult<T> = Result<T, ModelError>;
