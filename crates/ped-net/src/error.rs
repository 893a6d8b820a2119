//! Network-subsystem error type.

use thiserror::Error;

use ped_core::EdgeId;

/// Errors produced by `ped-net`.
#[derive(Debug, Error)]
pub enum NetError {
    /// A route edge carries no pedestrian-permitted lane.
    #[error("edge {0} has no sidewalk lane")]
    MissingSidewalk(EdgeId),
}

pub type NetResult<T> = Result<T, NetError>;
