//! The polymorphic pedestrian-model contract.

use ped_core::{AccessClass, PedTypeId, PedestrianId, SimTime};
use ped_net::RouteStage;

use crate::ModelResult;

/// Identity and classification of one pedestrian, as handed to the model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pedestrian {
    pub id:       PedestrianId,
    /// Registered type, or any unregistered id to fall back to the default
    /// engine profile.
    pub ped_type: PedTypeId,
    /// Access class used for lane matching.
    pub class:    AccessClass,
}

impl Pedestrian {
    pub fn new(id: PedestrianId, ped_type: PedTypeId) -> Self {
        Self { id, ped_type, class: AccessClass::Pedestrian }
    }
}

/// The base contract every pedestrian-model backend satisfies.
///
/// [`EngineModel`](crate::EngineModel) is the engine-backed implementation;
/// alternative backends (a pure network walker, a remote model) plug in
/// behind the same trait.
pub trait PedestrianModel {
    /// Register a pedestrian with its walking stage.  Insertion into the
    /// underlying simulation may complete later; see
    /// [`execute`](Self::execute).
    fn add(&mut self, ped: Pedestrian, stage: RouteStage) -> ModelResult<()>;

    /// Remove a pedestrian regardless of phase.  No route side effects.
    fn remove(&mut self, ped: PedestrianId) -> ModelResult<()>;

    /// Advance the model by one tick.  Returns the tick length, so a
    /// scheduler can re-arm the next call from the return value.
    fn execute(&mut self, now: SimTime) -> ModelResult<SimTime>;

    /// Drop all registered pedestrians.
    fn clear_state(&mut self);

    /// Number of registered pedestrians (pending and active).
    fn active_count(&self) -> usize;
}
