//! `ped-model` — the engine-backed pedestrian model.
//!
//! Ties the other crates together: pedestrians are registered with a route
//! over the lane network, walked by an external [`MotionEngine`] across the
//! walkable surface built by `ped-geom`, and their free positions are
//! reconciled back onto route lanes every tick.
//!
//! The tick cycle of [`EngineModel::execute`]:
//!
//! 1. run `tick_length / engine_step` engine micro-steps,
//! 2. retry insertion for every still-pending record,
//! 3. read back each active agent, update its record, reconcile it onto
//!    its route, and
//! 4. arrive and drop agents within the exit tolerance of their
//!    destination.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`model`] | `PedestrianModel` trait, `Pedestrian`                      |
//! | [`record`]| `AgentRecord`, `Phase` lifecycle state                     |
//! | [`sim`]   | `EngineModel` — registry, tick driver, reconciliation      |
//! | [`areas`] | `build_walkable_areas` geometry pipeline                   |
//! | [`error`] | `ModelError`, `ModelResult<T>`                             |
//!
//! [`MotionEngine`]: ped_engine::MotionEngine

pub mod areas;
pub mod error;
pub mod model;
pub mod record;
pub mod sim;

#[cfg(test)]
mod tests;

pub use areas::build_walkable_areas;
pub use error::{ModelError, ModelResult};
pub use model::{Pedestrian, PedestrianModel};
pub use record::{AgentRecord, Phase};
pub use sim::EngineModel;
