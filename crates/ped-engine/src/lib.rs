//! `ped-engine` — the motion-engine seam and its reference implementation.
//!
//! The pedestrian model drives an external "motion engine": a stepped
//! micro-simulation that owns the physics of walking.  This crate defines
//! the seam ([`MotionEngine`]) plus everything handed across it: parameter
//! profiles derived from pedestrian types, journeys, and agent snapshots.
//!
//! [`WaypointEngine`] is the built-in implementation — agents walk straight
//! toward their journey waypoint at the profile's desired speed.  It carries
//! no interaction physics, which keeps it deterministic and fast; swap in a
//! richer engine behind the same trait for crowd dynamics.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`engine`]   | `MotionEngine` trait, `JourneyDescriptor`, parameters     |
//! | [`profile`]  | `Profile`, `ProfileTable` (type → engine profile)         |
//! | [`waypoint`] | `WaypointEngine` reference implementation                 |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                          |

pub mod engine;
pub mod error;
pub mod profile;
pub mod waypoint;


pub use engine::{AgentParameters, AgentSnapshot, JourneyDescriptor, MotionEngine};
pub use error::{EngineError, EngineResult};
pub use profile::{Profile, ProfileTable};
pub use waypoint::WaypointEngine;
