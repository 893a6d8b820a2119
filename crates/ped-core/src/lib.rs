//! `ped-core` — foundational types for the `rust_ped` pedestrian framework.
//!
//! This crate is a dependency of every other `ped-*` crate.  It intentionally
//! has no `ped-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).  Errors live with the subsystems that produce them:
//! each downstream crate defines its own `thiserror` enum and result alias.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `PedestrianId`, `EdgeId`, `LaneId`, `JunctionId`, …       |
//! | [`point`]   | `Point2` — planar metric coordinates                      |
//! | [`time`]    | `SimTime` (milliseconds)                                  |
//! | [`access`]  | `AccessClass`, lane `Permissions`                         |
//! | [`config`]  | `ModelConfig`, `PedType` (radius/speed derivation)        |
//! | [`rng`]     | `SimRng` (deterministic, for departure placement)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.    |

pub mod access;
pub mod config;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use access::{AccessClass, Permissions};
pub use config::{ModelConfig, PedType};
pub use ids::{EdgeId, EngineAgentId, JourneyId, JunctionId, LaneId, PedTypeId, PedestrianId, ProfileId};
pub use point::Point2;
pub use rng::SimRng;
pub use time::SimTime;
