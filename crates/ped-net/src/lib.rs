//! `ped-net` — lane network, route stages, and nearest-lane matching.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`polyline`] | `Polyline` — offsets, rotation, point projection           |
//! | [`network`]  | `LaneNetwork` + `LaneNetworkBuilder` (edges, lanes, junctions) |
//! | [`route`]    | `RouteStage` — ordered edges with a forward cursor         |
//! | [`matcher`]  | `NearestLaneMatcher` trait, `RTreeLaneMatcher` (rstar)     |
//! | [`error`]    | `NetError`, `NetResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod matcher;
pub mod network;
pub mod polyline;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{NetError, NetResult};
pub use matcher::{LaneMatch, NearestLaneMatcher, RTreeLaneMatcher};
pub use network::{Edge, EdgeKind, Lane, LaneNetwork, LaneNetworkBuilder};
pub use polyline::Polyline;
pub use route::{LateralPlacement, RouteStage};
