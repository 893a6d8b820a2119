//! `ped-geom` — derivation of the continuous walkable surface from the
//! discrete lane network.
//!
//! # Pipeline
//!
//! ```text
//! LaneNetwork ──dilate──▶ polygon primitives ──union──▶ WalkableRegion
//!                                                          │ largest()
//!                                                          ▼
//!                                  ShapeStore ──merge──▶ AreaSet ──▶ motion engine
//! ```
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`dilate`]  | `CapStyle`, centerline/point dilation, connector shapes    |
//! | [`surface`] | `build_walkable_region`, `WalkableRegion` (component pick) |
//! | [`area`]    | `AreaSet` export, `ShapeStore` (tagged external shapes)    |
//! | [`wkt`]     | WKT serialization of the selected polygon (debug sink)     |
//! | [`error`]   | `GeomError`, `GeomResult<T>`                               |

pub mod area;
pub mod dilate;
pub mod error;
pub mod surface;
pub mod wkt;


pub use area::{AreaSet, MIN_HOLE_AREA, ShapeKind, ShapeStore, TaggedShape, export_areas};
pub use dilate::{CapStyle, QUADRANT_SEGMENTS, connector_primitives, dilate_point, dilate_polyline};
pub use error::{GeomError, GeomResult};
pub use surface::{WalkableRegion, build_walkable_region};
pub use wkt::polygon_wkt;
