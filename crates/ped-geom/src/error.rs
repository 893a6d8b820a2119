//! Geometry-subsystem error type.

use thiserror::Error;

/// Errors produced by `ped-geom`.
#[derive(Debug, Error)]
pub enum GeomError {
    /// The unioned region has no components — the network has no sidewalks.
    #[error("walkable region is empty: no sidewalk lanes were dilated")]
    EmptyRegion,

    /// A ring collapsed below three vertices and cannot form a polygon.
    #[error("degenerate ring with {vertices} vertices")]
    DegenerateRing { vertices: usize },
}

pub type GeomResult<T> = Result<T, GeomError>;
