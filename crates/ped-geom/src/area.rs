//! Export of the selected walkable polygon as motion-engine area primitives.
//!
//! The engine's geometry builder consumes simple (non-closed) rings:
//! accessible areas a pedestrian may occupy and excluded areas cut out of
//! them.  The selected polygon's exterior becomes accessible, its
//! significant holes become excluded, and externally tagged shapes from a
//! [`ShapeStore`] are merged in on top.

use geo::{Area, LineString, Polygon};

use ped_core::Point2;

use crate::error::{GeomError, GeomResult};

/// Holes with an area at or below this threshold (m²) are discarded:
/// slivers left over from the union that the engine's mesh generation
/// cannot digest.
pub const MIN_HOLE_AREA: f64 = 10.0;

// ── ShapeStore ────────────────────────────────────────────────────────────────

/// Classification of an externally supplied shape.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    /// Added to the accessible areas.
    WalkableArea,
    /// Added to the excluded areas.
    Obstacle,
    /// Ignored by the exporter (visualization-only shapes and the like).
    Other,
}

/// An externally tagged polygon ring.
#[derive(Clone, Debug)]
pub struct TaggedShape {
    pub kind: ShapeKind,
    pub ring: Vec<Point2>,
}

/// A generic store of tagged shapes supplied outside the lane network
/// (hand-drawn walkable areas, obstacles).
#[derive(Default)]
pub struct ShapeStore {
    shapes: Vec<TaggedShape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ShapeKind, ring: Vec<Point2>) {
        self.shapes.push(TaggedShape { kind, ring });
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaggedShape> {
        self.shapes.iter()
    }
}

// ── AreaSet ───────────────────────────────────────────────────────────────────

/// Accessible/excluded area rings ready for the motion engine's geometry
/// builder.  Rings are simple: the closing vertex is dropped.
#[derive(Clone, Debug, Default)]
pub struct AreaSet {
    pub accessible: Vec<Vec<Point2>>,
    pub excluded: Vec<Vec<Point2>>,
}

/// Convert the selected polygon plus external shapes into an [`AreaSet`].
///
/// The exterior ring becomes an accessible area; every hole with area
/// strictly above `min_hole_area` becomes an excluded area.  Store shapes
/// tagged [`ShapeKind::WalkableArea`] / [`ShapeKind::Obstacle`] are merged
/// as accessible / excluded; everything else is skipped.
pub fn export_areas(
    polygon: &Polygon<f64>,
    min_hole_area: f64,
    store: &ShapeStore,
) -> GeomResult<AreaSet> {
    let mut areas = AreaSet::default();

    areas.accessible.push(open_ring(polygon.exterior())?);

    for interior in polygon.interiors() {
        let hole_area = Polygon::new(interior.clone(), vec![]).unsigned_area();
        if hole_area > min_hole_area {
            areas.excluded.push(open_ring(interior)?);
        }
    }

    for shape in store.iter() {
        let ring = open_shape_ring(&shape.ring)?;
        match shape.kind {
            ShapeKind::WalkableArea => areas.accessible.push(ring),
            ShapeKind::Obstacle => areas.excluded.push(ring),
            ShapeKind::Other => {}
        }
    }

    Ok(areas)
}

/// Ring coordinates with the closing vertex dropped, so the downstream
/// simple-polygon check doesn't reject a duplicated endpoint.
fn open_ring(ring: &LineString<f64>) -> GeomResult<Vec<Point2>> {
    let coords = ring.coords().collect::<Vec<_>>();
    let n = coords.len().saturating_sub(1); // closed ring: last == first
    if n < 3 {
        return Err(GeomError::DegenerateRing { vertices: n });
    }
    Ok(coords[..n].iter().map(|c| Point2::new(c.x, c.y)).collect())
}

/// Same for externally supplied rings, which may or may not be closed.
fn open_shape_ring(ring: &[Point2]) -> GeomResult<Vec<Point2>> {
    let closed = ring.len() > 1 && ring.first() == ring.last();
    let n = if closed { ring.len() - 1 } else { ring.len() };
    if n < 3 {
        return Err(GeomError::DegenerateRing { vertices: n });
    }
    Ok(ring[..n].to_vec())
}
