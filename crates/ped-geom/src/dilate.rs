//! Dilation (buffering) of centerlines and anchor points into polygons.
//!
//! A dilated polyline is assembled from per-segment rectangles plus sampled
//! circles at the interior joints (and, for round caps, at the line ends).
//! The pieces overlap; the caller unions them together with everything else,
//! so no per-shape union is performed here.
//!
//! Circles are sampled at [`QUADRANT_SEGMENTS`] segments per quarter turn,
//! fine enough that the area error of a full circle stays below 0.2 %.

use geo::{Coord, LineString, MultiPoint, Polygon};
use geo::ConvexHull;

use ped_core::Point2;
use ped_net::Polyline;

/// Circle sampling resolution: segments per quadrant.
pub const QUADRANT_SEGMENTS: usize = 16;

/// End-cap style for centerline dilation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CapStyle {
    /// Extend the line by the dilation radius at both ends (lane surfaces).
    Square,
    /// Close both ends with half-discs (anchor-to-anchor connectors).
    Round,
}

#[inline]
fn coord(p: Point2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// A sampled circle polygon of `4 * QUADRANT_SEGMENTS` vertices.
fn circle(center: Point2, radius: f64) -> Polygon<f64> {
    let n = 4 * QUADRANT_SEGMENTS;
    let ring: Vec<Coord<f64>> = (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            Coord {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect();
    Polygon::new(LineString::from(ring), vec![])
}

/// Rectangle covering one segment, widened by `radius` on both sides and
/// extended by `ext_a`/`ext_b` beyond its endpoints.
///
/// Wound counter-clockwise like [`circle`]: the boolean union is
/// winding-sensitive, and mixed orientations would subtract primitives
/// instead of adding them.
fn segment_rect(a: Point2, b: Point2, radius: f64, ext_a: f64, ext_b: f64) -> Option<Polygon<f64>> {
    let dir = (b - a).normalized();
    if dir == Point2::default() {
        return None; // zero-length segment
    }
    let a2 = a - dir * ext_a;
    let b2 = b + dir * ext_b;
    let n = Point2::new(-dir.y, dir.x) * radius;
    let ring = vec![coord(a2 - n), coord(b2 - n), coord(b2 + n), coord(a2 + n)];
    Some(Polygon::new(LineString::from(ring), vec![]))
}

/// Dilate a centerline by `radius` with the given cap style.
///
/// Returns overlapping polygon primitives (rectangles and joint/cap discs);
/// union them with the rest of the surface.  Fully degenerate lines (all
/// points coincident) dilate to a single disc for round caps and to nothing
/// for square caps.
pub fn dilate_polyline(line: &Polyline, radius: f64, caps: CapStyle) -> Vec<Polygon<f64>> {
    let pts = line.points();
    let mut prims = Vec::new();

    let last_seg = pts.len() - 2;
    for (i, w) in pts.windows(2).enumerate() {
        let ext_a = if i == 0 && caps == CapStyle::Square { radius } else { 0.0 };
        let ext_b = if i == last_seg && caps == CapStyle::Square { radius } else { 0.0 };
        prims.extend(segment_rect(w[0], w[1], radius, ext_a, ext_b));
    }

    // Fill interior joints.
    for &v in &pts[1..pts.len() - 1] {
        prims.push(circle(v, radius));
    }

    if caps == CapStyle::Round {
        prims.push(circle(line.first(), radius));
        prims.push(circle(line.last(), radius));
    }

    prims
}

/// Dilate a single point into a disc of the given radius.
pub fn dilate_point(center: Point2, radius: f64) -> Polygon<f64> {
    circle(center, radius)
}

/// Connector surface between two lanes' junction-side anchor points.
///
/// Matching widths: the anchor-to-anchor segment dilated by the shared
/// half-width with round caps.  Differing widths: the convex hull of the two
/// independently dilated anchor points, which produces a tapering joint.
pub fn connector_primitives(
    anchor: Point2,
    width: f64,
    other_anchor: Point2,
    other_width: f64,
) -> Vec<Polygon<f64>> {
    if width == other_width {
        let segment = Polyline::new(vec![anchor, other_anchor]);
        dilate_polyline(&segment, width / 2.0, CapStyle::Round)
    } else {
        let disc = dilate_point(anchor, width / 2.0);
        let other_disc = dilate_point(other_anchor, other_width / 2.0);
        let points: MultiPoint<f64> = disc
            .exterior()
            .coords()
            .chain(other_disc.exterior().coords())
            .map(|&c| geo::Point::from(c))
            .collect();
        vec![points.convex_hull()]
    }
}
