//! Centerline polylines with longitudinal-offset arithmetic.
//!
//! Lane shapes are open polylines in network coordinates.  Three queries
//! dominate: position at a longitudinal offset (with optional lateral
//! displacement), tangent rotation at an offset, and projection of a free
//! point back onto the line (the inverse, used by lane matching).

use ped_core::Point2;

/// An open polyline of at least two points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Construct from a point list.
    ///
    /// # Panics
    /// Panics if fewer than two points are given.
    pub fn new(points: Vec<Point2>) -> Self {
        assert!(points.len() >= 2, "a polyline needs at least two points");
        Self { points }
    }

    /// The underlying points.
    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// First point of the line.
    #[inline]
    pub fn first(&self) -> Point2 {
        self.points[0]
    }

    /// Last point of the line.
    #[inline]
    pub fn last(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Total arc length in metres.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Point at longitudinal `offset`, displaced by `lateral` metres
    /// perpendicular to the travel direction (positive = left of travel).
    ///
    /// `offset` is clamped to `[0, length]`.
    pub fn position_at_offset(&self, offset: f64, lateral: f64) -> Point2 {
        let (seg, local) = self.locate(offset);
        let a = self.points[seg];
        let b = self.points[seg + 1];
        let dir = (b - a).normalized();
        let left = Point2::new(-dir.y, dir.x);
        a + dir * local + left * lateral
    }

    /// Tangent angle (radians from the positive x-axis) at `offset`.
    pub fn rotation_at_offset(&self, offset: f64) -> f64 {
        let (seg, _) = self.locate(offset);
        (self.points[seg + 1] - self.points[seg]).angle()
    }

    /// Project a free point onto the line.
    ///
    /// Returns `(offset, distance)`: the longitudinal offset of the closest
    /// point on the line, and the Euclidean distance to it.
    pub fn nearest_offset(&self, pos: Point2) -> (f64, f64) {
        let mut best_offset = 0.0;
        let mut best_dist = f64::MAX;
        let mut walked = 0.0;
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            let seg_len = a.distance(b);
            let t = if seg_len > 0.0 {
                ((pos - a).dot(b - a) / (seg_len * seg_len)).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let proj = a + (b - a) * t;
            let dist = pos.distance(proj);
            if dist < best_dist {
                best_dist = dist;
                best_offset = walked + t * seg_len;
            }
            walked += seg_len;
        }
        (best_offset, best_dist)
    }

    // Segment index and local offset within it for a clamped longitudinal
    // offset.  The final segment absorbs offsets at or past the total length.
    fn locate(&self, offset: f64) -> (usize, f64) {
        let mut remaining = offset.max(0.0);
        for (i, w) in self.points.windows(2).enumerate() {
            let seg_len = w[0].distance(w[1]);
            if remaining <= seg_len || i == self.points.len() - 2 {
                return (i, remaining.min(seg_len));
            }
            remaining -= seg_len;
        }
        (self.points.len() - 2, 0.0)
    }
}
