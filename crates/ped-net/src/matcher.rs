//! Nearest-lane matching: map a free position back onto the lane network.
//!
//! # Spatial index
//!
//! `RTreeLaneMatcher` stores one R-tree entry per sidewalk-lane segment
//! (via `rstar`).  A query walks the tree's nearest-neighbour iterator —
//! ordered by ascending distance — and keeps the first segment whose edge
//! is in the caller's candidate set and whose lane permits the caller's
//! access class.  The longitudinal offset is recovered by projecting the
//! query point onto the winning segment.
//!
//! The trait seam exists so the reconciler can be driven by a different
//! matching strategy (or a scripted one in tests).

use std::collections::HashSet;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ped_core::{AccessClass, EdgeId, LaneId, Permissions, Point2};

use crate::LaneNetwork;

// ── Match result ──────────────────────────────────────────────────────────────

/// Result of a nearest-lane query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneMatch {
    /// Edge owning the matched lane.
    pub edge: EdgeId,
    /// The matched lane.
    pub lane: LaneId,
    /// Longitudinal offset of the projection along the lane, metres.
    pub offset: f64,
    /// Euclidean distance from the query point to the lane, metres.
    pub distance: f64,
}

/// Finds the sidewalk lane nearest a free position, restricted to a given
/// edge set and access class.
pub trait NearestLaneMatcher {
    /// Nearest permitted lane among the sidewalks of `edges`, or `None` if
    /// no candidate exists.
    fn nearest_lane(
        &self,
        pos: Point2,
        edges: &[EdgeId],
        class: AccessClass,
    ) -> Option<LaneMatch>;
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// One lane-shape segment with its cumulative start offset along the lane.
#[derive(Clone)]
struct SegmentEntry {
    a: Point2,
    b: Point2,
    /// Arc length from the lane start to `a`.
    start_offset: f64,
    lane: LaneId,
    edge: EdgeId,
    permissions: Permissions,
}

impl SegmentEntry {
    /// Projection of `pos` onto this segment: `(offset along lane, distance)`.
    fn project(&self, pos: Point2) -> (f64, f64) {
        let seg = self.b - self.a;
        let seg_len = seg.length();
        let t = if seg_len > 0.0 {
            ((pos - self.a).dot(seg) / (seg_len * seg_len)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let proj = self.a + seg * t;
        (self.start_offset + t * seg_len, pos.distance(proj))
    }
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.a.x, self.a.y], [self.b.x, self.b.y])
    }
}

impl PointDistance for SegmentEntry {
    /// Squared Euclidean distance from a point to the segment.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let (_, dist) = self.project(Point2::new(point[0], point[1]));
        dist * dist
    }
}

// ── RTreeLaneMatcher ──────────────────────────────────────────────────────────

/// R-tree-backed [`NearestLaneMatcher`] over a network's sidewalk lanes.
pub struct RTreeLaneMatcher {
    tree: RTree<SegmentEntry>,
}

impl RTreeLaneMatcher {
    /// Index every sidewalk-lane segment of `network`.
    ///
    /// Bulk-loads the tree in O(S log S) for S segments.
    pub fn build(network: &LaneNetwork) -> Self {
        let mut entries = Vec::new();
        for e in 0..network.edge_count() as u32 {
            let edge = EdgeId(e);
            let Some((lane_id, lane)) = network.sidewalk(edge) else {
                continue;
            };
            let mut walked = 0.0;
            for w in lane.shape.points().windows(2) {
                entries.push(SegmentEntry {
                    a: w[0],
                    b: w[1],
                    start_offset: walked,
                    lane: lane_id,
                    edge,
                    permissions: lane.permissions,
                });
                walked += w[0].distance(w[1]);
            }
        }
        Self { tree: RTree::bulk_load(entries) }
    }
}

impl NearestLaneMatcher for RTreeLaneMatcher {
    fn nearest_lane(
        &self,
        pos: Point2,
        edges: &[EdgeId],
        class: AccessClass,
    ) -> Option<LaneMatch> {
        let candidates: HashSet<EdgeId> = edges.iter().copied().collect();
        self.tree
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .find(|entry| candidates.contains(&entry.edge) && entry.permissions.allows(class))
            .map(|entry| {
                let (offset, distance) = entry.project(pos);
                LaneMatch {
                    edge: entry.edge,
                    lane: entry.lane,
                    offset,
                    distance,
                }
            })
    }
}
