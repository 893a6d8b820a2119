//! Walkable-surface construction and connected-component selection.

use geo::algorithm::unary_union;
use geo::{Area, MultiPolygon, Polygon};

use ped_core::{EdgeId, JunctionId, Point2};
use ped_net::{EdgeKind, Lane, LaneNetwork};

use crate::dilate::{CapStyle, connector_primitives, dilate_polyline};

// ── WalkableRegion ────────────────────────────────────────────────────────────

/// The unioned candidate walkable region: one or more connected components.
///
/// The downstream motion-engine geometry currently supports a single
/// connected accessible area, so consumers take [`largest`](Self::largest)
/// and drop the rest.  That is a deliberate, documented limitation; the full
/// component list stays accessible here as the extension point for future
/// multi-component support.
pub struct WalkableRegion {
    components: MultiPolygon<f64>,
}

impl WalkableRegion {
    pub fn new(components: MultiPolygon<f64>) -> Self {
        Self { components }
    }

    /// All connected components of the unioned region.
    pub fn components(&self) -> &MultiPolygon<f64> {
        &self.components
    }

    /// The component of maximum area, ties resolved by first encountered.
    ///
    /// `None` only for an empty region (a network with no sidewalks).
    pub fn largest(&self) -> Option<&Polygon<f64>> {
        let mut best: Option<(&Polygon<f64>, f64)> = None;
        for polygon in &self.components {
            let area = polygon.unsigned_area();
            if best.is_none_or(|(_, best_area)| area > best_area) {
                best = Some((polygon, area));
            }
        }
        best.map(|(polygon, _)| polygon)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Derive the candidate walkable region from the lane network.
///
/// For every junction: dilate each adjacent normal edge's sidewalk
/// (square caps), connect pairs of normal sidewalks stitched by a walking
/// area, dilate crossings (square caps), and connect crossings to the
/// sidewalks of edges reachable through their adjacent walking areas.
/// All primitives are unioned into one region.  Edges without a sidewalk
/// are silently skipped.
pub fn build_walkable_region(net: &LaneNetwork) -> WalkableRegion {
    let mut prims: Vec<Polygon<f64>> = Vec::new();

    for junction in net.junction_ids() {
        let adjacent = net.junction_edges(junction);
        for &edge in &adjacent {
            let Some((_, lane)) = net.sidewalk(edge) else {
                continue;
            };
            match net.kind(edge) {
                EdgeKind::Normal => {
                    prims.extend(dilate_polyline(&lane.shape, lane.width / 2.0, CapStyle::Square));
                    let anchor = junction_anchor(net, edge, lane, junction);

                    for &next in &adjacent {
                        if next == edge || !net.kind(next).is_normal() {
                            continue;
                        }
                        if !net.has_walking_area_between(edge, next) {
                            continue;
                        }
                        let Some((_, next_lane)) = net.sidewalk(next) else {
                            continue;
                        };
                        let next_anchor = junction_anchor(net, next, next_lane, junction);
                        prims.extend(connector_primitives(
                            anchor,
                            lane.width,
                            next_anchor,
                            next_lane.width,
                        ));
                    }
                }
                EdgeKind::Crossing => {
                    prims.extend(dilate_polyline(&lane.shape, lane.width / 2.0, CapStyle::Square));
                    connect_crossing(net, edge, lane, &mut prims);
                }
                EdgeKind::WalkingArea => {}
            }
        }
    }

    WalkableRegion::new(unary_union(prims.iter()))
}

/// The endpoint of a lane's shape that sits at `junction`, derived from
/// edge topology: the shape runs from the from-junction to the to-junction.
fn junction_anchor(net: &LaneNetwork, edge: EdgeId, lane: &Lane, junction: JunctionId) -> Point2 {
    if net.edge(edge).to == junction {
        lane.shape.last()
    } else {
        lane.shape.first()
    }
}

/// Connect a crossing's lane to the sidewalks of every edge reachable
/// through an adjacent walking area.
///
/// Anchors are chosen by the geometric invariant — the endpoint pair (one
/// per lane) with minimal mutual distance — rather than by incoming-edge-set
/// membership, which depends on topology details the geometry doesn't need.
fn connect_crossing(net: &LaneNetwork, edge: EdgeId, lane: &Lane, prims: &mut Vec<Polygon<f64>>) {
    for next in net.adjacent_edges(edge) {
        if net.kind(next) != EdgeKind::WalkingArea {
            continue;
        }
        for reachable in net.adjacent_edges(next) {
            if reachable == edge {
                continue;
            }
            let Some((_, next_lane)) = net.sidewalk(reachable) else {
                continue;
            };
            let (anchor, next_anchor) = closest_anchor_pair(lane, next_lane);
            prims.extend(connector_primitives(
                anchor,
                lane.width,
                next_anchor,
                next_lane.width,
            ));
        }
    }
}

/// The pair of shape endpoints (one from each lane) with minimal distance.
fn closest_anchor_pair(lane: &Lane, other: &Lane) -> (Point2, Point2) {
    let ends = [lane.shape.first(), lane.shape.last()];
    let other_ends = [other.shape.first(), other.shape.last()];
    let mut best = (ends[0], other_ends[0]);
    let mut best_dist = f64::MAX;
    for &a in &ends {
        for &b in &other_ends {
            let dist = a.distance(b);
            if dist < best_dist {
                best_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}
