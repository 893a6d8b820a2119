//! Unit tests for ped-net.

use ped_core::{AccessClass, Permissions, Point2};

use crate::{
    EdgeKind, LaneNetwork, LaneNetworkBuilder, LateralPlacement, NearestLaneMatcher, Polyline,
    RTreeLaneMatcher, RouteStage,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line(points: &[(f64, f64)]) -> Polyline {
    Polyline::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

/// Two normal edges in a row, stitched by a walking area at the middle
/// junction: e0 (x 0..100) → wa → e1 (x 100..200), sidewalks on both.
fn corridor() -> (LaneNetwork, ped_core::EdgeId, ped_core::EdgeId, ped_core::EdgeId) {
    let mut b = LaneNetworkBuilder::new();
    let j0 = b.add_junction();
    let j1 = b.add_junction();
    let j2 = b.add_junction();
    let e0 = b.add_edge(EdgeKind::Normal, j0, j1);
    let wa = b.add_edge(EdgeKind::WalkingArea, j1, j1);
    let e1 = b.add_edge(EdgeKind::Normal, j1, j2);
    b.set_sidewalk(e0, line(&[(0.0, 0.0), (100.0, 0.0)]), 2.0, Permissions::PEDESTRIAN);
    b.set_sidewalk(e1, line(&[(100.0, 0.0), (200.0, 0.0)]), 2.0, Permissions::PEDESTRIAN);
    (b.build(), e0, wa, e1)
}

// ── Polyline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod polyline {
    use super::*;

    #[test]
    fn length_sums_segments() {
        let l = line(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        assert!((l.length() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn position_at_offset_walks_segments() {
        let l = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let p = l.position_at_offset(15.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn position_offset_is_clamped() {
        let l = line(&[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(l.position_at_offset(-5.0, 0.0), Point2::new(0.0, 0.0));
        assert_eq!(l.position_at_offset(50.0, 0.0), Point2::new(10.0, 0.0));
    }

    #[test]
    fn lateral_displaces_left_of_travel() {
        let l = line(&[(0.0, 0.0), (10.0, 0.0)]);
        // Travelling +x, left is +y.
        let p = l.position_at_offset(5.0, 1.5);
        assert!((p.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn rotation_follows_segment() {
        let l = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert!((l.rotation_at_offset(5.0) - 0.0).abs() < 1e-12);
        assert!((l.rotation_at_offset(15.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn nearest_offset_projects_onto_line() {
        let l = line(&[(0.0, 0.0), (100.0, 0.0)]);
        let (offset, dist) = l.nearest_offset(Point2::new(40.0, 3.0));
        assert!((offset - 40.0).abs() < 1e-9);
        assert!((dist - 3.0).abs() < 1e-9);

        // Beyond the end projects onto the endpoint.
        let (offset, _) = l.nearest_offset(Point2::new(130.0, 0.0));
        assert!((offset - 100.0).abs() < 1e-9);
    }
}

// ── LaneNetwork ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use super::*;

    #[test]
    fn adjacency_derived_from_junctions() {
        let (net, e0, wa, e1) = corridor();
        assert!(net.predecessors(e0).is_empty());
        assert_eq!(net.successors(e0), &[wa, e1]);

        let adjacent = net.adjacent_edges(e0);
        assert!(adjacent.contains(&wa));
        assert!(adjacent.contains(&e1));
        assert!(!adjacent.contains(&e0));
    }

    #[test]
    fn walking_area_in_between() {
        let (net, e0, _wa, e1) = corridor();
        assert!(net.has_walking_area_between(e0, e1));
        assert!(net.has_walking_area_between(e1, e0));
    }

    #[test]
    fn sidewalk_lookup() {
        let (net, e0, wa, _e1) = corridor();
        assert!(net.sidewalk(e0).is_some());
        assert!(net.sidewalk(wa).is_none());
        let (_, lane) = net.sidewalk(e0).unwrap();
        assert_eq!(lane.width, 2.0);
    }

    #[test]
    #[should_panic(expected = "lane width must be positive")]
    fn zero_width_lane_rejected() {
        let mut b = LaneNetworkBuilder::new();
        let j0 = b.add_junction();
        let j1 = b.add_junction();
        let e = b.add_edge(EdgeKind::Normal, j0, j1);
        b.set_sidewalk(e, line(&[(0.0, 0.0), (1.0, 0.0)]), 0.0, Permissions::PEDESTRIAN);
    }
}

// ── RouteStage ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;
    use ped_core::EdgeId;

    #[test]
    fn cursor_moves_forward_only() {
        let mut stage = RouteStage::new(vec![EdgeId(0), EdgeId(1), EdgeId(2)], 0.0, 50.0);
        assert_eq!(stage.current_edge(), EdgeId(0));
        assert_eq!(stage.forward_edges().len(), 3);
        assert_eq!(stage.next_edge(), Some(EdgeId(1)));

        assert!(!stage.advance());
        assert_eq!(stage.current_edge(), EdgeId(1));
        assert_eq!(stage.forward_edges(), &[EdgeId(1), EdgeId(2)]);

        assert!(!stage.advance());
        assert!(stage.at_final_edge());
        assert_eq!(stage.next_edge(), None);

        // On the final edge, advancing reports completion without moving.
        assert!(stage.advance());
        assert_eq!(stage.current_edge(), EdgeId(2));
    }

    #[test]
    fn force_advance_terminates_on_final_edge() {
        let mut stage = RouteStage::new(vec![EdgeId(0), EdgeId(1), EdgeId(2)], 0.0, 50.0);
        while !stage.advance() {}
        assert_eq!(stage.current_edge(), EdgeId(2));
    }

    #[test]
    fn lateral_placement_override() {
        let stage = RouteStage::new(vec![EdgeId(0)], 0.0, 1.0)
            .with_lateral(LateralPlacement::Random);
        assert_eq!(stage.lateral, LateralPlacement::Random);
    }
}

// ── RTreeLaneMatcher ──────────────────────────────────────────────────────────

#[cfg(test)]
mod matcher {
    use super::*;

    #[test]
    fn nearest_among_candidate_edges() {
        let (net, e0, _wa, e1) = corridor();
        let matcher = RTreeLaneMatcher::build(&net);

        let m = matcher
            .nearest_lane(Point2::new(40.0, 1.0), &[e0, e1], AccessClass::Pedestrian)
            .unwrap();
        assert_eq!(m.edge, e0);
        assert!((m.offset - 40.0).abs() < 1e-9);
        assert!((m.distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn candidate_set_is_respected() {
        let (net, e0, _wa, e1) = corridor();
        let matcher = RTreeLaneMatcher::build(&net);

        // The point sits on e0, but only e1 is a candidate.
        let m = matcher
            .nearest_lane(Point2::new(40.0, 0.0), &[e1], AccessClass::Pedestrian)
            .unwrap();
        assert_eq!(m.edge, e1);
        assert!((m.offset - 0.0).abs() < 1e-9);

        assert!(matcher
            .nearest_lane(Point2::new(40.0, 0.0), &[e0], AccessClass::Pedestrian)
            .is_some());
        assert!(matcher
            .nearest_lane(Point2::new(40.0, 0.0), &[], AccessClass::Pedestrian)
            .is_none());
    }

    #[test]
    fn permissions_filter_candidates() {
        let mut b = LaneNetworkBuilder::new();
        let j0 = b.add_junction();
        let j1 = b.add_junction();
        let e = b.add_edge(EdgeKind::Normal, j0, j1);
        b.set_sidewalk(e, line(&[(0.0, 0.0), (10.0, 0.0)]), 2.0, Permissions::NONE);
        let net = b.build();
        let matcher = RTreeLaneMatcher::build(&net);

        assert!(matcher
            .nearest_lane(Point2::new(5.0, 0.0), &[e], AccessClass::Pedestrian)
            .is_none());
    }
}
