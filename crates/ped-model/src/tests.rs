//! Unit tests for ped-model.

use std::collections::HashMap;
use std::f64::consts::FRAC_PI_2;

use ped_core::{
    AccessClass, EngineAgentId, JourneyId, ModelConfig, PedType, PedTypeId, PedestrianId,
    Permissions, Point2, ProfileId, SimTime,
};
use ped_engine::{
    AgentParameters, AgentSnapshot, EngineError, EngineResult, JourneyDescriptor, MotionEngine,
    ProfileTable, WaypointEngine,
};
use ped_geom::{GeomError, ShapeStore};
use ped_net::{
    EdgeKind, LaneNetwork, LaneNetworkBuilder, NetError, Polyline, RTreeLaneMatcher, RouteStage,
};

use crate::record::{AgentRecord, Phase};
use crate::sim::{orientation_vector, reconcile};
use crate::{EngineModel, ModelError, Pedestrian, PedestrianModel, build_walkable_areas};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn line(points: &[(f64, f64)]) -> Polyline {
    Polyline::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

/// Single normal edge, sidewalk x 0..100, width 2.
fn single_edge() -> (LaneNetwork, ped_core::EdgeId) {
    let mut b = LaneNetworkBuilder::new();
    let j0 = b.add_junction();
    let j1 = b.add_junction();
    let e0 = b.add_edge(EdgeKind::Normal, j0, j1);
    b.set_sidewalk(e0, line(&[(0.0, 0.0), (100.0, 0.0)]), 2.0, Permissions::PEDESTRIAN);
    (b.build(), e0)
}

/// Two normal edges joined by a walking area: e0 (x 0..100), e1 (x 100..200).
fn corridor() -> (LaneNetwork, ped_core::EdgeId, ped_core::EdgeId) {
    let mut b = LaneNetworkBuilder::new();
    let j0 = b.add_junction();
    let j1 = b.add_junction();
    let j2 = b.add_junction();
    let e0 = b.add_edge(EdgeKind::Normal, j0, j1);
    let _wa = b.add_edge(EdgeKind::WalkingArea, j1, j1);
    let e1 = b.add_edge(EdgeKind::Normal, j1, j2);
    b.set_sidewalk(e0, line(&[(0.0, 0.0), (100.0, 0.0)]), 2.0, Permissions::PEDESTRIAN);
    b.set_sidewalk(e1, line(&[(100.0, 0.0), (200.0, 0.0)]), 2.0, Permissions::PEDESTRIAN);
    (b.build(), e0, e1)
}

fn test_config() -> ModelConfig {
    ModelConfig {
        tick_length:    SimTime::from_secs(1),
        engine_step:    SimTime::from_millis(100),
        exit_tolerance: 0.5,
        geometry_dump:  None,
    }
}

fn walker_types() -> Vec<PedType> {
    vec![PedType {
        name: "walker".to_owned(),
        max_speed: 2.0,
        desired_max_speed: 2.0,
        ..PedType::default()
    }]
}

/// Full stack: network → walkable areas → waypoint engine → model.
fn waypoint_model(net: LaneNetwork) -> EngineModel<WaypointEngine, RTreeLaneMatcher> {
    let config = test_config();
    let areas = build_walkable_areas(&net, &config, &ShapeStore::new()).unwrap();
    let profiles = ProfileTable::build(&walker_types());
    let engine = WaypointEngine::build(&areas, &profiles, config.engine_step).unwrap();
    let matcher = RTreeLaneMatcher::build(&net);
    EngineModel::new(net, matcher, engine, profiles, config, 7)
}

// ── Scripted engine ───────────────────────────────────────────────────────────

/// Engine double: accepts agents after a scripted number of rejections and
/// never moves them.
#[derive(Default)]
struct FlakyEngine {
    rejections: u32,
    journeys:   u32,
    next_agent: u64,
    agents:     HashMap<EngineAgentId, AgentSnapshot>,
}

impl MotionEngine for FlakyEngine {
    fn add_journey(&mut self, _journey: JourneyDescriptor) -> EngineResult<JourneyId> {
        let id = JourneyId(self.journeys);
        self.journeys += 1;
        Ok(id)
    }

    fn add_agent(&mut self, params: AgentParameters) -> EngineResult<EngineAgentId> {
        if self.rejections > 0 {
            self.rejections -= 1;
            return Err(EngineError::Rejected("no room".to_owned()));
        }
        let id = EngineAgentId(self.next_agent);
        self.next_agent += 1;
        self.agents.insert(
            id,
            AgentSnapshot { position: params.position, orientation: params.orientation },
        );
        Ok(id)
    }

    fn remove_agent(&mut self, agent: EngineAgentId) -> EngineResult<()> {
        self.agents
            .remove(&agent)
            .map(|_| ())
            .ok_or(EngineError::UnknownAgent(agent))
    }

    fn iterate(&mut self) -> EngineResult<()> {
        Ok(())
    }

    fn agent_state(&self, agent: EngineAgentId) -> EngineResult<AgentSnapshot> {
        self.agents
            .get(&agent)
            .copied()
            .ok_or(EngineError::UnknownAgent(agent))
    }
}

fn flaky_model(
    net: LaneNetwork,
    rejections: u32,
) -> EngineModel<FlakyEngine, RTreeLaneMatcher> {
    let matcher = RTreeLaneMatcher::build(&net);
    let engine = FlakyEngine { rejections, ..FlakyEngine::default() };
    let profiles = ProfileTable::build(&walker_types());
    EngineModel::new(net, matcher, engine, profiles, test_config(), 7)
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn walk_single_edge_to_arrival() {
        let (net, e0) = single_edge();
        let mut model = waypoint_model(net);
        let ped = Pedestrian::new(PedestrianId(0), PedTypeId(0));
        model.add(ped, RouteStage::new(vec![e0], 0.0, 100.0)).unwrap();

        assert_eq!(model.phase(ped.id), Some(Phase::Active));
        assert_eq!(model.position(ped.id), Some(Point2::new(0.0, 0.0)));

        let mut now = SimTime::ZERO;
        let tick = model.execute(now).unwrap();
        assert_eq!(tick, SimTime::from_secs(1));

        // 2 m/s walker: about 2 m of progress and matching lane offset.
        let pos = model.position(ped.id).unwrap();
        assert!((pos.x - 2.0).abs() < 1e-6);
        assert!((model.speed(ped.id).unwrap() - 2.0).abs() < 1e-6);
        assert!((model.lane_progress(ped.id).unwrap() - pos.x).abs() < 1e-6);
        assert!(model.heading(ped.id).unwrap().abs() < 1e-9);

        for _ in 0..99 {
            now = now + model.execute(now).unwrap();
            if model.active_count() == 0 {
                break;
            }
        }
        assert_eq!(model.active_count(), 0);
        assert_eq!(model.phase(ped.id), None);
        assert_eq!(model.position(ped.id), None);
    }

    #[test]
    fn unregistered_type_falls_back_to_default_profile() {
        let (net, e0) = single_edge();
        let mut model = waypoint_model(net);
        let ped = Pedestrian::new(PedestrianId(3), PedTypeId(42));
        model.add(ped, RouteStage::new(vec![e0], 0.0, 100.0)).unwrap();
        assert_eq!(model.phase(ped.id), Some(Phase::Active));
    }

    #[test]
    fn rejected_insertion_is_retried_until_active() {
        let (net, e0) = single_edge();
        let mut model = flaky_model(net, 2);
        let ped = Pedestrian::new(PedestrianId(1), PedTypeId(0));
        model.add(ped, RouteStage::new(vec![e0], 0.0, 100.0)).unwrap();

        // Rejected at add time and once more on the first tick.
        assert_eq!(model.phase(ped.id), Some(Phase::Pending));
        model.execute(SimTime::ZERO).unwrap();
        assert_eq!(model.phase(ped.id), Some(Phase::Pending));
        model.execute(SimTime::from_secs(1)).unwrap();
        assert_eq!(model.phase(ped.id), Some(Phase::Active));

        // The scripted engine never moves the agent, so it stays active.
        model.execute(SimTime::from_secs(2)).unwrap();
        assert_eq!(model.phase(ped.id), Some(Phase::Active));
        assert_eq!(model.active_count(), 1);
    }

    #[test]
    fn remove_drops_record_and_engine_agent() {
        let (net, e0) = single_edge();
        let mut model = flaky_model(net, 0);
        let ped = Pedestrian::new(PedestrianId(4), PedTypeId(0));
        model.add(ped, RouteStage::new(vec![e0], 0.0, 100.0)).unwrap();
        assert_eq!(model.active_count(), 1);

        model.remove(ped.id).unwrap();
        assert_eq!(model.active_count(), 0);
        assert!(matches!(
            model.remove(ped.id),
            Err(ModelError::PedestrianNotFound(_))
        ));

        // Removal reached the engine: a later tick must not read the agent.
        model.execute(SimTime::ZERO).unwrap();
    }

    #[test]
    fn clear_state_drops_everything() {
        let (net, e0) = single_edge();
        let mut model = flaky_model(net, 0);
        for i in 0..3 {
            let ped = Pedestrian::new(PedestrianId(i), PedTypeId(0));
            model.add(ped, RouteStage::new(vec![e0], 0.0, 100.0)).unwrap();
        }
        assert_eq!(model.active_count(), 3);
        model.clear_state();
        assert_eq!(model.active_count(), 0);
    }

    #[test]
    fn route_over_sidewalkless_edge_is_an_error() {
        let mut b = LaneNetworkBuilder::new();
        let j0 = b.add_junction();
        let j1 = b.add_junction();
        let e0 = b.add_edge(EdgeKind::Normal, j0, j1);
        let net = b.build();

        let mut model = flaky_model(net, 0);
        let ped = Pedestrian::new(PedestrianId(0), PedTypeId(0));
        let err = model.add(ped, RouteStage::new(vec![e0], 0.0, 50.0)).unwrap_err();
        assert!(matches!(err, ModelError::Net(NetError::MissingSidewalk(edge)) if edge == e0));
    }
}

// ── Reconciliation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod reconciliation {
    use super::*;

    fn record_on(route: Vec<ped_core::EdgeId>, position: Point2) -> AgentRecord {
        AgentRecord {
            ped:    Pedestrian::new(PedestrianId(0), PedTypeId(0)),
            stage:  RouteStage::new(route, 0.0, 100.0),
            phase:  Phase::Active,
            params: AgentParameters {
                journey:     JourneyId(0),
                profile:     ProfileId(0),
                position,
                orientation: Point2::new(1.0, 0.0),
            },
            engine_id: EngineAgentId(0),
            destination: Point2::new(200.0, 0.0),
            position,
            previous_position: position,
            heading: 0.0,
            lane_progress: 0.0,
        }
    }

    #[test]
    fn matches_current_edge_without_advancing() {
        let (net, e0, e1) = corridor();
        let matcher = RTreeLaneMatcher::build(&net);
        let mut record = record_on(vec![e0, e1], Point2::new(50.0, 0.3));

        reconcile(&net, &matcher, &mut record);
        assert_eq!(record.stage.current_edge(), e0);
        assert!((record.lane_progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn advances_cursor_onto_the_next_normal_edge() {
        let (net, e0, e1) = corridor();
        let matcher = RTreeLaneMatcher::build(&net);
        let mut record = record_on(vec![e0, e1], Point2::new(150.0, -0.4));

        reconcile(&net, &matcher, &mut record);
        assert_eq!(record.stage.current_edge(), e1);
        assert!((record.lane_progress - 50.0).abs() < 1e-9);

        // Same position again: already on the matched edge, cursor stays.
        reconcile(&net, &matcher, &mut record);
        assert_eq!(record.stage.current_edge(), e1);
    }

    #[test]
    fn never_matches_backwards() {
        let (net, e0, e1) = corridor();
        let matcher = RTreeLaneMatcher::build(&net);
        let mut record = record_on(vec![e0, e1], Point2::new(150.0, 0.0));
        reconcile(&net, &matcher, &mut record);
        assert_eq!(record.stage.current_edge(), e1);

        // Drifting back over e0 territory: e0 is behind the cursor, so the
        // match lands on e1 and progress clamps to its start.
        record.position = Point2::new(90.0, 0.0);
        reconcile(&net, &matcher, &mut record);
        assert_eq!(record.stage.current_edge(), e1);
        assert!(record.lane_progress.abs() < 1e-9);
    }

    #[test]
    fn no_permitted_lane_retains_progress() {
        let (net, e0, e1) = corridor();
        let matcher = RTreeLaneMatcher::build(&net);
        let mut record = record_on(vec![e0, e1], Point2::new(50.0, 0.0));
        record.ped.class = AccessClass::Vehicle;
        record.lane_progress = 12.5;

        reconcile(&net, &matcher, &mut record);
        assert!((record.lane_progress - 12.5).abs() < 1e-12);
        assert_eq!(record.stage.current_edge(), e0);
    }
}

// ── Geometry pipeline ─────────────────────────────────────────────────────────

#[cfg(test)]
mod areas {
    use super::*;

    #[test]
    fn empty_network_is_escalated() {
        let net = LaneNetworkBuilder::new().build();
        let err = build_walkable_areas(&net, &test_config(), &ShapeStore::new()).unwrap_err();
        assert!(matches!(err, ModelError::Geometry(GeomError::EmptyRegion)));
    }

    #[test]
    fn accessible_area_covers_the_sidewalk() {
        let (net, _) = single_edge();
        let areas = build_walkable_areas(&net, &test_config(), &ShapeStore::new()).unwrap();
        assert_eq!(areas.accessible.len(), 1);
        assert!(areas.excluded.is_empty());
        // Square-capped dilation spans x -1..101, y -1..1.
        let ring = &areas.accessible[0];
        assert!(ring.iter().all(|p| p.x >= -1.0 - 1e-9 && p.x <= 101.0 + 1e-9));
        assert!(ring.iter().all(|p| p.y.abs() <= 1.0 + 1e-9));
    }

    #[test]
    fn geometry_dump_writes_wkt() {
        let path = std::env::temp_dir().join("ped_model_dump_test.wkt");
        let _ = std::fs::remove_file(&path);

        let (net, _) = single_edge();
        let config = ModelConfig { geometry_dump: Some(path.clone()), ..test_config() };
        build_walkable_areas(&net, &config, &ShapeStore::new()).unwrap();

        let dumped = std::fs::read_to_string(&path).unwrap();
        assert!(dumped.starts_with("POLYGON (("));
        let _ = std::fs::remove_file(&path);
    }
}

// ── Orientation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod orientation {
    use super::*;

    #[test]
    fn plain_angles_use_the_tangent() {
        let v = orientation_vector(0.0);
        assert_eq!(v, Point2::new(1.0, 0.0));
        let v = orientation_vector(std::f64::consts::FRAC_PI_4);
        assert!((v.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_headings_are_special_cased() {
        assert_eq!(orientation_vector(FRAC_PI_2), Point2::new(0.0, 1.0));
        assert_eq!(orientation_vector(-FRAC_PI_2), Point2::new(0.0, -1.0));
    }
}
