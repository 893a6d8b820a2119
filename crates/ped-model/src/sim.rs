//! The engine-backed model: agent registry, tick driver, and position
//! reconciliation.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, error, warn};

use ped_core::{EdgeId, EngineAgentId, ModelConfig, PedestrianId, Point2, SimRng, SimTime};
use ped_engine::{AgentParameters, EngineError, JourneyDescriptor, MotionEngine, ProfileTable};
use ped_net::{LaneNetwork, LateralPlacement, NearestLaneMatcher, NetError, RouteStage};

use crate::record::{AgentRecord, Phase};
use crate::{ModelError, ModelResult, Pedestrian, PedestrianModel};

/// Orientation angles this close to ±π/2 are treated as vertical; `tan`
/// is unusable there.
const VERTICAL_EPS: f64 = 1e-3;

/// The engine-backed pedestrian model.
///
/// Owns the lane network, the nearest-lane matcher, the motion engine and
/// its profile table, and one [`AgentRecord`] per registered pedestrian.
/// Single-threaded: [`execute`](PedestrianModel::execute) is the only
/// mutation site during a tick, registration happens between ticks.
pub struct EngineModel<E, M> {
    net:      LaneNetwork,
    matcher:  M,
    engine:   E,
    profiles: ProfileTable,
    config:   ModelConfig,
    rng:      SimRng,
    records:  Vec<AgentRecord>,
}

impl<E: MotionEngine, M: NearestLaneMatcher> EngineModel<E, M> {
    pub fn new(
        net: LaneNetwork,
        matcher: M,
        engine: E,
        profiles: ProfileTable,
        config: ModelConfig,
        seed: u64,
    ) -> Self {
        Self {
            net,
            matcher,
            engine,
            profiles,
            config,
            rng: SimRng::new(seed),
            records: Vec::new(),
        }
    }

    fn record(&self, ped: PedestrianId) -> Option<&AgentRecord> {
        self.records.iter().find(|r| r.ped.id == ped)
    }

    // ── Read-back accessors ───────────────────────────────────────────────

    pub fn position(&self, ped: PedestrianId) -> Option<Point2> {
        self.record(ped).map(|r| r.position)
    }

    pub fn previous_position(&self, ped: PedestrianId) -> Option<Point2> {
        self.record(ped).map(|r| r.previous_position)
    }

    /// Facing angle in radians at the last readback.
    pub fn heading(&self, ped: PedestrianId) -> Option<f64> {
        self.record(ped).map(|r| r.heading)
    }

    /// Longitudinal offset along the matched route lane, metres.
    pub fn lane_progress(&self, ped: PedestrianId) -> Option<f64> {
        self.record(ped).map(|r| r.lane_progress)
    }

    /// Mean speed over the last tick, m/s.
    pub fn speed(&self, ped: PedestrianId) -> Option<f64> {
        self.record(ped).map(|r| r.speed(self.config.tick_length))
    }

    /// The route edge after the cursor, if any.
    pub fn next_edge(&self, ped: PedestrianId) -> Option<EdgeId> {
        self.record(ped).and_then(|r| r.stage.next_edge())
    }

    pub fn phase(&self, ped: PedestrianId) -> Option<Phase> {
        self.record(ped).map(|r| r.phase)
    }
}

impl<E: MotionEngine, M: NearestLaneMatcher> PedestrianModel for EngineModel<E, M> {
    fn add(&mut self, ped: Pedestrian, stage: RouteStage) -> ModelResult<()> {
        let (_, depart_lane) = self
            .net
            .sidewalk(stage.first_edge())
            .ok_or(NetError::MissingSidewalk(stage.first_edge()))?;
        let (_, arrival_lane) = self
            .net
            .sidewalk(stage.last_edge())
            .ok_or(NetError::MissingSidewalk(stage.last_edge()))?;

        let lateral = match stage.lateral {
            LateralPlacement::Center    => 0.0,
            LateralPlacement::Offset(d) => d,
            LateralPlacement::Random => {
                let half = depart_lane.width / 2.0;
                self.rng.gen_range(-half..half)
            }
        };
        // Lateral placements are given in lane convention, which runs
        // opposite to the shape's left-of-travel direction.
        let position = depart_lane
            .shape
            .position_at_offset(stage.depart_pos, -lateral);
        let angle = depart_lane.shape.rotation_at_offset(stage.depart_pos);
        let destination = arrival_lane.shape.position_at_offset(stage.arrival_pos, 0.0);

        let journey = self.engine.add_journey(JourneyDescriptor {
            waypoint:  destination,
            tolerance: self.config.exit_tolerance,
        })?;

        let profile = match self.profiles.lookup(ped.ped_type) {
            Some(id) => id,
            None => {
                warn!(ped = %ped.id, ped_type = %ped.ped_type,
                      "no engine profile for type, using the default profile");
                self.profiles.default_profile()
            }
        };

        let mut record = AgentRecord {
            ped,
            stage,
            phase: Phase::Pending,
            params: AgentParameters {
                journey,
                profile,
                position,
                orientation: orientation_vector(angle),
            },
            engine_id: EngineAgentId::INVALID,
            destination,
            position,
            previous_position: position,
            heading: angle,
            lane_progress: 0.0,
        };
        try_insert(&mut self.engine, &mut record)?;
        self.records.push(record);
        Ok(())
    }

    fn remove(&mut self, ped: PedestrianId) -> ModelResult<()> {
        let idx = self
            .records
            .iter()
            .position(|r| r.ped.id == ped)
            .ok_or(ModelError::PedestrianNotFound(ped))?;
        let record = self.records.remove(idx);
        if record.phase == Phase::Active {
            self.engine.remove_agent(record.engine_id)?;
        }
        debug!(ped = %ped, "pedestrian removed");
        Ok(())
    }

    fn execute(&mut self, now: SimTime) -> ModelResult<SimTime> {
        for _ in 0..self.config.micro_steps() {
            if let Err(err) = self.engine.iterate() {
                // Keep stepping: one failed micro-step must not stall the
                // whole tick.
                error!(%now, %err, "engine micro-step failed");
            }
        }

        let mut idx = 0;
        while idx < self.records.len() {
            let record = &mut self.records[idx];

            if record.phase == Phase::Pending {
                try_insert(&mut self.engine, record)?;
                idx += 1;
                continue;
            }

            let snap = self.engine.agent_state(record.engine_id)?;
            record.previous_position = record.position;
            record.position = snap.position;
            record.heading = snap.orientation.angle();
            reconcile(&self.net, &self.matcher, record);

            if record.position.distance(record.destination) < self.config.exit_tolerance {
                self.engine.remove_agent(record.engine_id)?;
                while !record.stage.advance() {}
                record.phase = Phase::Arrived;
                debug!(%now, ped = %record.ped.id, "pedestrian arrived");
                self.records.remove(idx);
            } else {
                idx += 1;
            }
        }
        Ok(self.config.tick_length)
    }

    fn clear_state(&mut self) {
        self.records.clear();
    }

    fn active_count(&self) -> usize {
        self.records.len()
    }
}

/// Initial facing vector for an angle, with the vertical singularity
/// special-cased.
pub(crate) fn orientation_vector(angle: f64) -> Point2 {
    if (angle.abs() - FRAC_PI_2).abs() < VERTICAL_EPS {
        Point2::new(0.0, angle.signum())
    } else {
        Point2::new(1.0, angle.tan())
    }
}

/// Attempt engine insertion for a pending record.
///
/// A rejection keeps the record pending for a retry next tick; any other
/// engine error escalates.
fn try_insert<E: MotionEngine>(engine: &mut E, record: &mut AgentRecord) -> ModelResult<()> {
    match engine.add_agent(record.params) {
        Ok(id) => {
            record.engine_id = id;
            record.phase = Phase::Active;
            debug!(ped = %record.ped.id, engine_id = %id, "pedestrian inserted");
            Ok(())
        }
        Err(EngineError::Rejected(msg)) => {
            warn!(ped = %record.ped.id, %msg, "insertion rejected, will retry");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Pull a free engine position back onto the route.
///
/// Matches only against the forward part of the route, so a pedestrian can
/// never be matched onto an edge it already passed.  When the nearest
/// permitted lane belongs to a later edge and both the current and matched
/// edges are normal edges, the cursor advances exactly once; crossings and
/// walking areas never move it.
pub(crate) fn reconcile(
    net: &LaneNetwork,
    matcher: &impl NearestLaneMatcher,
    record: &mut AgentRecord,
) {
    let Some(found) = matcher.nearest_lane(
        record.position,
        record.stage.forward_edges(),
        record.ped.class,
    ) else {
        return;
    };

    record.lane_progress = found.offset;

    let current = record.stage.current_edge();
    if found.edge != current && net.kind(found.edge).is_normal() && net.kind(current).is_normal() {
        let done = record.stage.advance();
        debug_assert!(!done, "matched a forward edge past the route end");
    }
}
