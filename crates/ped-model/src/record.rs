//! Per-pedestrian bookkeeping carried between ticks.

use ped_core::{EngineAgentId, Point2, SimTime};
use ped_engine::AgentParameters;
use ped_net::RouteStage;

use crate::Pedestrian;

/// Lifecycle phase of a registered pedestrian.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Registered but not yet accepted by the motion engine.  Insertion is
    /// retried every tick.
    Pending,
    /// Walking inside the engine.
    Active,
    /// Within exit tolerance of the destination; the record is dropped in
    /// the same tick this is set.
    Arrived,
}

/// Everything the model tracks about one pedestrian.
#[derive(Clone, Debug)]
pub struct AgentRecord {
    pub ped:    Pedestrian,
    pub stage:  RouteStage,
    pub phase:  Phase,
    /// Insertion parameters, kept for pending-phase retries.
    pub params: AgentParameters,
    /// Engine handle; `INVALID` while pending.
    pub engine_id: EngineAgentId,

    /// Destination point (arrival-lane shape at the arrival offset).
    pub destination: Point2,
    /// Position read back after the last tick.
    pub position: Point2,
    /// Position one tick earlier, for speed estimation.
    pub previous_position: Point2,
    /// Facing angle in radians at the last readback.
    pub heading: f64,
    /// Longitudinal offset along the matched route lane, metres.  Retains
    /// its previous value over ticks where no lane matches.
    pub lane_progress: f64,
}

impl AgentRecord {
    /// Mean speed over the last tick, m/s.
    pub fn speed(&self, tick: SimTime) -> f64 {
        self.position.distance(self.previous_position) / tick.as_secs_f64()
    }
}
