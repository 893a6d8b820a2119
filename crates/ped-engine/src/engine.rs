//! The motion-engine trait and the values handed across it.

use ped_core::{EngineAgentId, JourneyId, Point2, ProfileId};

use crate::EngineResult;

/// A journey: one destination waypoint with an arrival tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JourneyDescriptor {
    /// Destination point in network coordinates.
    pub waypoint: Point2,
    /// Radius (metres) within which the waypoint counts as reached.
    pub tolerance: f64,
}

/// Parameters for inserting one agent into the engine.
#[derive(Copy, Clone, Debug)]
pub struct AgentParameters {
    pub journey: JourneyId,
    pub profile: ProfileId,
    pub position: Point2,
    /// Initial facing direction (need not be normalized).
    pub orientation: Point2,
}

/// Position and facing of one agent, read back after micro-steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub position: Point2,
    pub orientation: Point2,
}

/// The stepped external motion engine.
///
/// Construction is implementation-specific (geometry, profiles, and the
/// micro-step length go in up front); this trait covers only the per-run
/// operations.  Every method returns a `Result`: an `Err` carries the
/// engine's error message, `Ok` means success.
///
/// Micro-step calls are synchronous — [`iterate`](Self::iterate) blocks
/// until the step completes, so partial-step agent states are never
/// observable through [`agent_state`](Self::agent_state).
pub trait MotionEngine {
    /// Register a journey; the returned id is referenced by agent parameters.
    fn add_journey(&mut self, journey: JourneyDescriptor) -> EngineResult<JourneyId>;

    /// Insert an agent.  A rejection is recoverable: the caller may retry
    /// with the same parameters on a later tick.
    fn add_agent(&mut self, params: AgentParameters) -> EngineResult<EngineAgentId>;

    /// Remove an agent from the simulation.
    fn remove_agent(&mut self, agent: EngineAgentId) -> EngineResult<()>;

    /// Advance the engine by one micro-step.
    fn iterate(&mut self) -> EngineResult<()>;

    /// Read back an agent's position and orientation.
    fn agent_state(&self, agent: EngineAgentId) -> EngineResult<AgentSnapshot>;
}
