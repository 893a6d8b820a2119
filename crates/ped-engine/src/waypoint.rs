//! The waypoint reference engine.
//!
//! Agents walk straight toward their journey waypoint at the profile's
//! desired speed, one micro-step at a time.  There is no inter-agent
//! interaction and no wall avoidance — the accessible geometry is used
//! only to validate construction and to bound insertions.  Sufficient for
//! route-level semantics (progress, transitions, arrival); swap in a crowd
//! model behind [`MotionEngine`] when interaction physics matter.

use std::collections::HashMap;

use ped_core::{EngineAgentId, JourneyId, Point2, ProfileId, SimTime};
use ped_geom::AreaSet;

use crate::engine::{AgentParameters, AgentSnapshot, JourneyDescriptor, MotionEngine};
use crate::error::{EngineError, EngineResult};
use crate::profile::{Profile, ProfileTable};

#[derive(Debug)]
struct EngineAgent {
    journey: JourneyId,
    profile: ProfileId,
    position: Point2,
    orientation: Point2,
}

/// Straight-line waypoint-seeking [`MotionEngine`].
#[derive(Debug)]
pub struct WaypointEngine {
    step_secs: f64,
    /// Axis-aligned bounds of all accessible areas; insertions outside are
    /// rejected.
    bounds: (Point2, Point2),
    profiles: Vec<Profile>,
    journeys: HashMap<JourneyId, JourneyDescriptor>,
    agents: HashMap<EngineAgentId, EngineAgent>,
    next_journey: u32,
    next_agent: u64,
}

impl WaypointEngine {
    /// Build an engine from exported areas, the profile table, and the
    /// micro-step length.
    ///
    /// Fails with [`EngineError::Build`] if there is no accessible area or
    /// any ring is degenerate — the counterpart of a null geometry handle,
    /// and fatal for the enclosing simulation.
    pub fn build(areas: &AreaSet, profiles: &ProfileTable, step: SimTime) -> EngineResult<Self> {
        if areas.accessible.is_empty() {
            return Err(EngineError::Build("no accessible area".to_owned()));
        }
        if step.0 == 0 {
            return Err(EngineError::Build("zero micro-step length".to_owned()));
        }
        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);
        for ring in &areas.accessible {
            if ring.len() < 3 {
                return Err(EngineError::Build(format!(
                    "accessible ring with {} vertices",
                    ring.len()
                )));
            }
            for p in ring {
                min = Point2::new(min.x.min(p.x), min.y.min(p.y));
                max = Point2::new(max.x.max(p.x), max.y.max(p.y));
            }
        }

        Ok(Self {
            step_secs: step.as_secs_f64(),
            bounds: (min, max),
            profiles: profiles.iter().map(|(_, p)| *p).collect(),
            journeys: HashMap::new(),
            agents: HashMap::new(),
            next_journey: 0,
            next_agent: 0,
        })
    }

    /// Number of agents currently in the engine.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    fn in_bounds(&self, p: Point2) -> bool {
        let (min, max) = self.bounds;
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

impl MotionEngine for WaypointEngine {
    fn add_journey(&mut self, journey: JourneyDescriptor) -> EngineResult<JourneyId> {
        let id = JourneyId(self.next_journey);
        self.next_journey += 1;
        self.journeys.insert(id, journey);
        Ok(id)
    }

    fn add_agent(&mut self, params: AgentParameters) -> EngineResult<EngineAgentId> {
        if self.profiles.get(params.profile.index()).is_none() {
            return Err(EngineError::UnknownProfile(params.profile));
        }
        if !self.journeys.contains_key(&params.journey) {
            return Err(EngineError::UnknownJourney(params.journey));
        }
        if !self.in_bounds(params.position) {
            return Err(EngineError::Rejected(format!(
                "position {} outside the accessible area",
                params.position
            )));
        }

        let id = EngineAgentId(self.next_agent);
        self.next_agent += 1;
        let orientation = params.orientation.normalized();
        self.agents.insert(
            id,
            EngineAgent {
                journey: params.journey,
                profile: params.profile,
                position: params.position,
                orientation: if orientation == Point2::default() {
                    Point2::new(1.0, 0.0)
                } else {
                    orientation
                },
            },
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
        for a in self.agents.values_mut() {
            let journey = self
                .journeys
                .get(&a.journey)
                .ok_or(EngineError::UnknownJourney(a.journey))?;
            let to_goal = journey.waypoint - a.position;
            let dist = to_goal.length();
            if dist == 0.0 {
                continue;
            }
            let speed = self.profiles[a.profile.index()].desired_speed;
            let step_len = speed * self.step_secs;
            let dir = to_goal.normalized();
            a.position = if dist <= step_len {
                journey.waypoint
            } else {
                a.position + dir * step_len
            };
            a.orientation = dir;
        }
        Ok(())
    }

    fn agent_state(&self, agent: EngineAgentId) -> EngineResult<AgentSnapshot> {
        self.agents
            .get(&agent)
            .map(|a| AgentSnapshot {
                position: a.position,
                orientation: a.orientation,
            })
            .ok_or(EngineError::UnknownAgent(agent))
    }
}
