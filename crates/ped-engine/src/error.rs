//! Engine-subsystem error type.

use thiserror::Error;

use ped_core::{EngineAgentId, JourneyId, ProfileId};

/// Errors reported across the motion-engine seam.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Geometry/model/simulation construction failed.  Effectively fatal:
    /// callers must escalate, not continue with a half-built engine.
    #[error("engine build failed: {0}")]
    Build(String),

    /// The engine rejected an agent insertion.  Recoverable — retry later.
    #[error("agent insertion rejected: {0}")]
    Rejected(String),

    /// An internal error during a micro-step.
    #[error("iteration failed: {0}")]
    Iteration(String),

    #[error("unknown engine agent {0}")]
    UnknownAgent(EngineAgentId),

    #[error("unknown journey {0}")]
    UnknownJourney(JourneyId),

    #[error("unknown profile {0}")]
    UnknownProfile(ProfileId),
}

pub type EngineResult<T> = Result<T, EngineError>;
