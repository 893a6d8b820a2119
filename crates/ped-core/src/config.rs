//! Model configuration and pedestrian type parameters.

use std::path::PathBuf;

use crate::time::SimTime;

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Configuration for the engine-backed pedestrian model.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable the
/// `serde` feature) and passed to `EngineModel`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Outer simulation tick length.  One `execute` call spans one tick.
    pub tick_length: SimTime,

    /// Motion-engine micro-step length.  Must evenly divide `tick_length`;
    /// the engine is iterated `tick_length / engine_step` times per tick.
    pub engine_step: SimTime,

    /// Maximum distance (metres) from the destination at which an agent is
    /// considered arrived.
    pub exit_tolerance: f64,

    /// If set, the selected walkable polygon is written to this path as WKT
    /// at initialization (debug sink, not part of the model contract).
    pub geometry_dump: Option<PathBuf>,
}

impl ModelConfig {
    /// Number of engine micro-steps per outer tick.
    ///
    /// The tick/step ratio is assumed integer; a remainder is a
    /// configuration error and trips a debug assertion.
    #[inline]
    pub fn micro_steps(&self) -> u64 {
        debug_assert!(self.engine_step.0 > 0);
        debug_assert_eq!(self.tick_length.0 % self.engine_step.0, 0);
        self.tick_length.0 / self.engine_step.0
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            tick_length:    SimTime::from_secs(1),
            engine_step:    SimTime::from_millis(50),
            exit_tolerance: 1.0,
            geometry_dump:  None,
        }
    }
}

// ── PedType ───────────────────────────────────────────────────────────────────

/// Default body radius (metres) when a type sets neither length nor width.
pub const DEFAULT_RADIUS: f64 = 0.3;

/// Default desired walking speed (m/s).
pub const DEFAULT_SPEED: f64 = 1.39;

/// Physical parameters of a pedestrian type, registered with the model at
/// initialization and turned into a motion-engine parameter profile.
///
/// `length` and `width` are optional: unset dimensions fall back per the
/// derivation rules in [`radius`](Self::radius).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PedType {
    /// Type name, for diagnostics only.
    pub name: String,

    /// Body length in metres, if explicitly set.
    pub length: Option<f64>,

    /// Body width in metres, if explicitly set.
    pub width: Option<f64>,

    /// Hard speed cap of the type (m/s).
    pub max_speed: f64,

    /// Preferred walking speed of the type (m/s).
    pub desired_max_speed: f64,
}

impl PedType {
    /// Circular body radius for the motion engine.
    ///
    /// - neither length nor width set → [`DEFAULT_RADIUS`]
    /// - only length set → half of length
    /// - only width set → half of width
    /// - both set → quarter of their sum
    pub fn radius(&self) -> f64 {
        match (self.length, self.width) {
            (None, None)        => DEFAULT_RADIUS,
            (Some(l), None)     => 0.5 * l,
            (None, Some(w))     => 0.5 * w,
            (Some(l), Some(w))  => 0.25 * (l + w),
        }
    }

    /// Desired engine speed: the lower of the hard cap and the preference.
    #[inline]
    pub fn desired_speed(&self) -> f64 {
        self.max_speed.min(self.desired_max_speed)
    }
}

impl Default for PedType {
    fn default() -> Self {
        Self {
            name:              "default".to_owned(),
            length:            None,
            width:             None,
            max_speed:         DEFAULT_SPEED,
            desired_max_speed: DEFAULT_SPEED,
        }
    }
}
