//! Engine parameter profiles derived from pedestrian types.
//!
//! Each registered [`PedType`] becomes one engine profile (desired speed,
//! body radius, spacing parameters).  Profile 0 is always the default
//! profile, so a pedestrian of an unregistered type can be substituted
//! without re-registering anything mid-run.

use ped_core::config::{DEFAULT_RADIUS, DEFAULT_SPEED};
use ped_core::{PedType, PedTypeId, ProfileId};

/// Desired time gap to the agent ahead, seconds.
pub const DEFAULT_TIME_GAP: f64 = 1.0;

/// Speed relaxation time, seconds.
pub const DEFAULT_REACTION_TIME: f64 = 0.5;

/// One motion-engine parameter profile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Profile {
    /// Desired walking speed, m/s.
    pub desired_speed: f64,
    /// Body radius, metres.
    pub radius: f64,
    /// Desired time gap, seconds.
    pub time_gap: f64,
    /// Speed relaxation time, seconds.
    pub reaction_time: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            desired_speed: DEFAULT_SPEED,
            radius: DEFAULT_RADIUS,
            time_gap: DEFAULT_TIME_GAP,
            reaction_time: DEFAULT_REACTION_TIME,
        }
    }
}

impl Profile {
    /// Derive a profile from a pedestrian type's physical parameters.
    pub fn from_type(ty: &PedType) -> Self {
        Self {
            desired_speed: ty.desired_speed(),
            radius: ty.radius(),
            ..Profile::default()
        }
    }
}

/// Registered profiles plus the pedestrian-type → profile mapping.
///
/// Built once at initialization from the type registry; `PedTypeId` is the
/// registration index.
pub struct ProfileTable {
    profiles: Vec<Profile>,
    by_type: Vec<ProfileId>,
}

impl ProfileTable {
    /// Build the table: the default profile at id 0, then one profile per
    /// registered type in registration order.
    pub fn build(types: &[PedType]) -> Self {
        let mut profiles = vec![Profile::default()];
        let mut by_type = Vec::with_capacity(types.len());
        for ty in types {
            let id = ProfileId(profiles.len() as u16);
            profiles.push(Profile::from_type(ty));
            by_type.push(id);
        }
        Self { profiles, by_type }
    }

    /// The always-present default profile.
    #[inline]
    pub fn default_profile(&self) -> ProfileId {
        ProfileId(0)
    }

    /// Profile registered for `ty`, or `None` if the type was never
    /// registered (callers substitute [`default_profile`](Self::default_profile)).
    pub fn lookup(&self, ty: PedTypeId) -> Option<ProfileId> {
        self.by_type.get(ty.index()).copied()
    }

    /// Resolve a profile id to its parameters.
    pub fn profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.get(id.index())
    }

    /// Number of profiles, the default included.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the default profile is always present
    }

    /// Iterator over `(ProfileId, &Profile)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileId, &Profile)> {
        self.profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (ProfileId(i as u16), p))
    }
}
