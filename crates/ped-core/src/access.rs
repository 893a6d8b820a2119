//! Access classes and lane permissions.
//!
//! A lane carries a `Permissions` bit set naming which access classes may
//! travel on it.  The nearest-lane matcher filters candidate lanes by the
//! querying pedestrian's class, so a pedestrian is never snapped onto a
//! lane it is not allowed to walk on.

/// The access class a network user travels under.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum AccessClass {
    /// On foot (the default for everything in this framework).
    #[default]
    Pedestrian,
    /// Bicycle.
    Bicycle,
    /// Motorized vehicle.
    Vehicle,
}

impl AccessClass {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            AccessClass::Pedestrian => 1 << 0,
            AccessClass::Bicycle    => 1 << 1,
            AccessClass::Vehicle    => 1 << 2,
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessClass::Pedestrian => "pedestrian",
            AccessClass::Bicycle    => "bicycle",
            AccessClass::Vehicle    => "vehicle",
        }
    }
}

impl std::fmt::Display for AccessClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bit set of access classes permitted on a lane.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions(u8);

impl Permissions {
    /// No class permitted.
    pub const NONE: Permissions = Permissions(0);

    /// Pedestrian-only lane (the sidewalk default).
    pub const PEDESTRIAN: Permissions = Permissions(1 << 0);

    /// Every class permitted.
    pub const ALL: Permissions = Permissions(u8::MAX);

    /// Build a permission set from a list of classes.
    pub fn of(classes: &[AccessClass]) -> Permissions {
        Permissions(classes.iter().fold(0, |acc, c| acc | c.bit()))
    }

    /// `true` if `class` may travel on a lane with these permissions.
    #[inline]
    pub fn allows(self, class: AccessClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Set union of two permission sets.
    #[inline]
    pub fn with(self, other: Permissions) -> Permissions {
        Permissions(self.0 | other.0)
    }
}

impl Default for Permissions {
    /// Sidewalk default: pedestrians only.
    fn default() -> Self {
        Permissions::PEDESTRIAN
    }
}
