//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into parallel `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a pedestrian known to the model layer.
    pub struct PedestrianId(u32);
}

typed_id! {
    /// Index of a lane-network edge.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Index of a lane within the lane network.
    pub struct LaneId(u32);
}

typed_id! {
    /// Index of a junction in the lane network.
    pub struct JunctionId(u32);
}

typed_id! {
    /// Index of a registered pedestrian type.  `u16` keeps the profile
    /// lookup table compact (max 65,535 types).
    pub struct PedTypeId(u16);
}

typed_id! {
    /// Motion-engine parameter profile handle.
    pub struct ProfileId(u16);
}

typed_id! {
    /// Motion-engine journey handle.
    pub struct JourneyId(u32);
}

typed_id! {
    /// Motion-engine agent handle.  Owned by exactly one `AgentRecord`.
    pub struct EngineAgentId(u64);
}
