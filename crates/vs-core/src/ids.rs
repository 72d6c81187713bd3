//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` and index into an owning arena: vehicles
//! and vertiports live in `Vec`s held by the simulation, ground nodes and
//! gates in `Vec`s held by each vertiport.  Cross references are always by
//! id, never by pointer, so there is no cyclic ownership between vehicles and
//! the vertiports whose resources they hold.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equal to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as an arena index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build an id from an arena position.  Arenas here are tiny, so
            /// the narrowing cast never truncates in practice.
            #[inline(always)]
            pub fn from_index(i: usize) -> Self {
                $name(i as $inner)
            }

            /// `true` unless this is the `INVALID` sentinel.
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
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
    /// Index of a vehicle in the simulation's vehicle arena (registration order).
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a vertiport in the simulation's vertiport arena.
    pub struct VertiportId(u32);
}

typed_id! {
    /// Index of a ground node within a vertiport's layout (definition order).
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a gate slot within a vertiport (definition order).
    pub struct GateId(u32);
}
