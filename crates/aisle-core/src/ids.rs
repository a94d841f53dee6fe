//! Dense indices into a compiled store graph.
//!
//! Waypoints are addressed by name everywhere outside `aisle-graph`.  These
//! ids exist only so the graph can keep its adjacency in flat arrays; they are
//! assigned in first-seen order when the graph is built and are not stable
//! across rebuilds.

use std::fmt;

macro_rules! graph_index {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Marks an unresolved slot, e.g. a successor naming no waypoint.
            pub const INVALID: $name = $name(u32::MAX);

            /// Checked conversion from a vector position.  `None` if `i` does
            /// not fit or would collide with [`Self::INVALID`].
            pub fn from_index(i: usize) -> Option<Self> {
                u32::try_from(i).ok().filter(|&raw| raw != u32::MAX).map($name)
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($prefix, "{}"), self.0)
                } else {
                    write!(f, concat!($prefix, "?"))
                }
            }
        }
    };
}

graph_index! {
    /// Position of a waypoint in a compiled `StoreGraph`.
    NodeId, "n"
}

graph_index! {
    /// Position of a directed successor entry in a compiled `StoreGraph`.
    EdgeId, "e"
}
