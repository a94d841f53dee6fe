//! Waypoints: the named nodes of a store layout and their directional exits.
//!
//! A waypoint lists its successors under four movement labels.  The labels
//! are an authoring convenience for whoever draws the layout; once the graph
//! is built only the concatenated successor order survives:
//!
//! ```text
//! successors = left ++ right ++ straight ++ back
//! ```
//!
//! That order decides BFS tie-breaks, so [`Direction::ALL`] must never be
//! reordered.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use crate::{AisleError, AisleResult};

// ── WaypointName ──────────────────────────────────────────────────────────────

/// The unique name of a waypoint, also its graph key.
///
/// Backed by `Arc<str>`: route search clones names into every candidate
/// path, and a refcount bump is all that costs.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointName(Arc<str>);

impl WaypointName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// `raw` unchanged, or [`AisleError::InvalidWaypoint`] if it is blank.
    ///
    /// Names are matched exactly, so surrounding whitespace is kept.
    pub fn parse(raw: &str) -> AisleResult<Self> {
        if raw.trim().is_empty() {
            return Err(AisleError::InvalidWaypoint("empty waypoint name".into()));
        }
        Ok(Self::new(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for WaypointName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WaypointName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WaypointName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WaypointName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WaypointName {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl PartialEq<str> for WaypointName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for WaypointName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for WaypointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for WaypointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WaypointName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WaypointName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(WaypointName::from)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Movement label attached to a successor list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Left,
    Right,
    Straight,
    Back,
}

impl Direction {
    /// Concatenation order used when flattening directions into out-edges.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Straight,
        Direction::Back,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left     => "left",
            Direction::Right    => "right",
            Direction::Straight => "straight",
            Direction::Back     => "back",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AisleError;

    fn from_str(s: &str) -> AisleResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left"     => Ok(Direction::Left),
            "right"    => Ok(Direction::Right),
            "straight" => Ok(Direction::Straight),
            "back"     => Ok(Direction::Back),
            other => Err(AisleError::InvalidWaypoint(format!(
                "unknown direction {other:?}: expected left, right, straight, or back"
            ))),
        }
    }
}

// ── Directions ────────────────────────────────────────────────────────────────

/// Successor lists of one waypoint, keyed by [`Direction`].
///
/// A missing label is an empty list.  Duplicates are kept as written.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Directions {
    pub left:     Vec<WaypointName>,
    pub right:    Vec<WaypointName>,
    pub straight: Vec<WaypointName>,
    pub back:     Vec<WaypointName>,
}

impl Directions {
    pub fn get(&self, dir: Direction) -> &[WaypointName] {
        match dir {
            Direction::Left     => &self.left,
            Direction::Right    => &self.right,
            Direction::Straight => &self.straight,
            Direction::Back     => &self.back,
        }
    }

    pub fn get_mut(&mut self, dir: Direction) -> &mut Vec<WaypointName> {
        match dir {
            Direction::Left     => &mut self.left,
            Direction::Right    => &mut self.right,
            Direction::Straight => &mut self.straight,
            Direction::Back     => &mut self.back,
        }
    }

    /// All successors in [`Direction::ALL`] order, duplicates included.
    pub fn successors(&self) -> impl Iterator<Item = &WaypointName> + '_ {
        Direction::ALL.into_iter().flat_map(move |d| self.get(d).iter())
    }

    /// Total number of successor entries across all four labels.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.straight.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A named node of the store layout, as persisted by the layout store.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name: WaypointName,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directions: Directions,
}

impl Waypoint {
    /// A waypoint with no exits.
    pub fn new(name: impl Into<WaypointName>) -> Self {
        Self { name: name.into(), directions: Directions::default() }
    }

    /// Append successors under `dir`.  Chainable, for fixtures and builders.
    pub fn with<I, N>(mut self, dir: Direction, successors: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<WaypointName>,
    {
        self.directions
            .get_mut(dir)
            .extend(successors.into_iter().map(Into::into));
        self
    }

    /// Reject a record with a blank name.
    ///
    /// Successor names are not checked: one that names no record (blank
    /// included) becomes a dangling edge when the graph is built.
    pub fn validate(&self) -> AisleResult<()> {
        if self.name.trim().is_empty() {
            return Err(AisleError::InvalidWaypoint("empty waypoint name".into()));
        }
        Ok(())
    }
}
