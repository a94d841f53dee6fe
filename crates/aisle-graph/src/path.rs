//! Ordered walks through the store graph.

use std::fmt;
use std::ops::Deref;

use aisle_core::WaypointName;

/// A non-empty walk: consecutive waypoints are graph-adjacent.
///
/// Length is counted in nodes, so a one-node segment (start == goal) has
/// length 1 and no edges.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PathSegment(pub(crate) Vec<WaypointName>);

impl PathSegment {
    /// The trivial walk that stays at `node`.
    pub fn single(node: WaypointName) -> Self {
        Self(vec![node])
    }

    /// Wrap an existing node sequence; `None` if it is empty.
    pub fn from_nodes(nodes: Vec<WaypointName>) -> Option<Self> {
        if nodes.is_empty() { None } else { Some(Self(nodes)) }
    }

    /// Number of edges walked.
    pub fn edge_count(&self) -> usize {
        self.0.len() - 1
    }

    pub fn first(&self) -> &WaypointName {
        &self.0[0]
    }

    pub fn last(&self) -> &WaypointName {
        &self.0[self.0.len() - 1]
    }

    /// Append `leg`, which must start where `self` ends.  The shared junction
    /// node is kept once.
    pub fn extend_leg(&mut self, leg: &PathSegment) {
        debug_assert_eq!(self.last(), leg.first(), "legs must share a junction node");
        self.0.extend_from_slice(&leg.0[1..]);
    }

    pub fn into_nodes(self) -> Vec<WaypointName> {
        self.0
    }
}

impl Deref for PathSegment {
    type Target = [WaypointName];
    fn deref(&self) -> &[WaypointName] {
        &self.0
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(node)?;
        }
        Ok(())
    }
}
