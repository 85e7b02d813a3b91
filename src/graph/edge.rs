//! Typed weighted edges between semantic units

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// Relationship type of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// One unit supports another
    Supports,
    /// Units stand in productive contrast
    Contrasts,
    /// Units are mutually exclusive
    Mutex,
    /// One unit causes another
    Causes,
    /// A deliberately built bridge (shadow integration)
    Bridges,
    /// Units resonate without direct support
    Resonates,
}

impl Default for EdgeKind {
    fn default() -> Self {
        Self::Supports
    }
}

/// A directed typed edge with positive weight
///
/// Both endpoints must exist in the owning graph; node removal prunes
/// incident edges atomically, so dangling edges never survive an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source unit
    pub from: NodeId,
    /// Target unit
    pub to: NodeId,
    /// Relationship type
    pub kind: EdgeKind,
    /// Positive relationship weight
    pub weight: f64,
}

impl Edge {
    /// Create a new edge with weight 1.0
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, kind: EdgeKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            weight: 1.0,
        }
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Endpoint pair, used for set comparisons between graphs
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.from, &self.to)
    }

    /// Whether the edge touches the given unit on either side
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.from == id || &self.to == id
    }
}
