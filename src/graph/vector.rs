//! Attention vectors: candidate sub-graphs competing for selection

use super::edge::Edge;
use super::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an attention vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorId(Uuid);

impl VectorId {
    /// Create a new random VectorId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VectorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One candidate sub-graph: seed, expansion, and the scores attached to it
/// over the course of a cycle
///
/// A vector is owned by the workflow invocation that created it; only the
/// chosen winner escapes, by value, on the cycle outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttentionVector {
    /// Generated identifier
    pub id: VectorId,
    /// The seed units expansion started from
    pub seed_nodes: Vec<NodeId>,
    /// All member units, in breadth-first discovery order
    pub members: Vec<NodeId>,
    /// Graph edges with both endpoints among the members
    pub edges: Vec<Edge>,
    /// Whether the vector may be acted on (ethics pass decides)
    pub executable: bool,

    // Scores populated progressively during one cycle
    /// Capital score before directional extension
    pub tsc_base: f64,
    /// Capital score after directional alignment and ethics multiplier
    pub tsc_extended: f64,
    /// Ethics multiplier in [0.1, 1.0]
    pub ethical_coefficient: f64,
    /// Attention magnitude from the five-dimensional summary
    pub scav_magnitude: f64,
    /// Composite attention health in [0, 1]
    pub scav_health: f64,
    /// Lag-1 direction stability
    pub consistency: f64,
    /// Field resonance component
    pub resonance_score: f64,
    /// Flow score for this vector
    pub flow_score: f64,
    /// Rank agreement between capital and attention orderings
    pub stereoscopic_alignment: f64,
    /// Amplitude disagreement between capital and attention z-scores
    pub stereoscopic_gap: f64,
    /// Weighted attribute direction, raw (12 entries once computed)
    pub direction_raw: Vec<f64>,
    /// Weighted negated attributes of shadow contributors, raw
    pub shadow_raw: Vec<f64>,
}

impl AttentionVector {
    /// Create a candidate from its expansion
    pub fn new(seed_nodes: Vec<NodeId>, members: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        Self {
            id: VectorId::new(),
            seed_nodes,
            members,
            edges,
            executable: true,
            tsc_base: 0.0,
            tsc_extended: 0.0,
            ethical_coefficient: 1.0,
            scav_magnitude: 0.0,
            scav_health: 0.0,
            consistency: 0.0,
            resonance_score: 0.0,
            flow_score: 0.0,
            stereoscopic_alignment: 0.0,
            stereoscopic_gap: 0.0,
            direction_raw: Vec::new(),
            shadow_raw: Vec::new(),
        }
    }

    /// Number of member units
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the vector has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
