//! Semantic unit representation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a semantic unit
///
/// Serializes as a plain string (UUID or semantic ID like "claim:budget")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new random NodeId (UUID-based)
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a NodeId from a string (semantic ID)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Lifecycle status of a semantic unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    /// Stable, grounded content
    Anchored,
    /// Present but not yet grounded
    Floating,
    /// Tentative content awaiting evidence
    Hypothesis,
    /// Content that blocks progress
    Blocking,
    /// Held paradox (unresolved contradiction)
    Mu,
    /// Excluded on ethical grounds
    EthicallyBlocked,
}

impl Default for NodeStatus {
    fn default() -> Self {
        Self::Floating
    }
}

/// Categorical tags carried by a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Witness,
    Emotion,
    Intent,
    Harm,
    Manipulation,
    Deception,
    Boundary,
}

/// Whether a unit has been avoided, and whether that avoidance is respected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidedMarker {
    None,
    Avoided,
    RespectedBoundary,
}

impl Default for AvoidedMarker {
    fn default() -> Self {
        Self::None
    }
}

/// The 12 attribute axes of a semantic unit
///
/// All axes are nominally in [0, 1]; `temporality` and `shadow` may extend
/// outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axes {
    pub clarity: f64,
    pub harm: f64,
    pub empathy: f64,
    pub agency: f64,
    pub uncertainty: f64,
    pub novelty: f64,
    pub coherence: f64,
    pub practicality: f64,
    pub temporality: f64,
    pub boundary: f64,
    pub resonance: f64,
    pub shadow: f64,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            clarity: 0.5,
            harm: 0.0,
            empathy: 0.5,
            agency: 0.0,
            uncertainty: 0.5,
            novelty: 0.5,
            coherence: 0.5,
            practicality: 0.5,
            temporality: 0.0,
            boundary: 0.5,
            resonance: 0.5,
            shadow: 0.0,
        }
    }
}

impl Axes {
    /// The attribute vector as a fixed 12-entry array, axis order matching
    /// [`crate::space::AXES`].
    pub fn as_array(&self) -> [f64; 12] {
        [
            self.clarity,
            self.harm,
            self.empathy,
            self.agency,
            self.uncertainty,
            self.novelty,
            self.coherence,
            self.practicality,
            self.temporality,
            self.boundary,
            self.resonance,
            self.shadow,
        ]
    }
}

/// Epistemic provenance of a unit: which claims it was built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    /// Claim ids observed directly in the current contour
    pub observed: Vec<String>,
    /// Claim ids derived by inference
    pub inferred: Vec<String>,
    /// Claim ids assumed without evidence
    pub assumed: Vec<String>,
}

/// A semantic unit in the graph
///
/// `harm_probability` and `identity_alignment` are derived caches maintained
/// by the owning session: they are recomputed whenever a tag, status, or
/// incident edge changes. Ranges: harm in [0, 1], alignment in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Human-readable label
    pub label: String,
    /// Lifecycle status
    pub status: NodeStatus,
    /// Categorical tags
    pub tags: std::collections::BTreeSet<Tag>,
    /// Avoidance marker
    pub avoided: AvoidedMarker,
    /// 12-axis attribute profile
    pub axes: Axes,
    /// Derived: probability the unit carries harm, in [0, 1]
    pub harm_probability: f64,
    /// Derived: alignment with the session identity, in [-1, 1]
    pub identity_alignment: f64,
    /// Epistemic provenance
    pub provenance: Provenance,
}

impl Node {
    /// Create a new unit with a generated id
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(NodeId::new(), label)
    }

    /// Create a new unit with a specific id
    pub fn with_id(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            status: NodeStatus::default(),
            tags: std::collections::BTreeSet::new(),
            avoided: AvoidedMarker::default(),
            axes: Axes::default(),
            harm_probability: 0.0,
            identity_alignment: 0.0,
            provenance: Provenance::default(),
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Set the attribute profile
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    /// Set the avoidance marker
    pub fn with_avoided(mut self, marker: AvoidedMarker) -> Self {
        self.avoided = marker;
        self
    }

    /// Whether the unit carries the given tag
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_array_length() {
        let axes = Axes::default();
        assert_eq!(axes.as_array().len(), 12);
    }

    #[test]
    fn test_node_defaults() {
        let node = Node::new("concept");
        assert_eq!(node.status, NodeStatus::Floating);
        assert_eq!(node.harm_probability, 0.0);
        assert_eq!(node.identity_alignment, 0.0);
        assert!(node.tags.is_empty());
    }

    #[test]
    fn test_node_builder() {
        let node = Node::with_id(NodeId::from("n1"), "witness")
            .with_status(NodeStatus::Anchored)
            .with_tag(Tag::Witness)
            .with_tag(Tag::Witness);
        assert_eq!(node.status, NodeStatus::Anchored);
        assert_eq!(node.tags.len(), 1);
        assert!(node.has_tag(Tag::Witness));
    }
}
