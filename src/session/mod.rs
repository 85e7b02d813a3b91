//! Sessions: one graph plus its state and adaptive parameters

mod epistemic;
mod params;
mod state;

pub use epistemic::{EpistemicClaim, Observability, Scope, Stance};
pub use params::{AdaptiveParameters, ParameterSnapshot, ParameterTrace};
pub use state::{Cmp, FailRecord, ParameterKind, ParameterUpdate, SessionState, Window};

use crate::engine::{EngineError, EngineResult};
use crate::graph::{Edge, Node, NodeId, NodeStatus, SemanticGraph, Tag};
use crate::metrics::ethics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a session
///
/// Serializes as a plain string (UUID or semantic ID like "session:review")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new random SessionId (UUID-based)
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create a SessionId from a string (semantic ID)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Outcome of an explicit paradox-collapse request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParadoxCollapse {
    /// Whether density exceeded the threshold at all
    pub activated: bool,
    /// Units re-anchored by the collapse
    pub collapsed: Vec<NodeId>,
    pub density_before: f64,
    pub density_after: f64,
    pub consent: bool,
}

/// Serializable summary of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub cycle: u64,
    pub params: ParameterSnapshot,
    pub fail_count: usize,
    pub claim_count: usize,
    pub created_at: DateTime<Utc>,
}

/// One independent evaluation session: the graph it owns, its rolling state,
/// and its adaptive parameters
///
/// All mutating operations re-establish the derived-ethics invariant: the
/// harm/alignment caches of every unit whose tags, status, or neighborhood
/// changed are recomputed before the operation returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub graph: SemanticGraph,
    pub state: SessionState,
    pub params: AdaptiveParameters,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: SemanticGraph::new(),
            state: SessionState::new(),
            params: AdaptiveParameters::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a unit and compute its ethics caches
    pub fn add_unit(&mut self, node: Node) -> NodeId {
        let id = self.graph.add_node(node);
        self.refresh_neighborhood(&id);
        id
    }

    /// Add an edge; both endpoints must already exist
    pub fn link(&mut self, edge: Edge) -> EngineResult<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.graph.contains(endpoint) {
                return Err(EngineError::NodeNotFound(endpoint.to_string()));
            }
        }
        let (from, to) = (edge.from.clone(), edge.to.clone());
        self.graph.add_edge(edge);
        ethics::refresh_node(&mut self.graph, &from);
        ethics::refresh_node(&mut self.graph, &to);
        Ok(())
    }

    /// Remove a unit, prune its edges, and refresh its former neighbors.
    /// A no-op for unknown ids.
    pub fn remove_unit(&mut self, id: &NodeId) {
        let neighbors = self.graph.neighbors(id);
        self.graph.remove_node(id);
        for nb in neighbors {
            ethics::refresh_node(&mut self.graph, &nb);
        }
    }

    /// Change a unit's status and refresh the touched neighborhood
    pub fn set_status(&mut self, id: &NodeId, status: NodeStatus) -> EngineResult<()> {
        let node = self
            .graph
            .get_node_mut(id)
            .ok_or_else(|| EngineError::NodeNotFound(id.to_string()))?;
        node.status = status;
        self.refresh_neighborhood(id);
        Ok(())
    }

    /// Add a tag to a unit and refresh its caches
    pub fn tag_unit(&mut self, id: &NodeId, tag: Tag) -> EngineResult<()> {
        let node = self
            .graph
            .get_node_mut(id)
            .ok_or_else(|| EngineError::NodeNotFound(id.to_string()))?;
        node.tags.insert(tag);
        ethics::refresh_node(&mut self.graph, id);
        Ok(())
    }

    /// Register an epistemic claim with the session
    pub fn register_claim(&mut self, claim: EpistemicClaim) {
        self.state.register_claim(claim);
    }

    /// Feed one success difficulty into the skill estimate
    pub fn record_success_difficulty(&mut self, difficulty: f64) {
        self.state.record_success_difficulty(difficulty);
    }

    /// Controlled reduction of paradox density.
    ///
    /// When density exceeds `max_density` and consent is given, every second
    /// held paradox (in insertion order) is re-anchored; without consent only
    /// the densities are reported.
    pub fn collapse_paradoxes(&mut self, consent: bool, max_density: f64) -> ParadoxCollapse {
        let density_before = self.graph.mu_density();
        if density_before <= max_density {
            return ParadoxCollapse {
                activated: false,
                collapsed: Vec::new(),
                density_before,
                density_after: density_before,
                consent,
            };
        }

        let mut collapsed = Vec::new();
        if consent {
            let mu_ids: Vec<NodeId> = self
                .graph
                .nodes()
                .filter(|n| n.status == NodeStatus::Mu)
                .map(|n| n.id.clone())
                .collect();
            for (i, id) in mu_ids.iter().enumerate() {
                if i % 2 == 0 {
                    if let Some(node) = self.graph.get_node_mut(id) {
                        node.status = NodeStatus::Anchored;
                        collapsed.push(id.clone());
                    }
                }
            }
            for id in &collapsed {
                self.refresh_neighborhood(id);
            }
        }

        ParadoxCollapse {
            activated: true,
            collapsed,
            density_before,
            density_after: self.graph.mu_density(),
            consent,
        }
    }

    /// Serializable summary of this session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            name: self.name.clone(),
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            cycle: self.state.current_cycle,
            params: self.params.snapshot(),
            fail_count: self.state.fail_log.len(),
            claim_count: self.state.epistemic_claims.len(),
            created_at: self.created_at,
        }
    }

    /// Recompute ethics caches for a unit and everything adjacent to it
    fn refresh_neighborhood(&mut self, id: &NodeId) {
        ethics::refresh_node(&mut self.graph, id);
        for nb in self.graph.neighbors(id) {
            ethics::refresh_node(&mut self.graph, &nb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeKind;

    #[test]
    fn test_add_unit_computes_caches() {
        let mut session = Session::new("test");
        let id = session.add_unit(
            Node::with_id(NodeId::from("w"), "witness")
                .with_status(NodeStatus::Anchored)
                .with_tag(Tag::Witness),
        );
        let node = session.graph.get_node(&id).expect("exists");
        assert!((node.identity_alignment - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_link_rejects_dangling_endpoint() {
        let mut session = Session::new("test");
        session.add_unit(Node::with_id(NodeId::from("a"), "a"));
        let err = session.link(Edge::new("a", "ghost", EdgeKind::Supports));
        assert!(err.is_err());
        assert_eq!(session.graph.edge_count(), 0);
    }

    #[test]
    fn test_status_change_refreshes_neighbors() {
        let mut session = Session::new("test");
        session.add_unit(Node::with_id(NodeId::from("a"), "a").with_tag(Tag::Harm));
        session.add_unit(Node::with_id(NodeId::from("b"), "b"));
        session
            .link(Edge::new("a", "b", EdgeKind::Supports))
            .expect("endpoints exist");

        let harm_before = session
            .graph
            .get_node(&NodeId::from("a"))
            .expect("exists")
            .harm_probability;
        assert!((harm_before - 0.9).abs() < 1e-9);

        session
            .set_status(&NodeId::from("b"), NodeStatus::Blocking)
            .expect("exists");
        let harm_after = session
            .graph
            .get_node(&NodeId::from("a"))
            .expect("exists")
            .harm_probability;
        assert_eq!(harm_after, 1.0, "blocking-neighbor penalty applied");
    }

    #[test]
    fn test_remove_unit_refreshes_former_neighbors() {
        let mut session = Session::new("test");
        session.add_unit(Node::with_id(NodeId::from("a"), "a").with_tag(Tag::Harm));
        session.add_unit(
            Node::with_id(NodeId::from("b"), "b").with_status(NodeStatus::Blocking),
        );
        session
            .link(Edge::new("a", "b", EdgeKind::Supports))
            .expect("endpoints exist");
        assert_eq!(
            session
                .graph
                .get_node(&NodeId::from("a"))
                .expect("exists")
                .harm_probability,
            1.0
        );

        session.remove_unit(&NodeId::from("b"));
        let harm = session
            .graph
            .get_node(&NodeId::from("a"))
            .expect("exists")
            .harm_probability;
        assert!((harm - 0.9).abs() < 1e-9, "penalty lifted after removal");
    }

    #[test]
    fn test_collapse_paradoxes_requires_consent() {
        let mut session = Session::new("test");
        for i in 0..4 {
            session.add_unit(
                Node::with_id(NodeId::from_string(format!("n{i}")), "mu")
                    .with_status(NodeStatus::Mu),
            );
        }

        let refused = session.collapse_paradoxes(false, 0.3);
        assert!(refused.activated);
        assert!(refused.collapsed.is_empty());
        assert_eq!(refused.density_after, 1.0);

        let granted = session.collapse_paradoxes(true, 0.3);
        assert!(granted.activated);
        assert_eq!(granted.collapsed.len(), 2, "every second paradox re-anchored");
        assert!((granted.density_after - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_collapse_below_threshold_inactive() {
        let mut session = Session::new("test");
        session.add_unit(Node::with_id(NodeId::from("a"), "a"));
        let outcome = session.collapse_paradoxes(true, 0.3);
        assert!(!outcome.activated);
    }
}
