//! Engine: the multi-session entry point
//!
//! Owns every session behind a concurrent map. One cycle holds its session
//! entry for the full invocation, which serializes invocations per session;
//! independent sessions may run from different threads.

use crate::config::EngineConfig;
use crate::graph::{Edge, Node, NodeId, NodeStatus, Tag};
use crate::session::{EpistemicClaim, ParadoxCollapse, Session, SessionId, SessionSnapshot};
use crate::workflow::{self, CycleInput, CycleOutcome};
use dashmap::DashMap;
use thiserror::Error;

/// Errors raised by host-facing engine operations
///
/// Distinct from cycle fail codes: these mark API misuse, not a failed
/// evaluation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// The main engine: sessions keyed by id, one shared configuration
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    sessions: DashMap<SessionId, Session>,
}

impl Engine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // --- session lifecycle ---

    /// Create an empty session and return its id
    pub fn create_session(&self, name: impl Into<String>) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id.clone(), Session::new(name));
        id
    }

    /// Insert a prepared session under a specific id, replacing any existing
    pub fn insert_session(&self, id: SessionId, session: Session) -> SessionId {
        self.sessions.insert(id.clone(), session);
        id
    }

    /// Remove a session
    pub fn remove_session(&self, id: &SessionId) -> Option<Session> {
        self.sessions.remove(id).map(|(_, session)| session)
    }

    /// All session ids
    pub fn list_sessions(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether a session exists
    pub fn has_session(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Serializable summary of a session
    pub fn snapshot(&self, id: &SessionId) -> EngineResult<SessionSnapshot> {
        self.with_session(id, |s| s.snapshot())
    }

    // --- graph maintenance ---

    /// Add a unit to a session's graph; ethics caches are computed
    pub fn add_unit(&self, id: &SessionId, node: Node) -> EngineResult<NodeId> {
        self.with_session_mut(id, |s| s.add_unit(node))
    }

    /// Add an edge; both endpoints must exist
    pub fn link(&self, id: &SessionId, edge: Edge) -> EngineResult<()> {
        self.with_session_mut(id, |s| s.link(edge))?
    }

    /// Remove a unit; a no-op for unknown unit ids
    pub fn remove_unit(&self, id: &SessionId, node_id: &NodeId) -> EngineResult<()> {
        self.with_session_mut(id, |s| s.remove_unit(node_id))
    }

    /// Change a unit's status
    pub fn set_status(
        &self,
        id: &SessionId,
        node_id: &NodeId,
        status: NodeStatus,
    ) -> EngineResult<()> {
        self.with_session_mut(id, |s| s.set_status(node_id, status))?
    }

    /// Add a tag to a unit
    pub fn tag_unit(&self, id: &SessionId, node_id: &NodeId, tag: Tag) -> EngineResult<()> {
        self.with_session_mut(id, |s| s.tag_unit(node_id, tag))?
    }

    // --- session inputs ---

    /// Register an epistemic claim
    pub fn register_claim(&self, id: &SessionId, claim: EpistemicClaim) -> EngineResult<()> {
        self.with_session_mut(id, |s| s.register_claim(claim))
    }

    /// Feed one success difficulty into the session's skill estimate
    pub fn record_success_difficulty(&self, id: &SessionId, difficulty: f64) -> EngineResult<()> {
        self.with_session_mut(id, |s| s.record_success_difficulty(difficulty))
    }

    // --- evaluation ---

    /// Run one full twelve-phase cycle against a session
    pub fn run_cycle(&self, id: &SessionId, input: &CycleInput) -> EngineResult<CycleOutcome> {
        self.with_session_mut(id, |s| {
            workflow::execute(&mut s.graph, &mut s.state, &mut s.params, &self.config, input)
        })
    }

    /// Explicit paradox collapse against the gate's density threshold
    pub fn collapse_paradoxes(
        &self,
        id: &SessionId,
        consent: bool,
    ) -> EngineResult<ParadoxCollapse> {
        let max_density = self.config.gate.mu_density_max;
        self.with_session_mut(id, |s| s.collapse_paradoxes(consent, max_density))
    }

    fn with_session<T>(&self, id: &SessionId, f: impl FnOnce(&Session) -> T) -> EngineResult<T> {
        let entry = self
            .sessions
            .get(id)
            .ok_or_else(|| EngineError::SessionNotFound(id.to_string()))?;
        Ok(f(entry.value()))
    }

    fn with_session_mut<T>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut Session) -> T,
    ) -> EngineResult<T> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| EngineError::SessionNotFound(id.to_string()))?;
        Ok(f(entry.value_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeKind;

    #[test]
    fn test_create_engine() {
        let engine = Engine::new();
        assert_eq!(engine.session_count(), 0);
    }

    #[test]
    fn test_session_lifecycle() {
        let engine = Engine::new();
        let id = engine.create_session("review");
        assert_eq!(engine.session_count(), 1);
        assert!(engine.has_session(&id));

        let removed = engine.remove_session(&id);
        assert!(removed.is_some());
        assert_eq!(engine.session_count(), 0);
    }

    #[test]
    fn test_unknown_session_errors() {
        let engine = Engine::new();
        let ghost = SessionId::from("ghost");
        let err = engine.add_unit(&ghost, Node::new("unit"));
        assert!(matches!(err, Err(EngineError::SessionNotFound(_))));
    }

    #[test]
    fn test_link_propagates_node_not_found() {
        let engine = Engine::new();
        let id = engine.create_session("test");
        engine
            .add_unit(&id, Node::with_id(NodeId::from("a"), "a"))
            .expect("session exists");
        let err = engine.link(&id, Edge::new("a", "ghost", EdgeKind::Supports));
        assert!(matches!(err, Err(EngineError::NodeNotFound(_))));
    }

    #[test]
    fn test_snapshot_counts() {
        let engine = Engine::new();
        let id = engine.create_session("test");
        engine
            .add_unit(&id, Node::with_id(NodeId::from("a"), "a"))
            .expect("session exists");
        engine
            .add_unit(&id, Node::with_id(NodeId::from("b"), "b"))
            .expect("session exists");
        engine
            .link(&id, Edge::new("a", "b", EdgeKind::Supports))
            .expect("endpoints exist");

        let snapshot = engine.snapshot(&id).expect("session exists");
        assert_eq!(snapshot.node_count, 2);
        assert_eq!(snapshot.edge_count, 1);
        assert_eq!(snapshot.cycle, 0);
    }
}
