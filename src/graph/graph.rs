//! The semantic graph: owned units plus typed edges

use super::edge::Edge;
use super::node::{Node, NodeId, NodeStatus};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Container for semantic units and their edges
///
/// Node ids keep insertion order (`node_ids`) so that default seed selection
/// and breadth-first starts are reproducible across runs. Edge order is the
/// insertion order, stable for reproducible output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemanticGraph {
    nodes: HashMap<NodeId, Node>,
    order: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl SemanticGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit, replacing any existing unit with the same id
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id.clone();
        if self.nodes.insert(id.clone(), node).is_none() {
            self.order.push(id.clone());
        }
        id
    }

    /// Remove a unit and prune its incident edges
    ///
    /// A no-op when the id is unknown.
    pub fn remove_node(&mut self, id: &NodeId) {
        if self.nodes.remove(id).is_none() {
            return;
        }
        self.order.retain(|n| n != id);
        self.edges.retain(|e| !e.touches(id));
    }

    /// Add an edge; both endpoints are expected to exist
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Get a unit by id
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a unit
    pub fn get_node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether a unit with the given id exists
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Unit ids in insertion order
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Units in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids adjacent to `id` under the undirected view, in first-seen edge order
    pub fn neighbors(&self, id: &NodeId) -> Vec<NodeId> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        let mut out = Vec::new();
        for edge in &self.edges {
            let other = if &edge.from == id {
                &edge.to
            } else if &edge.to == id {
                &edge.from
            } else {
                continue;
            };
            if seen.insert(other) {
                out.push(other.clone());
            }
        }
        out
    }

    /// True when `id` has at least one neighbor with the given status
    pub fn has_neighbor_with_status(&self, id: &NodeId, status: NodeStatus) -> bool {
        self.neighbors(id)
            .iter()
            .filter_map(|nid| self.nodes.get(nid))
            .any(|n| n.status == status)
    }

    /// Induced subgraph over an id set: units filtered, edges kept only when
    /// both endpoints survive. Insertion order is inherited from the parent.
    pub fn subgraph(&self, ids: &[NodeId]) -> SemanticGraph {
        let keep: HashSet<&NodeId> = ids.iter().collect();
        let mut sub = SemanticGraph::new();
        for id in &self.order {
            if keep.contains(id) {
                if let Some(node) = self.nodes.get(id) {
                    sub.add_node(node.clone());
                }
            }
        }
        for edge in &self.edges {
            if keep.contains(&edge.from) && keep.contains(&edge.to) {
                sub.add_edge(edge.clone());
            }
        }
        sub
    }

    /// Edges whose both endpoints lie in the given id set
    pub fn edges_within(&self, ids: &HashSet<&NodeId>) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| ids.contains(&e.from) && ids.contains(&e.to))
            .collect()
    }

    /// Endpoint pairs of all edges, for set comparison between graphs
    pub fn edge_pairs(&self) -> HashSet<(NodeId, NodeId)> {
        self.edges
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect()
    }

    /// Number of units
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph holds no units
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fraction of units currently held as paradox (Mu), 0 for an empty graph
    pub fn mu_density(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let mu = self
            .nodes
            .values()
            .filter(|n| n.status == NodeStatus::Mu)
            .count();
        mu as f64 / self.nodes.len() as f64
    }
}
