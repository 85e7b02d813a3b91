//! Candidate generation: bounded breadth-first expansion from seed units

use crate::graph::{AttentionVector, NodeId, SemanticGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for candidate generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How many candidates to produce
    pub candidate_count: usize,
    /// Bounds both the default seed count and the expansion depth
    pub branching: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            candidate_count: 5,
            branching: 3,
        }
    }
}

/// Produces the candidate set for one cycle.
///
/// Given identical graph state, seed list, and configuration the produced
/// memberships are identical: seeds are taken by index modulo the seed list,
/// expansion follows the graph's deterministic neighbor order, and members
/// are recorded in breadth-first discovery order.
#[derive(Debug, Clone, Default)]
pub struct CandidateGenerator {
    config: GeneratorConfig,
}

impl CandidateGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the candidate set.
    ///
    /// An empty graph yields an empty set; otherwise at least one candidate
    /// is produced. Default seeds are the first `branching` unit ids in
    /// insertion order.
    pub fn generate(
        &self,
        graph: &SemanticGraph,
        seed_ids: Option<&[NodeId]>,
    ) -> Vec<AttentionVector> {
        let all_ids = graph.node_ids();
        if all_ids.is_empty() {
            return Vec::new();
        }

        let default_seeds: Vec<NodeId>;
        let seeds: &[NodeId] = match seed_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => {
                let k = self.config.branching.min(all_ids.len()).max(1);
                default_seeds = all_ids[..k].to_vec();
                &default_seeds
            }
        };

        let count = self.config.candidate_count.min(all_ids.len().max(1));
        let mut candidates = Vec::with_capacity(count);
        for i in 0..count {
            let seed = seeds[i % seeds.len()].clone();
            candidates.push(self.expand(graph, seed));
        }
        candidates
    }

    /// Breadth-first frontier growth from one seed, up to the branching
    /// depth or whole-graph coverage
    fn expand(&self, graph: &SemanticGraph, seed: NodeId) -> AttentionVector {
        let total = graph.node_count();
        let mut members = vec![seed.clone()];
        let mut expanded: HashSet<NodeId> = members.iter().cloned().collect();
        let mut frontier = vec![seed.clone()];
        let mut depth = 0;

        while !frontier.is_empty() && depth < self.config.branching && expanded.len() < total {
            let mut next_frontier = Vec::new();
            for id in &frontier {
                for nb in graph.neighbors(id) {
                    if expanded.insert(nb.clone()) {
                        members.push(nb.clone());
                        next_frontier.push(nb);
                    }
                }
            }
            frontier = next_frontier;
            depth += 1;
        }

        let member_refs: HashSet<&NodeId> = expanded.iter().collect();
        let edges = graph
            .edges_within(&member_refs)
            .into_iter()
            .cloned()
            .collect();

        AttentionVector::new(vec![seed], members, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeKind, Node};

    fn chain(n: usize) -> SemanticGraph {
        let mut g = SemanticGraph::new();
        for i in 0..n {
            g.add_node(Node::with_id(NodeId::from_string(format!("n{i}")), format!("u{i}")));
        }
        for i in 0..n.saturating_sub(1) {
            g.add_edge(Edge::new(
                format!("n{i}"),
                format!("n{}", i + 1),
                EdgeKind::Supports,
            ));
        }
        g
    }

    #[test]
    fn test_empty_graph_yields_no_candidates() {
        let generator = CandidateGenerator::default();
        assert!(generator.generate(&SemanticGraph::new(), None).is_empty());
    }

    #[test]
    fn test_single_node_graph_yields_one_candidate() {
        let generator = CandidateGenerator::default();
        let candidates = generator.generate(&chain(1), None);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].members.len(), 1);
    }

    #[test]
    fn test_candidate_count_respects_config() {
        let generator = CandidateGenerator::new(GeneratorConfig {
            candidate_count: 3,
            branching: 2,
        });
        let candidates = generator.generate(&chain(10), None);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_seeds_cycle_modulo() {
        let generator = CandidateGenerator::new(GeneratorConfig {
            candidate_count: 4,
            branching: 1,
        });
        let seeds = vec![NodeId::from("n0"), NodeId::from("n5")];
        let candidates = generator.generate(&chain(10), Some(&seeds));
        assert_eq!(candidates[0].seed_nodes[0], NodeId::from("n0"));
        assert_eq!(candidates[1].seed_nodes[0], NodeId::from("n5"));
        assert_eq!(candidates[2].seed_nodes[0], NodeId::from("n0"));
    }

    #[test]
    fn test_expansion_depth_bounded() {
        let generator = CandidateGenerator::new(GeneratorConfig {
            candidate_count: 1,
            branching: 2,
        });
        let seeds = vec![NodeId::from("n0")];
        let candidates = generator.generate(&chain(10), Some(&seeds));
        // depth 2 along a chain reaches n0, n1, n2
        assert_eq!(candidates[0].members.len(), 3);
    }

    #[test]
    fn test_member_edges_are_induced() {
        let generator = CandidateGenerator::new(GeneratorConfig {
            candidate_count: 1,
            branching: 2,
        });
        let seeds = vec![NodeId::from("n0")];
        let candidates = generator.generate(&chain(10), Some(&seeds));
        assert_eq!(candidates[0].edges.len(), 2);
    }

    #[test]
    fn test_deterministic_membership() {
        let generator = CandidateGenerator::default();
        let graph = chain(8);
        let a = generator.generate(&graph, None);
        let b = generator.generate(&graph, None);
        let members_a: Vec<_> = a.iter().map(|v| v.members.clone()).collect();
        let members_b: Vec<_> = b.iter().map(|v| v.members.clone()).collect();
        assert_eq!(members_a, members_b);
    }
}
