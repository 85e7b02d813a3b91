//! Flow: skill/challenge balance and presence over a member set

use super::clamp01;
use crate::graph::{NodeId, SemanticGraph, Tag};

/// Member count at which base complexity saturates
const N_MAX: f64 = 60.0;
/// Width of the challenge-balance bell
const SIGMA: f64 = 0.2;
/// Skill assumed before any success history exists
const DEFAULT_SKILL: f64 = 0.6;
/// How many recent successes feed the skill estimate
const SKILL_WINDOW: usize = 5;

/// Edge density over n·(n-1)/2; 0.0 when fewer than two members
pub fn edge_density(n_nodes: usize, n_edges: usize) -> f64 {
    let max_edges = (n_nodes.saturating_sub(1) * n_nodes) as f64 / 2.0;
    if max_edges < 1.0 {
        return 0.0;
    }
    clamp01(n_edges as f64 / max_edges)
}

/// Complexity floor plus size-driven growth
pub fn base_complexity(n_nodes: usize) -> f64 {
    clamp01(0.2 + 0.8 * (n_nodes as f64 / N_MAX))
}

/// Task difficulty: complexity plus a density surcharge
pub fn difficulty(n_nodes: usize, n_edges: usize) -> f64 {
    clamp01(base_complexity(n_nodes) + 0.2 * edge_density(n_nodes, n_edges))
}

/// Skill estimated from the tail of the success-difficulty history
pub fn current_skill(success_history: &[f64]) -> f64 {
    if success_history.is_empty() {
        return DEFAULT_SKILL;
    }
    let window = &success_history[success_history.len().saturating_sub(SKILL_WINDOW)..];
    window.iter().sum::<f64>() / window.len() as f64
}

/// Flow score over a member set:
/// `(skill_match × challenge_balance × presence_density)^(1/3)`
/// with each factor clamped non-negative. 0.0 for an empty set.
pub fn flow_metric(
    graph: &SemanticGraph,
    members: &[NodeId],
    n_edges: usize,
    success_history: &[f64],
) -> f64 {
    let n = members.len();
    if n == 0 {
        return 0.0;
    }

    let diff = difficulty(n, n_edges);
    let skill = current_skill(success_history);
    let skill_match = clamp01(1.0 - (diff - skill).abs());

    let optimal = skill + 0.1;
    let challenge_balance = (-(diff - optimal).powi(2) / (2.0 * SIGMA * SIGMA)).exp();

    let presence_count = members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .filter(|node| {
            node.has_tag(Tag::Witness) || node.has_tag(Tag::Emotion) || node.has_tag(Tag::Intent)
        })
        .count();
    let presence_density = presence_count as f64 / n.max(1) as f64;

    clamp01(
        (skill_match.max(0.0) * challenge_balance.max(0.0) * presence_density.max(0.0))
            .powf(1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, NodeStatus};

    #[test]
    fn test_edge_density_degenerate() {
        assert_eq!(edge_density(0, 0), 0.0);
        assert_eq!(edge_density(1, 0), 0.0);
    }

    #[test]
    fn test_difficulty_bounds() {
        for n in 0..100 {
            let d = difficulty(n, n * 2);
            assert!((0.0..=1.0).contains(&d));
        }
    }

    #[test]
    fn test_current_skill_default_and_window() {
        assert_eq!(current_skill(&[]), DEFAULT_SKILL);
        // Only the last five entries count
        let history = [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        assert!((current_skill(&history) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_flow_empty_members() {
        let graph = SemanticGraph::new();
        assert_eq!(flow_metric(&graph, &[], 0, &[]), 0.0);
    }

    #[test]
    fn test_flow_no_presence_is_zero() {
        let mut graph = SemanticGraph::new();
        let id = graph
            .add_node(Node::with_id(NodeId::from("a"), "plain").with_status(NodeStatus::Anchored));
        assert_eq!(flow_metric(&graph, &[id], 0, &[]), 0.0);
    }

    #[test]
    fn test_flow_with_presence_positive() {
        let mut graph = SemanticGraph::new();
        let id = graph.add_node(
            Node::with_id(NodeId::from("a"), "present")
                .with_status(NodeStatus::Anchored)
                .with_tag(Tag::Witness),
        );
        let flow = flow_metric(&graph, &[id], 0, &[]);
        assert!(flow > 0.0);
        assert!(flow <= 1.0);
    }
}
