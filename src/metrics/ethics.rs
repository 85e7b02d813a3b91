//! Ethics metrics: harm ceilings, identity alignment, executability
//!
//! The toy heuristic layer of the engine. `harm_probability` and
//! `identity_alignment` are cached on nodes; `refresh_node` is the one
//! metric pass allowed to mutate the graph.

use super::{clamp, clamp01};
use crate::graph::{AvoidedMarker, Node, NodeId, NodeStatus, SemanticGraph, Tag};

/// Harm ceiling contributed by a tag
pub fn tag_harm_ceiling(tag: Tag) -> f64 {
    match tag {
        Tag::Harm => 0.9,
        Tag::Manipulation => 0.7,
        Tag::Deception => 0.6,
        Tag::Boundary => 0.5,
        Tag::Intent => 0.2,
        Tag::Emotion => 0.1,
        Tag::Witness => 0.0,
    }
}

/// Penalty added when the unit sits next to a Blocking neighbor
const BLOCKING_NEIGHBOR_PENALTY: f64 = 0.2;

/// Harm probability for a known unit: the maximum tag ceiling (0.0 for a
/// tag-free unit; distinct from the worst-case applied to unknown ids) plus
/// the blocking-neighbor penalty, clamped to [0, 1].
pub fn harm_probability(node: &Node, graph: &SemanticGraph) -> f64 {
    let base = node
        .tags
        .iter()
        .map(|t| tag_harm_ceiling(*t))
        .fold(0.0, f64::max);
    let penalty = if graph.has_neighbor_with_status(&node.id, NodeStatus::Blocking) {
        BLOCKING_NEIGHBOR_PENALTY
    } else {
        0.0
    };
    clamp01(base + penalty)
}

/// Identity alignment for a known unit: fixed positive and negative tag,
/// status, and avoidance weights, clamped to [-1, 1].
pub fn identity_alignment(node: &Node) -> f64 {
    let mut positive = 0.0;
    let mut negative = 0.0;

    if node.has_tag(Tag::Witness) {
        positive += 0.3;
    }
    if node.has_tag(Tag::Intent) && !node.has_tag(Tag::Manipulation) {
        positive += 0.2;
    }
    if node.status == NodeStatus::Anchored {
        positive += 0.3;
    }
    if node.has_tag(Tag::Boundary) && !node.has_tag(Tag::Harm) {
        positive += 0.2;
    }

    if node.has_tag(Tag::Manipulation) {
        negative += 0.5;
    }
    if node.has_tag(Tag::Deception) {
        negative += 0.6;
    }
    if node.status == NodeStatus::Blocking {
        negative += 0.4;
    }
    if node.avoided == AvoidedMarker::Avoided {
        negative += 0.3;
    }

    clamp(positive - negative, -1.0, 1.0)
}

/// Recompute and store the derived ethics caches on one unit.
///
/// A no-op when the id is unknown.
pub fn refresh_node(graph: &mut SemanticGraph, id: &NodeId) {
    let Some(node) = graph.get_node(id) else {
        return;
    };
    let harm = harm_probability(node, graph);
    let alignment = identity_alignment(node);
    if let Some(node) = graph.get_node_mut(id) {
        node.harm_probability = harm;
        node.identity_alignment = alignment;
    }
}

/// Ethics multiplier for a member set: mean alignment scaled by the harm
/// penalty, clamped to [0.1, 1.0]. Unknown member ids are worst-cased to
/// harm 1.0 / alignment -1.0. An empty member set scores 1.0.
pub fn ethical_coefficient(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.is_empty() {
        return 1.0;
    }

    let mut max_harm = f64::NEG_INFINITY;
    let mut alignment_sum = 0.0;
    for id in members {
        match graph.get_node(id) {
            Some(node) => {
                max_harm = max_harm.max(node.harm_probability);
                alignment_sum += node.identity_alignment;
            }
            None => {
                max_harm = max_harm.max(1.0);
                alignment_sum += -1.0;
            }
        }
    }

    let harm_penalty = 1.0 - max_harm;
    let mean_alignment = alignment_sum / members.len() as f64;
    clamp(mean_alignment * harm_penalty, 0.1, 1.0)
}

/// A vector is executable unless its ethics multiplier falls below the
/// threshold or any member is ethically blocked.
pub fn is_executable(
    graph: &SemanticGraph,
    members: &[NodeId],
    coefficient: f64,
    threshold_min: f64,
) -> bool {
    if coefficient < threshold_min {
        return false;
    }
    !members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .any(|n| n.status == NodeStatus::EthicallyBlocked)
}

/// Mean ethics multiplier across candidates; 1.0 for an empty candidate list
pub fn ethical_score_candidates(coefficients: &[f64]) -> f64 {
    if coefficients.is_empty() {
        return 1.0;
    }
    coefficients.iter().sum::<f64>() / coefficients.len() as f64
}

/// Exact count-ratio of non-executable candidates; 0.0 for an empty list
pub fn blocked_fraction(executables: &[bool]) -> f64 {
    if executables.is_empty() {
        return 0.0;
    }
    let blocked = executables.iter().filter(|e| !**e).count();
    blocked as f64 / executables.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeKind};

    #[test]
    fn test_harm_tag_free_is_zero() {
        let mut graph = SemanticGraph::new();
        let id = graph.add_node(Node::with_id(NodeId::from("a"), "plain"));
        let node = graph.get_node(&id).expect("exists");
        assert_eq!(harm_probability(node, &graph), 0.0);
    }

    #[test]
    fn test_harm_takes_max_ceiling() {
        let mut graph = SemanticGraph::new();
        let id = graph.add_node(
            Node::with_id(NodeId::from("a"), "risky")
                .with_tag(Tag::Emotion)
                .with_tag(Tag::Manipulation),
        );
        let node = graph.get_node(&id).expect("exists");
        assert!((harm_probability(node, &graph) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_harm_blocking_neighbor_penalty() {
        let mut graph = SemanticGraph::new();
        graph.add_node(Node::with_id(NodeId::from("a"), "near-blocker").with_tag(Tag::Harm));
        graph.add_node(
            Node::with_id(NodeId::from("b"), "blocker").with_status(NodeStatus::Blocking),
        );
        graph.add_edge(Edge::new("a", "b", EdgeKind::Contrasts));

        let node = graph.get_node(&NodeId::from("a")).expect("exists");
        // 0.9 + 0.2 clamps to 1.0
        assert_eq!(harm_probability(node, &graph), 1.0);
    }

    #[test]
    fn test_alignment_positive_profile() {
        let node = Node::with_id(NodeId::from("a"), "clean")
            .with_status(NodeStatus::Anchored)
            .with_tag(Tag::Witness)
            .with_tag(Tag::Intent);
        assert!((identity_alignment(&node) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_alignment_negative_profile() {
        let node = Node::with_id(NodeId::from("a"), "dark")
            .with_tag(Tag::Manipulation)
            .with_tag(Tag::Deception)
            .with_avoided(AvoidedMarker::Avoided);
        // -0.5 - 0.6 - 0.3 clamps to -1
        assert_eq!(identity_alignment(&node), -1.0);
    }

    #[test]
    fn test_intent_with_manipulation_gains_nothing() {
        let node = Node::with_id(NodeId::from("a"), "masked")
            .with_tag(Tag::Intent)
            .with_tag(Tag::Manipulation);
        assert!((identity_alignment(&node) + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ethical_coefficient_worst_cases_missing_members() {
        let graph = SemanticGraph::new();
        let members = vec![NodeId::from("ghost")];
        // mean alignment -1 × harm penalty 0 → clamped to floor
        assert!((ethical_coefficient(&graph, &members) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_ethical_coefficient_empty_members() {
        let graph = SemanticGraph::new();
        assert_eq!(ethical_coefficient(&graph, &[]), 1.0);
    }

    #[test]
    fn test_executable_blocked_by_status() {
        let mut graph = SemanticGraph::new();
        let id = graph.add_node(
            Node::with_id(NodeId::from("x"), "vetoed").with_status(NodeStatus::EthicallyBlocked),
        );
        assert!(!is_executable(&graph, &[id], 0.9, 0.4));
    }

    #[test]
    fn test_executable_threshold() {
        let graph = SemanticGraph::new();
        assert!(!is_executable(&graph, &[], 0.39, 0.4));
        assert!(is_executable(&graph, &[], 0.4, 0.4));
    }

    #[test]
    fn test_blocked_fraction_exact() {
        assert_eq!(blocked_fraction(&[true, false, false, true]), 0.5);
        assert_eq!(blocked_fraction(&[true, true]), 0.0);
        assert_eq!(blocked_fraction(&[]), 0.0);
    }

    #[test]
    fn test_refresh_node_writes_caches() {
        let mut graph = SemanticGraph::new();
        let id = graph.add_node(
            Node::with_id(NodeId::from("a"), "witness")
                .with_status(NodeStatus::Anchored)
                .with_tag(Tag::Witness),
        );
        refresh_node(&mut graph, &id);
        let node = graph.get_node(&id).expect("exists");
        assert_eq!(node.harm_probability, 0.0);
        assert!((node.identity_alignment - 0.6).abs() < 1e-9);
    }
}
