//! Structural metrics: integrity, coherence, anchoring, connectivity proxies

use super::clamp01;
use crate::graph::{NodeId, NodeStatus, SemanticGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Fraction of members whose status is stable (neither Floating nor
/// Hypothesis). 0.0 for an empty member set.
pub fn temporal_integrity(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let stable = members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .filter(|n| !matches!(n.status, NodeStatus::Floating | NodeStatus::Hypothesis))
        .count();
    stable as f64 / members.len() as f64
}

/// Edge density of the sub-graph: edges present over n·(n-1)/2.
/// Defined as 1.0 when fewer than two members.
pub fn coherence_index(members: &[NodeId], edges_within: usize) -> f64 {
    let n = members.len();
    if n < 2 {
        return 1.0;
    }
    let max_edges = (n * (n - 1)) as f64 / 2.0;
    clamp01(edges_within as f64 / max_edges)
}

/// Fraction of members with status Anchored. 0.0 for an empty set.
pub fn anchoring_ratio(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let anchored = members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .filter(|n| n.status == NodeStatus::Anchored)
        .count();
    anchored as f64 / members.len() as f64
}

/// Fraction of members with status Blocking or EthicallyBlocked.
/// 0.0 for an empty set.
pub fn freeze_decomposition(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let frozen = members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .filter(|n| matches!(n.status, NodeStatus::Blocking | NodeStatus::EthicallyBlocked))
        .count();
    frozen as f64 / members.len() as f64
}

/// Mean of the resonance axis across members, clamped to [0, 1].
/// 0.0 for an empty set.
pub fn resonance_index(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: f64 = members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .map(|n| n.axes.resonance)
        .sum();
    clamp01(total / members.len() as f64)
}

/// Semantic quality proxy: coherence × resonance × anchoring
pub fn sq_proxy(ci: f64, ri: f64, ar: f64) -> f64 {
    clamp01(ci * ri * ar)
}

/// Integration proxy: size of the connected component reached by
/// breadth-first traversal from the first member, over n. 1.0 when n < 2.
pub fn phi_proxy(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.len() < 2 {
        return 1.0;
    }
    let ids: HashSet<&NodeId> = members.iter().collect();
    let mut adjacency: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
    for edge in graph.edges() {
        if ids.contains(&edge.from) && ids.contains(&edge.to) {
            adjacency.entry(&edge.from).or_default().push(&edge.to);
            adjacency.entry(&edge.to).or_default().push(&edge.from);
        }
    }

    let mut visited: HashSet<&NodeId> = HashSet::new();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    queue.push_back(&members[0]);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(neighbors) = adjacency.get(current) {
            for &nb in neighbors {
                if !visited.contains(nb) {
                    queue.push_back(nb);
                }
            }
        }
    }
    visited.len() as f64 / members.len() as f64
}

/// Broadcast proxy: mean degree within the induced sub-graph, normalized by
/// n - 1. 1.0 when n < 2.
pub fn gbi_proxy(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    let n = members.len();
    if n < 2 {
        return 1.0;
    }
    let ids: HashSet<&NodeId> = members.iter().collect();
    let mut degree: HashMap<&NodeId, usize> = HashMap::new();
    for edge in graph.edges() {
        if ids.contains(&edge.from) && ids.contains(&edge.to) {
            *degree.entry(&edge.from).or_insert(0) += 1;
            *degree.entry(&edge.to).or_insert(0) += 1;
        }
    }
    let total: usize = degree.values().sum();
    clamp01(total as f64 / (n * (n - 1)) as f64)
}

/// Generative novelty proxy: mean of the novelty axis. 0.0 for an empty set.
pub fn gns_proxy(graph: &SemanticGraph, members: &[NodeId]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: f64 = members
        .iter()
        .filter_map(|id| graph.get_node(id))
        .map(|n| n.axes.novelty)
        .sum();
    clamp01(total / members.len() as f64)
}
