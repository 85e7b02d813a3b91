//! Temporal metrics: structural distance between graph states and the
//! recursive future-projection term

use super::clamp01;
use crate::graph::SemanticGraph;
use std::collections::HashSet;

/// Normalized structural distance between two graph states:
/// `1 - 0.5·(jaccard(nodes) + jaccard(edges))`.
/// Edge similarity counts as 1.0 when both edge sets are empty.
pub fn ged_proxy_norm(current: &SemanticGraph, future: &SemanticGraph) -> f64 {
    let v_curr: HashSet<_> = current.node_ids().iter().cloned().collect();
    let v_fut: HashSet<_> = future.node_ids().iter().cloned().collect();
    let e_curr = current.edge_pairs();
    let e_fut = future.edge_pairs();

    let v_union = v_curr.union(&v_fut).count().max(1);
    let node_sim = v_curr.intersection(&v_fut).count() as f64 / v_union as f64;

    let e_union = e_curr.union(&e_fut).count();
    let edge_sim = if e_union == 0 {
        1.0
    } else {
        e_curr.intersection(&e_fut).count() as f64 / e_union as f64
    };

    clamp01(1.0 - 0.5 * (node_sim + edge_sim))
}

/// Expected influence of projected outcomes on the present:
/// `clamp(Σ pₖ × ged_normₖ)`. 0.0 with no outcomes.
pub fn expected_influence(outcome_probs: &[f64], ged_norms: &[f64]) -> f64 {
    if outcome_probs.is_empty() {
        return 0.0;
    }
    let total: f64 = outcome_probs
        .iter()
        .zip(ged_norms.iter())
        .map(|(p, g)| p * g)
        .sum();
    clamp01(total)
}

/// Recursive future projection:
/// `novelty × generativity × temporal_horizon + β_retro × expected_influence`
pub fn fp_recursive(
    novelty: f64,
    generativity: f64,
    temporal_horizon: f64,
    beta_retro: f64,
    influence: f64,
) -> f64 {
    novelty * generativity * temporal_horizon + beta_retro * influence
}
