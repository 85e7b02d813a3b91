//! Five-dimensional attention summary: direction, magnitude, consistency,
//! resonance, shadow

use super::clamp01;
use crate::graph::{AvoidedMarker, Node, NodeId, SemanticGraph};
use crate::space::{negate, norm, DIM, EPS};
use std::collections::HashMap;

/// Normalize per-node capital shares into attention weights.
///
/// Falls back to uniform weights when the total share is (near-)zero.
pub fn compute_weights(tsc_values: &HashMap<NodeId, f64>) -> HashMap<NodeId, f64> {
    let total: f64 = tsc_values.values().sum();
    if total < EPS {
        let n = tsc_values.len().max(1);
        return tsc_values
            .keys()
            .map(|k| (k.clone(), 1.0 / n as f64))
            .collect();
    }
    tsc_values
        .iter()
        .map(|(k, v)| (k.clone(), v / total))
        .collect()
}

/// Weighted sum of member attribute vectors
pub fn raw_direction(
    graph: &SemanticGraph,
    members: &[NodeId],
    weights: &HashMap<NodeId, f64>,
) -> Vec<f64> {
    let mut result = vec![0.0; DIM];
    for id in members {
        let Some(node) = graph.get_node(id) else {
            continue;
        };
        let w = weights.get(id).copied().unwrap_or(0.0);
        for (slot, axis) in result.iter_mut().zip(node.axes.as_array()) {
            *slot += w * axis;
        }
    }
    result
}

/// A unit contributes to the shadow when its alignment is negative or it
/// carries an active avoidance marker.
pub fn is_shadow_contributor(node: &Node) -> bool {
    node.identity_alignment < 0.0 || node.avoided == AvoidedMarker::Avoided
}

/// Weighted sum of negated attribute vectors over shadow contributors only
pub fn raw_shadow(
    graph: &SemanticGraph,
    members: &[NodeId],
    weights: &HashMap<NodeId, f64>,
) -> Vec<f64> {
    let mut result = vec![0.0; DIM];
    for id in members {
        let Some(node) = graph.get_node(id) else {
            continue;
        };
        if !is_shadow_contributor(node) {
            continue;
        }
        let w = weights.get(id).copied().unwrap_or(0.0);
        let negated = negate(&node.axes.as_array());
        for (slot, axis) in result.iter_mut().zip(negated) {
            *slot += w * axis;
        }
    }
    result
}

/// Attention magnitude: broadcast proxy scaled by the strongest per-node
/// capital share. 0.0 when there are no shares.
pub fn scav_magnitude(gbi: f64, tsc_values: &HashMap<NodeId, f64>) -> f64 {
    let max = tsc_values.values().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return 0.0;
    }
    gbi * max
}

/// Lag-1 autocorrelation of direction-norm history, scaled by a focus ratio.
///
/// Degenerates to the clamped focus ratio when fewer than two samples exist
/// or the variance is (near-)zero.
pub fn consistency_metric(direction_norms: &[f64], focus: f64) -> f64 {
    if direction_norms.len() < 2 {
        return clamp01(focus);
    }
    let mean = direction_norms.iter().sum::<f64>() / direction_norms.len() as f64;
    let variance: f64 = direction_norms.iter().map(|x| (x - mean).powi(2)).sum();
    if variance < EPS {
        return clamp01(focus);
    }
    let covariance: f64 = direction_norms
        .windows(2)
        .map(|w| (w[0] - mean) * (w[1] - mean))
        .sum();
    let ar_coefficient = clamp01(covariance / variance);
    clamp01(ar_coefficient * focus)
}

/// Field resonance: field strength times the bidirectional attention ratio
pub fn resonance_metric(field_strength: f64, bidirectional_ratio: f64) -> f64 {
    clamp01(field_strength * bidirectional_ratio)
}

/// Shannon entropy of the normalized weights over log(n), in [0, 1].
/// 0.0 when one or zero weights.
pub fn attention_entropy(weights: &HashMap<NodeId, f64>) -> f64 {
    let n = weights.len();
    if n <= 1 {
        return 0.0;
    }
    let total: f64 = weights.values().sum();
    if total < EPS {
        return 0.0;
    }
    let entropy: f64 = weights
        .values()
        .filter_map(|w| {
            let p = w / total;
            (p > 0.0).then(|| -p * p.ln())
        })
        .sum();
    clamp01(entropy / (n as f64).ln())
}

/// Share of the shadow in the combined attention amplitude
pub fn shadow_magnitude(raw_dir: &[f64], raw_shadow: &[f64]) -> f64 {
    let nd = norm(raw_dir);
    let ns = norm(raw_shadow);
    ns / (nd + ns + EPS)
}

/// Composite attention health: the geometric mean of the four factors, each
/// floored at zero before the product.
pub fn scav_health(consistency: f64, resonance: f64, entropy: f64, shadow_mag: f64) -> f64 {
    let product = consistency.max(0.0)
        * resonance.max(0.0)
        * (1.0 - entropy).max(0.0)
        * (1.0 - shadow_mag).max(0.0);
    product.powf(0.25)
}
