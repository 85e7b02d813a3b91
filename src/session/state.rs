//! Per-session mutable state: bounded histories and audit trails

use crate::graph::{NodeId, VectorId};
use crate::recovery::FailCode;
use crate::session::epistemic::EpistemicClaim;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A FIFO rolling window with a fixed capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Window<T> {
    /// Create an empty window with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, evicting the oldest entry when full
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(value);
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the window holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> Window<T> {
    /// The retained entries oldest-first as a vector
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

/// Comparison used by the sustained-condition predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Lt,
    Gt,
    Le,
    Ge,
}

impl Window<f64> {
    /// True when the last `k` entries all satisfy `cmp` against `threshold`;
    /// false whenever fewer than `k` entries exist.
    pub fn sustained(&self, cmp: Cmp, threshold: f64, k: usize) -> bool {
        if self.items.len() < k {
            return false;
        }
        self.items.iter().rev().take(k).all(|v| match cmp {
            Cmp::Lt => *v < threshold,
            Cmp::Gt => *v > threshold,
            Cmp::Le => *v <= threshold,
            Cmp::Ge => *v >= threshold,
        })
    }
}

/// One entry of the failure audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailRecord {
    pub code: FailCode,
    pub cycle: u64,
    pub action: String,
    pub outcome: String,
    pub at: DateTime<Utc>,
}

/// Which adaptive parameter an audit entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Alpha,
    Gamma,
    Lambda,
    BetaRetro,
}

/// One entry of the adaptive-parameter audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterUpdate {
    pub parameter: ParameterKind,
    pub value: f64,
    pub cycle: u64,
}

/// Persistent per-session state
///
/// Mutated only by the invoking workflow at its defined commit points; the
/// rolling windows evict FIFO by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Mean stereoscopic alignment per attempted cycle
    pub alignment_history: Window<f64>,
    /// Maximum stereoscopic gap per attempted cycle
    pub gap_max_history: Window<f64>,
    /// Paradox (Mu) density per cycle
    pub mu_density_history: Window<f64>,
    /// Flow score per cycle
    pub flow_history: Window<f64>,
    /// Difficulty of past successful cycles, fed by the host
    pub success_difficulties: Window<f64>,
    /// Recently chosen vector ids
    pub chosen_vectors: Window<VectorId>,
    /// Shadow contributor ids per recent cycle
    pub shadow_nodes_history: Window<Vec<NodeId>>,
    /// Registered epistemic claims (unbounded)
    pub epistemic_claims: Vec<EpistemicClaim>,
    /// Adaptive-parameter update audit trail (unbounded)
    pub parameter_audit: Vec<ParameterUpdate>,
    /// Failure audit trail (unbounded)
    pub fail_log: Vec<FailRecord>,
    /// Monotonically increasing completed-cycle counter
    pub current_cycle: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            alignment_history: Window::new(10),
            gap_max_history: Window::new(10),
            mu_density_history: Window::new(10),
            flow_history: Window::new(10),
            success_difficulties: Window::new(10),
            chosen_vectors: Window::new(20),
            shadow_nodes_history: Window::new(5),
            epistemic_claims: Vec::new(),
            parameter_audit: Vec::new(),
            fail_log: Vec::new(),
            current_cycle: 0,
        }
    }
}

impl SessionState {
    /// Create fresh session state
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one completed cycle's data into the rolling histories and bump
    /// the cycle counter.
    pub fn record_cycle(
        &mut self,
        alignment: f64,
        gap_max: f64,
        mu_density: f64,
        flow: f64,
        chosen_vector: Option<VectorId>,
        shadow_nodes: Vec<NodeId>,
    ) {
        self.alignment_history.push(alignment);
        self.gap_max_history.push(gap_max);
        self.mu_density_history.push(mu_density);
        self.flow_history.push(flow);
        self.shadow_nodes_history.push(shadow_nodes);
        if let Some(id) = chosen_vector {
            self.chosen_vectors.push(id);
        }
        self.current_cycle += 1;
    }

    /// Append a failure audit entry stamped with the current cycle
    pub fn record_fail(&mut self, code: FailCode, action: &str, outcome: &str) {
        self.fail_log.push(FailRecord {
            code,
            cycle: self.current_cycle,
            action: action.to_string(),
            outcome: outcome.to_string(),
            at: Utc::now(),
        });
    }

    /// Append a success difficulty for the skill estimate
    pub fn record_success_difficulty(&mut self, difficulty: f64) {
        self.success_difficulties.push(difficulty);
    }

    /// Register an epistemic claim
    pub fn register_claim(&mut self, claim: EpistemicClaim) {
        self.epistemic_claims.push(claim);
    }
}
