//! The aggregated result of one workflow invocation

use crate::graph::{AttentionVector, NodeId, VectorId};
use crate::recovery::{FailCode, Recovery};
use crate::session::{EpistemicClaim, ParameterSnapshot};
use serde::{Deserialize, Serialize};

/// Authoritative pass/fail status of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

/// The named metric values of a cycle
///
/// Serialized field names are a stable contract read by the report renderer;
/// ranges are documented per metric in [`crate::metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    #[serde(rename = "TI")]
    pub ti: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "AR")]
    pub ar: f64,
    #[serde(rename = "FZD")]
    pub fzd: f64,
    #[serde(rename = "RI")]
    pub ri: f64,
    #[serde(rename = "SQ_proxy")]
    pub sq_proxy: f64,
    #[serde(rename = "Phi_proxy")]
    pub phi_proxy: f64,
    #[serde(rename = "GBI_proxy")]
    pub gbi_proxy: f64,
    #[serde(rename = "GNS_proxy")]
    pub gns_proxy: f64,
    #[serde(rename = "FLOW")]
    pub flow: f64,
    #[serde(rename = "TSC_score")]
    pub tsc_score: f64,
    #[serde(rename = "SCAV_health")]
    pub scav_health: f64,
    #[serde(rename = "Stereoscopic_alignment")]
    pub stereoscopic_alignment: f64,
    #[serde(rename = "Stereoscopic_gap_max")]
    pub stereoscopic_gap_max: f64,
    #[serde(rename = "Ethical_score_candidates")]
    pub ethical_score_candidates: f64,
    #[serde(rename = "Mu_density")]
    pub mu_density: f64,
    #[serde(rename = "Blocked_fraction")]
    pub blocked_fraction: f64,
}

/// Why the winner was chosen, and what the choice rested on
///
/// `mean_alignment` is present only when the selection phase actually
/// computed it; failure paths that never reached the stereoscopic fusion
/// omit it rather than defaulting to a fabricated value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleTrace {
    pub observations: Vec<String>,
    pub inferences: Vec<String>,
    pub assumptions: Vec<String>,
    pub vector_choice_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_alignment: Option<f64>,
}

/// The twelve workflow phases, used as phase-log labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Preconditions,
    Decode,
    CoherenceInit,
    Selection,
    Draft,
    HallucinationGuard,
    FlowCheck,
    ShadowAudit,
    FinalGate,
    OutputReadiness,
    Trace,
    RecoveryLookup,
    Learning,
}

/// One phase-log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseEntry {
    pub phase: Phase,
    pub summary: String,
}

/// Advisory produced when the winner's flow falls below target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowAdvisory {
    /// The winner's flow score
    pub flow: f64,
    /// Best-flow executable alternative, if any scored higher than zero
    pub best_alternative: Option<VectorId>,
    pub best_alternative_flow: f64,
    /// overload / boredom / low_presence
    pub diagnostic: String,
}

/// Result of the shadow audit, when it activated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadowOutcome {
    pub shadow_magnitude: f64,
    pub shadow_nodes: Vec<NodeId>,
    pub consent: bool,
    /// (aligned, shadow) pairs bridged under consent
    pub bridges_added: Vec<(NodeId, NodeId)>,
    pub boundary_respected: bool,
}

/// Informational output of the hallucination guard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallucinationReport {
    /// Unresolved assumptions per winner member
    pub risk: f64,
    pub flagged: bool,
    pub assumptions: Vec<String>,
    pub hypothesis_nodes: Vec<NodeId>,
}

/// Everything one invocation returns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleOutcome {
    pub gate_status: GateStatus,
    pub fail_code: Option<FailCode>,
    /// The winning vector; `None` on failure
    pub chosen_vector: Option<AttentionVector>,
    pub candidate_count: usize,
    pub active_count: usize,
    pub blocked_fraction: f64,
    pub metrics: MetricSnapshot,
    pub epistemic_claims: Vec<EpistemicClaim>,
    pub trace: CycleTrace,
    pub phase_log: Vec<PhaseEntry>,
    pub params: ParameterSnapshot,
    /// Units newly held as paradox this cycle
    pub mu_nodes: Vec<NodeId>,
    pub flow_advisory: Option<FlowAdvisory>,
    pub shadow: Option<ShadowOutcome>,
    pub hallucination: Option<HallucinationReport>,
    pub recovery: Option<Recovery>,
    /// Gate warnings that did not fail the cycle
    pub warnings: Vec<String>,
    pub output_ready: bool,
}

impl CycleOutcome {
    /// A pending outcome carrying only the parameter snapshot
    pub(crate) fn pending(params: ParameterSnapshot) -> Self {
        Self {
            gate_status: GateStatus::Fail,
            fail_code: None,
            chosen_vector: None,
            candidate_count: 0,
            active_count: 0,
            blocked_fraction: 0.0,
            metrics: MetricSnapshot::default(),
            epistemic_claims: Vec::new(),
            trace: CycleTrace::default(),
            phase_log: Vec::new(),
            params,
            mu_nodes: Vec::new(),
            flow_advisory: None,
            shadow: None,
            hallucination: None,
            recovery: None,
            warnings: Vec::new(),
            output_ready: false,
        }
    }

    /// Append a phase-log entry
    pub(crate) fn log_phase(&mut self, phase: Phase, summary: impl Into<String>) {
        self.phase_log.push(PhaseEntry {
            phase,
            summary: summary.into(),
        });
    }

    /// Whether the cycle passed its final gate
    pub fn passed(&self) -> bool {
        self.gate_status == GateStatus::Pass
    }
}
