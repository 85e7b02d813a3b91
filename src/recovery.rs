//! Fail codes and the static recovery catalog

use serde::{Deserialize, Serialize};

/// Fatal and gate-level failure codes a cycle can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailCode {
    /// Phase-1 precondition rejection (coercion / noise / false certainty)
    #[serde(rename = "FAIL_PRECONDITION")]
    Precondition,
    /// Candidate generation produced nothing (empty or seedless graph)
    #[serde(rename = "NO_CANDIDATES")]
    NoCandidates,
    /// Mean candidate ethics below threshold
    #[serde(rename = "FAIL_ETHICAL_COLLAPSE")]
    EthicalCollapse,
    /// Too many candidates blocked, or none executable
    #[serde(rename = "FAIL_ETHICAL_STALL")]
    EthicalStall,
    /// Paradox density above threshold
    #[serde(rename = "FAIL_PARADOX_OVERLOAD")]
    ParadoxOverload,
    /// Critical shadow avoidance
    #[serde(rename = "FAIL_SHADOW_AVOIDANCE_CRITICAL")]
    ShadowAvoidanceCritical,
    /// Flow persistently impossible
    #[serde(rename = "FAIL_FLOW_IMPOSSIBLE")]
    FlowImpossible,
    /// Sustained disagreement between capital and attention orderings
    #[serde(rename = "FAIL_STEREOSCOPIC_MISMATCH")]
    StereoscopicMismatch,
    /// Coherence or consistency below workable levels
    #[serde(rename = "FAIL_VECTOR_DECOHERENCE")]
    VectorDecoherence,
    /// Temporal integrity or projection unreliable
    #[serde(rename = "FAIL_TEMPORAL_COLLAPSE")]
    TemporalCollapse,
    /// Gate-critical metrics not computable
    #[serde(rename = "FAIL_OPERATIONALIZATION_MISSING")]
    OperationalizationMissing,
    /// Blocking unit inside the chosen vector (gate)
    #[serde(rename = "FAIL_BLOCKING_NODE")]
    BlockingNode,
    /// Ethically blocked unit inside the chosen vector (gate)
    #[serde(rename = "FAIL_ETHICALLY_BLOCKED_NODE")]
    EthicallyBlockedNode,
    /// Chosen vector not executable (gate)
    #[serde(rename = "FAIL_NOT_EXECUTABLE")]
    NotExecutable,
    /// An untestable claim asserting a hard stance (gate)
    #[serde(rename = "FAIL_EPISTEMIC_VIOLATION")]
    EpistemicViolation,
}

impl FailCode {
    /// The stable string form of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Precondition => "FAIL_PRECONDITION",
            Self::NoCandidates => "NO_CANDIDATES",
            Self::EthicalCollapse => "FAIL_ETHICAL_COLLAPSE",
            Self::EthicalStall => "FAIL_ETHICAL_STALL",
            Self::ParadoxOverload => "FAIL_PARADOX_OVERLOAD",
            Self::ShadowAvoidanceCritical => "FAIL_SHADOW_AVOIDANCE_CRITICAL",
            Self::FlowImpossible => "FAIL_FLOW_IMPOSSIBLE",
            Self::StereoscopicMismatch => "FAIL_STEREOSCOPIC_MISMATCH",
            Self::VectorDecoherence => "FAIL_VECTOR_DECOHERENCE",
            Self::TemporalCollapse => "FAIL_TEMPORAL_COLLAPSE",
            Self::OperationalizationMissing => "FAIL_OPERATIONALIZATION_MISSING",
            Self::BlockingNode => "FAIL_BLOCKING_NODE",
            Self::EthicallyBlockedNode => "FAIL_ETHICALLY_BLOCKED_NODE",
            Self::NotExecutable => "FAIL_NOT_EXECUTABLE",
            Self::EpistemicViolation => "FAIL_EPISTEMIC_VIOLATION",
        }
    }
}

impl std::fmt::Display for FailCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recovery suggestion for a failed cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recovery {
    /// The failure this suggestion answers
    pub fail_code: FailCode,
    /// What went wrong
    pub cause: String,
    /// Recommended action, machine-friendly
    pub action: String,
    /// The single next step to take
    pub next_step: String,
}

/// Look up the recovery suggestion for a fail code.
///
/// Codes without a dedicated entry fall back to a generic diagnostic
/// suggestion; a failure is never dropped silently.
pub fn lookup(code: FailCode) -> Recovery {
    let (cause, action, next_step) = match code {
        FailCode::Precondition => (
            "coercion, noise, or false certainty above tolerance",
            "reduce_input_pressure",
            "Lower coercion/noise signals and re-invoke",
        ),
        FailCode::NoCandidates => (
            "empty or seedless graph produced no candidates",
            "seed_the_graph",
            "Add units or supply seed ids before the next cycle",
        ),
        FailCode::EthicalCollapse => (
            "mean candidate ethics below 0.4",
            "reformulate_within_no_harm",
            "Generate high-ethics vectors",
        ),
        FailCode::EthicalStall => (
            "blocked fraction above 0.6",
            "narrow_space_reduce_risk",
            "Replace candidates, reduce harm potential",
        ),
        FailCode::ParadoxOverload => (
            "paradox density above 0.3",
            "paradox_collapse_or_simplify",
            "Collapse held paradoxes or simplify the graph",
        ),
        FailCode::ShadowAvoidanceCritical => (
            "shadow magnitude critical with low attention health",
            "consent_or_redirect",
            "Ask consent for shadow integration or change vector",
        ),
        FailCode::FlowImpossible => (
            "flow persistently below workable levels",
            "pause_or_change_activity",
            "Pause or change difficulty",
        ),
        FailCode::StereoscopicMismatch => (
            "sustained rank/amplitude disagreement without integration",
            "hold_paradox",
            "Propose a third integrating vector",
        ),
        FailCode::VectorDecoherence => (
            "coherence or consistency below threshold",
            "stabilize_or_rebuild",
            "Vector stabilization or reassembly",
        ),
        FailCode::TemporalCollapse => (
            "temporal integrity low or projection unreliable",
            "reduce_temporal_scope",
            "Lower temporal resolution, narrow the horizon",
        ),
        FailCode::OperationalizationMissing => (
            "gate-critical metrics not computable",
            "restore_metric_inputs",
            "Reconnect the metric inputs or mark the run simulation-only",
        ),
        _ => (
            "unmapped failure",
            "generic_recovery",
            "Diagnose and propose one step",
        ),
    };

    Recovery {
        fail_code: code,
        cause: cause.to_string(),
        action: action.to_string(),
        next_step: next_step.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let r = lookup(FailCode::EthicalCollapse);
        assert_eq!(r.fail_code, FailCode::EthicalCollapse);
        assert_eq!(r.action, "reformulate_within_no_harm");
    }

    #[test]
    fn test_lookup_unmapped_code_falls_back() {
        let r = lookup(FailCode::EpistemicViolation);
        assert_eq!(r.action, "generic_recovery");
        assert_eq!(r.next_step, "Diagnose and propose one step");
    }

    #[test]
    fn test_every_code_yields_a_suggestion() {
        for code in [
            FailCode::Precondition,
            FailCode::NoCandidates,
            FailCode::EthicalCollapse,
            FailCode::EthicalStall,
            FailCode::ParadoxOverload,
            FailCode::ShadowAvoidanceCritical,
            FailCode::FlowImpossible,
            FailCode::StereoscopicMismatch,
            FailCode::VectorDecoherence,
            FailCode::TemporalCollapse,
            FailCode::OperationalizationMissing,
            FailCode::BlockingNode,
            FailCode::EthicallyBlockedNode,
            FailCode::NotExecutable,
            FailCode::EpistemicViolation,
        ] {
            let r = lookup(code);
            assert!(!r.next_step.is_empty());
        }
    }

    #[test]
    fn test_code_string_form() {
        assert_eq!(FailCode::NoCandidates.as_str(), "NO_CANDIDATES");
        assert_eq!(FailCode::EthicalStall.to_string(), "FAIL_ETHICAL_STALL");
    }
}
