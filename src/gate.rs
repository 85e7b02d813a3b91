//! The admission gate: final deterministic pass/fail before a cycle's
//! result is accepted

use crate::graph::{AttentionVector, NodeStatus, SemanticGraph};
use crate::recovery::FailCode;
use crate::session::EpistemicClaim;
use crate::workflow::MetricSnapshot;
use serde::{Deserialize, Serialize};

/// Gate thresholds; all hard except the recommended attention health
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GateThresholds {
    /// Minimum mean candidate ethics (hard)
    pub ethical_score_min: f64,
    /// Maximum non-executable candidate fraction (hard)
    pub blocked_fraction_max: f64,
    /// Maximum paradox density (hard)
    pub mu_density_max: f64,
    /// Minimum attention health (warning only)
    pub scav_health_recommended: f64,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            ethical_score_min: 0.4,
            blocked_fraction_max: 0.6,
            mu_density_max: 0.3,
            scav_health_recommended: 0.3,
        }
    }
}

/// One hard violation found by the gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateViolation {
    pub code: FailCode,
    pub detail: String,
}

/// The gate's verdict: pass flag, ordered violations, non-fatal warnings
///
/// The first violation's code becomes the cycle's fail code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateOutcome {
    pub passed: bool,
    pub violations: Vec<GateViolation>,
    pub warnings: Vec<String>,
}

impl GateOutcome {
    /// The fail code of the first violation, if any
    pub fn fail_code(&self) -> Option<FailCode> {
        self.violations.first().map(|v| v.code)
    }
}

/// Validates the aggregate metric snapshot and the chosen candidate against
/// fixed thresholds. Performs no mutation.
#[derive(Debug, Clone, Default)]
pub struct AdmissionGate {
    thresholds: GateThresholds,
}

impl AdmissionGate {
    /// Create a gate with the given thresholds
    pub fn new(thresholds: GateThresholds) -> Self {
        Self { thresholds }
    }

    /// Run every check; collect all violations in order
    pub fn check(
        &self,
        graph: &SemanticGraph,
        chosen: &AttentionVector,
        metrics: &MetricSnapshot,
        claims: &[EpistemicClaim],
    ) -> GateOutcome {
        let mut violations = Vec::new();
        let mut warnings = Vec::new();
        let t = &self.thresholds;

        if metrics.ethical_score_candidates < t.ethical_score_min {
            violations.push(GateViolation {
                code: FailCode::EthicalCollapse,
                detail: format!(
                    "Ethical_score={:.4} < {}",
                    metrics.ethical_score_candidates, t.ethical_score_min
                ),
            });
        }

        if metrics.blocked_fraction > t.blocked_fraction_max {
            violations.push(GateViolation {
                code: FailCode::EthicalStall,
                detail: format!(
                    "Blocked_fraction={:.4} > {}",
                    metrics.blocked_fraction, t.blocked_fraction_max
                ),
            });
        }

        if metrics.mu_density > t.mu_density_max {
            violations.push(GateViolation {
                code: FailCode::ParadoxOverload,
                detail: format!("Mu_density={:.4} > {}", metrics.mu_density, t.mu_density_max),
            });
        }

        if metrics.scav_health < t.scav_health_recommended {
            warnings.push(format!(
                "SCAV_health={:.4} < recommended {}",
                metrics.scav_health, t.scav_health_recommended
            ));
        }

        for id in &chosen.members {
            let Some(node) = graph.get_node(id) else {
                continue;
            };
            if node.status == NodeStatus::Blocking {
                violations.push(GateViolation {
                    code: FailCode::BlockingNode,
                    detail: format!("BLOCKING unit '{id}' in chosen vector"),
                });
            }
            if node.status == NodeStatus::EthicallyBlocked {
                violations.push(GateViolation {
                    code: FailCode::EthicallyBlockedNode,
                    detail: format!("ETHICALLY_BLOCKED unit '{id}' in chosen vector"),
                });
            }
        }

        for claim in claims {
            if !claim.is_valid() {
                violations.push(GateViolation {
                    code: FailCode::EpistemicViolation,
                    detail: format!(
                        "claim '{}' asserts a hard stance on an untestable topic",
                        claim.topic
                    ),
                });
            }
        }

        if !chosen.executable {
            violations.push(GateViolation {
                code: FailCode::NotExecutable,
                detail: "chosen vector is not executable".to_string(),
            });
        }

        GateOutcome {
            passed: violations.is_empty(),
            violations,
            warnings,
        }
    }
}
