//! Epistemic claims: the discipline of what may be asserted

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// Whether a claim concerns the current contour or something beyond it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    InContour,
    OutOfContour,
}

impl Default for Scope {
    fn default() -> Self {
        Self::InContour
    }
}

/// How the claim's topic can be checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observability {
    Observed,
    Inferred,
    Untestable,
}

/// The stance asserted on the topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Affirmed,
    Denied,
    Agnostic,
    Mu,
}

/// A single epistemic claim
///
/// Rule: an untestable topic may only carry an agnostic or mu stance;
/// affirmed/denied require an observed or inferred basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpistemicClaim {
    pub topic: String,
    pub scope: Scope,
    pub observability: Observability,
    pub stance: Stance,
    pub reason: String,
    pub linked_nodes: Vec<NodeId>,
    pub cycle: u64,
}

impl EpistemicClaim {
    /// Create a claim with an explicit stance
    pub fn new(
        topic: impl Into<String>,
        observability: Observability,
        stance: Stance,
    ) -> Self {
        Self {
            topic: topic.into(),
            scope: Scope::default(),
            observability,
            stance,
            reason: String::new(),
            linked_nodes: Vec::new(),
            cycle: 0,
        }
    }

    /// Build a claim deriving the stance from its observability:
    /// untestable → agnostic (mu under a sustained indicator conflict),
    /// observed → affirmed, inferred → affirmed when a reason is given,
    /// agnostic otherwise.
    pub fn derive(
        topic: impl Into<String>,
        scope: Scope,
        observability: Observability,
        reason: impl Into<String>,
        conflict_sustained: bool,
        cycle: u64,
    ) -> Self {
        let reason = reason.into();
        let stance = match observability {
            Observability::Untestable => {
                if conflict_sustained {
                    Stance::Mu
                } else {
                    Stance::Agnostic
                }
            }
            Observability::Observed => Stance::Affirmed,
            Observability::Inferred => {
                if reason.is_empty() {
                    Stance::Agnostic
                } else {
                    Stance::Affirmed
                }
            }
        };

        let mut claim = Self {
            topic: topic.into(),
            scope,
            observability,
            stance,
            reason,
            linked_nodes: Vec::new(),
            cycle,
        };
        if !claim.is_valid() {
            claim.stance = Stance::Agnostic;
        }
        claim
    }

    /// Attach supporting unit ids
    pub fn with_linked_nodes(mut self, nodes: Vec<NodeId>) -> Self {
        self.linked_nodes = nodes;
        self
    }

    /// Set the free-text reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// The admission-gate rule: untestable topics admit only agnostic or mu
    pub fn is_valid(&self) -> bool {
        if self.observability == Observability::Untestable {
            return matches!(self.stance, Stance::Agnostic | Stance::Mu);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_affirmed_valid() {
        let c = EpistemicClaim::new("graph state", Observability::Observed, Stance::Affirmed);
        assert!(c.is_valid());
    }

    #[test]
    fn test_untestable_affirmed_invalid() {
        let c = EpistemicClaim::new("consciousness", Observability::Untestable, Stance::Affirmed);
        assert!(!c.is_valid());
    }

    #[test]
    fn test_untestable_agnostic_and_mu_valid() {
        for stance in [Stance::Agnostic, Stance::Mu] {
            let c = EpistemicClaim::new("consciousness", Observability::Untestable, stance);
            assert!(c.is_valid());
        }
    }

    #[test]
    fn test_derive_untestable_defaults_agnostic() {
        let c = EpistemicClaim::derive(
            "inner state",
            Scope::OutOfContour,
            Observability::Untestable,
            "",
            false,
            0,
        );
        assert_eq!(c.stance, Stance::Agnostic);
    }

    #[test]
    fn test_derive_untestable_conflict_is_mu() {
        let c = EpistemicClaim::derive(
            "inner state",
            Scope::InContour,
            Observability::Untestable,
            "",
            true,
            4,
        );
        assert_eq!(c.stance, Stance::Mu);
        assert_eq!(c.cycle, 4);
    }

    #[test]
    fn test_derive_inferred_needs_reason_to_affirm() {
        let bare = EpistemicClaim::derive(
            "pattern",
            Scope::InContour,
            Observability::Inferred,
            "",
            false,
            0,
        );
        assert_eq!(bare.stance, Stance::Agnostic);

        let reasoned = EpistemicClaim::derive(
            "pattern",
            Scope::InContour,
            Observability::Inferred,
            "seen across three cycles",
            false,
            0,
        );
        assert_eq!(reasoned.stance, Stance::Affirmed);
    }
}
