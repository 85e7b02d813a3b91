//! The declarative input of one workflow invocation

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// One relevance-tagged input signal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Signal {
    pub content: String,
    pub relevance: f64,
}

/// Everything a caller may hand to one cycle.
///
/// All fields default, so a partial YAML/JSON context map deserializes into
/// a usable input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleInput {
    /// The raw request text
    pub raw_input: String,
    /// Declared intent name; unset or unknown resolves to "implement"
    pub intent: Option<String>,
    /// Phase-1 gating signals
    pub coercion: f64,
    pub noise: f64,
    pub false_certainty: f64,
    /// SCAV resonance inputs
    pub resonance_field: f64,
    pub bidirectional_ratio: f64,
    /// Relevance-tagged input signals
    pub signals: Vec<Signal>,
    /// Drives the gamma update; 0 keeps gamma at its floor
    pub urgency: f64,
    /// Drive the beta_retro update; beta_retro is untouched while
    /// `max_effect` stays 0
    pub observed_effect: f64,
    pub max_effect: f64,
    /// Consent for shadow integration (phase 7)
    pub consent_shadow: bool,
    /// Consent for explicit paradox collapse
    pub consent_collapse: bool,
    /// Explicit seed units for candidate generation
    pub seed_ids: Option<Vec<NodeId>>,
}

impl Default for CycleInput {
    fn default() -> Self {
        Self {
            raw_input: String::new(),
            intent: None,
            coercion: 0.0,
            noise: 0.0,
            false_certainty: 0.0,
            resonance_field: 0.5,
            bidirectional_ratio: 0.5,
            signals: Vec::new(),
            urgency: 0.0,
            observed_effect: 0.0,
            max_effect: 0.0,
            consent_shadow: false,
            consent_collapse: false,
            seed_ids: None,
        }
    }
}

impl CycleInput {
    /// Input carrying just a request text
    pub fn from_text(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            ..Self::default()
        }
    }

    /// Set the declared intent
    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Set explicit seed units
    pub fn with_seeds(mut self, seeds: Vec<NodeId>) -> Self {
        self.seed_ids = Some(seeds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = CycleInput::default();
        assert_eq!(input.coercion, 0.0);
        assert_eq!(input.resonance_field, 0.5);
        assert_eq!(input.bidirectional_ratio, 0.5);
        assert!(input.seed_ids.is_none());
    }

    #[test]
    fn test_partial_yaml_context_map() {
        let input: CycleInput =
            serde_yaml::from_str("intent: audit\nnoise: 0.2\n").expect("valid yaml");
        assert_eq!(input.intent.as_deref(), Some("audit"));
        assert_eq!(input.noise, 0.2);
        assert_eq!(input.resonance_field, 0.5);
    }
}
