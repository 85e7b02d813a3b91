//! Engine configuration: every tunable threshold in one aggregate,
//! loadable from YAML

use crate::gate::GateThresholds;
use crate::generator::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Phase-1 input tolerances
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PreconditionConfig {
    /// Ceiling for coercion and false-certainty signals
    pub strictness: f64,
    /// Ceiling for the noise signal
    pub noise_tolerance: f64,
}

impl Default for PreconditionConfig {
    fn default() -> Self {
        Self {
            strictness: 0.5,
            noise_tolerance: 0.5,
        }
    }
}

/// Phase-2 signal filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Multiplier applied to each signal's relevance
    pub attunement_gain: f64,
    /// Minimum boosted relevance for a signal to survive filtering
    pub relevance_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            attunement_gain: 1.0,
            relevance_threshold: 0.3,
        }
    }
}

/// Ethics pass configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EthicsConfig {
    /// Minimum ethics multiplier for a vector to stay executable
    pub executable_min: f64,
}

impl Default for EthicsConfig {
    fn default() -> Self {
        Self { executable_min: 0.4 }
    }
}

/// Temporal projection configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Projection resolution in [1, 100]; the horizon is resolution / 100
    pub temporal_resolution: u32,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            temporal_resolution: 50,
        }
    }
}

impl TemporalConfig {
    /// Normalized projection horizon
    pub fn horizon(&self) -> f64 {
        f64::from(self.temporal_resolution) / 100.0
    }
}

/// Flow-check configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Winner flow below this triggers the advisory lookup
    pub advisory_min: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self { advisory_min: 0.3 }
    }
}

/// Hallucination-guard configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct HallucinationConfig {
    /// Assumption-per-member ratio above which the guard flags the winner
    pub sensitivity: f64,
}

impl Default for HallucinationConfig {
    fn default() -> Self {
        Self { sensitivity: 0.5 }
    }
}

/// Shadow-audit configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Shadow magnitude above this (with low health) activates integration
    pub magnitude_max: f64,
    /// Attention health below this (with high magnitude) activates integration
    pub health_min: f64,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            magnitude_max: 0.5,
            health_min: 0.5,
        }
    }
}

/// Paradox-trigger configuration (sustained stereoscopic disagreement)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ParadoxConfig {
    /// Mean alignment below this counts toward the trigger
    pub alignment_min: f64,
    /// Maximum gap above this counts toward the trigger
    pub gap_threshold: f64,
    /// Consecutive cycles required
    pub sustained_cycles: usize,
}

impl Default for ParadoxConfig {
    fn default() -> Self {
        Self {
            alignment_min: 0.3,
            gap_threshold: 1.5,
            sustained_cycles: 3,
        }
    }
}

/// The whole engine configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub preconditions: PreconditionConfig,
    pub signals: SignalConfig,
    pub generator: GeneratorConfig,
    pub ethics: EthicsConfig,
    pub temporal: TemporalConfig,
    pub flow: FlowConfig,
    pub hallucination: HallucinationConfig,
    pub shadow: ShadowConfig,
    pub paradox: ParadoxConfig,
    pub gate: GateThresholds,
}

impl EngineConfig {
    /// Load configuration from a YAML file; missing sections keep defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.generator.candidate_count, 5);
        assert_eq!(config.generator.branching, 3);
        assert_eq!(config.ethics.executable_min, 0.4);
        assert_eq!(config.gate.mu_density_max, 0.3);
        assert_eq!(config.paradox.sustained_cycles, 3);
        assert!((config.temporal.horizon() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: EngineConfig = serde_yaml::from_str(
            "generator:\n  candidate_count: 9\ngate:\n  ethical_score_min: 0.6\n",
        )
        .expect("valid yaml");
        assert_eq!(config.generator.candidate_count, 9);
        assert_eq!(config.generator.branching, 3, "untouched field keeps default");
        assert_eq!(config.gate.ethical_score_min, 0.6);
        assert_eq!(config.gate.blocked_fraction_max, 0.6);
    }
}
