//! Adaptive scoring parameters with per-cycle learning rules

use crate::metrics::clamp;
use serde::{Deserialize, Serialize};

/// Last-updated cycle index per parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterTrace {
    pub alpha: u64,
    pub gamma: u64,
    pub lambda: u64,
    pub beta_retro: u64,
}

/// The four adaptive scalars driving the capital formulas
///
/// `beta` and `delta` are derived (`1 - alpha`, `1 - gamma`) and exposed only
/// through accessors, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveParameters {
    alpha: f64,
    gamma: f64,
    lambda: f64,
    beta_retro: f64,
    trace: ParameterTrace,
}

impl Default for AdaptiveParameters {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            gamma: 0.4,
            lambda: 0.8,
            beta_retro: 0.2,
            trace: ParameterTrace::default(),
        }
    }
}

impl AdaptiveParameters {
    /// Parameters at their documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Derived: `1 - alpha`
    pub fn beta(&self) -> f64 {
        1.0 - self.alpha
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Derived: `1 - gamma`
    pub fn delta(&self) -> f64 {
        1.0 - self.gamma
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn beta_retro(&self) -> f64 {
        self.beta_retro
    }

    pub fn trace(&self) -> ParameterTrace {
        self.trace
    }

    /// `alpha ← clamp(mean(last 10 alignment entries), 0, 1)`
    ///
    /// Leaves alpha untouched when the history is empty.
    pub fn update_alpha(&mut self, alignment_history: &[f64], cycle: u64) {
        let window = &alignment_history[alignment_history.len().saturating_sub(10)..];
        if window.is_empty() {
            return;
        }
        self.alpha = clamp(window.iter().sum::<f64>() / window.len() as f64, 0.0, 1.0);
        self.trace.alpha = cycle;
    }

    /// `gamma ← clamp(0.2 + 0.6·urgency, 0.2, 0.8)`
    pub fn update_gamma(&mut self, urgency: f64, cycle: u64) {
        self.gamma = clamp(0.2 + 0.6 * urgency, 0.2, 0.8);
        self.trace.gamma = cycle;
    }

    /// `lambda ← clamp(lambda + 0.1·(effect − 0.5), 0.5, 1.0)`
    pub fn update_lambda(&mut self, effect: f64, cycle: u64) {
        self.lambda = clamp(self.lambda + 0.1 * (effect - 0.5), 0.5, 1.0);
        self.trace.lambda = cycle;
    }

    /// `beta_retro ← clamp(observed / max_effects, 0, 0.5)` when
    /// `max_effects > 0`, otherwise unchanged (the trace still advances).
    pub fn update_beta_retro(&mut self, observed: f64, max_effects: f64, cycle: u64) {
        if max_effects > 0.0 {
            self.beta_retro = clamp(observed / max_effects, 0.0, 0.5);
        }
        self.trace.beta_retro = cycle;
    }

    /// Serializable snapshot including the derived values
    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            alpha: self.alpha,
            beta: self.beta(),
            gamma: self.gamma,
            delta: self.delta(),
            lambda: self.lambda,
            beta_retro: self.beta_retro,
            trace: self.trace,
        }
    }
}

/// Point-in-time view of the parameters, derived values included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub lambda: f64,
    pub beta_retro: f64,
    pub trace: ParameterTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = AdaptiveParameters::new();
        assert_eq!(p.alpha(), 0.5);
        assert_eq!(p.beta(), 0.5);
        assert_eq!(p.gamma(), 0.4);
        assert!((p.delta() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_derived_sums_hold_after_updates() {
        let mut p = AdaptiveParameters::new();
        p.update_alpha(&[0.9, 0.8, 0.7], 1);
        p.update_gamma(0.42, 1);
        assert!((p.alpha() + p.beta() - 1.0).abs() < 1e-12);
        assert!((p.gamma() + p.delta() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_update_alpha_uses_last_ten() {
        let mut p = AdaptiveParameters::new();
        let mut history = vec![0.0; 10];
        history.extend(vec![1.0; 10]);
        p.update_alpha(&history, 3);
        assert_eq!(p.alpha(), 1.0);
        assert_eq!(p.trace().alpha, 3);
    }

    #[test]
    fn test_update_alpha_empty_history_unchanged() {
        let mut p = AdaptiveParameters::new();
        p.update_alpha(&[], 7);
        assert_eq!(p.alpha(), 0.5);
        assert_eq!(p.trace().alpha, 0);
    }

    #[test]
    fn test_update_gamma_bounds() {
        let mut p = AdaptiveParameters::new();
        p.update_gamma(1.0, 1);
        assert!((p.gamma() - 0.8).abs() < 1e-9);
        p.update_gamma(0.0, 2);
        assert!((p.gamma() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_update_lambda_drift() {
        let mut p = AdaptiveParameters::new();
        p.update_lambda(1.0, 1);
        assert!((p.lambda() - 0.85).abs() < 1e-9);
        for cycle in 2..20 {
            p.update_lambda(0.0, cycle);
        }
        assert!((p.lambda() - 0.5).abs() < 1e-9, "floored at 0.5");
    }

    #[test]
    fn test_update_beta_retro_guard() {
        let mut p = AdaptiveParameters::new();
        p.update_beta_retro(0.4, 0.0, 1);
        assert_eq!(p.beta_retro(), 0.2, "unchanged when max_effects is 0");
        p.update_beta_retro(0.4, 0.5, 2);
        assert_eq!(p.beta_retro(), 0.5, "capped at 0.5");
    }
}
