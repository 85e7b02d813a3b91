//! Semantic capital: the composite quality scores a vector competes on

use crate::space::cosine_similarity;

/// Core semantic capital:
/// `SC = AR × CI × TI × (α + β×RI) × Φ`
pub fn semantic_capital(
    ar: f64,
    ci: f64,
    ti: f64,
    alpha: f64,
    beta: f64,
    ri: f64,
    phi: f64,
) -> f64 {
    ar * ci * ti * (alpha + beta * ri) * phi
}

/// Base capital with temporal recursion:
/// `TSC_base = SC × (γ + δ×FP_recursive)`
pub fn tsc_base(sc: f64, gamma: f64, delta: f64, fp_recursive: f64) -> f64 {
    sc * (gamma + delta * fp_recursive)
}

/// Extended capital: directional alignment with the declared intent plus the
/// ethics multiplier. A non-executable vector scores 0 regardless of the
/// other inputs.
pub fn tsc_extended(
    tsc_base: f64,
    lambda: f64,
    consistency: f64,
    current_direction: &[f64],
    ideal_direction: &[f64],
    ethical_coefficient: f64,
    executable: bool,
) -> f64 {
    if !executable {
        return 0.0;
    }
    let alignment = cosine_similarity(current_direction, ideal_direction);
    tsc_base * (1.0 + lambda * consistency * alignment) * ethical_coefficient
}
