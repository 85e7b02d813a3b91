//! The 12-axis attribute space: vector algebra and intent templates

use serde::{Deserialize, Serialize};

/// Axis names, index order matching [`crate::graph::Axes::as_array`]
pub const AXES: [&str; 12] = [
    "clarity",
    "harm",
    "empathy",
    "agency",
    "uncertainty",
    "novelty",
    "coherence",
    "practicality",
    "temporality",
    "boundary",
    "resonance",
    "shadow",
];

/// Dimensionality of the attribute space
pub const DIM: usize = 12;

/// Numerical floor below which a norm or variance counts as zero
pub const EPS: f64 = 1e-9;

/// Euclidean norm
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Unit-normalize; the epsilon keeps the zero vector finite
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let n = norm(v) + EPS;
    v.iter().map(|x| x / n).collect()
}

/// Dot product over the shared prefix
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity; 0.0 when either vector is (near-)zero
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let (na, nb) = (norm(a), norm(b));
    if na < EPS || nb < EPS {
        return 0.0;
    }
    dot(a, b) / (na * nb)
}

/// Scale by a scalar
pub fn scale(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|x| x * s).collect()
}

/// Element-wise negation
pub fn negate(v: &[f64]) -> Vec<f64> {
    v.iter().map(|x| -x).collect()
}

/// Declared intent of an invocation, selecting an ideal-direction template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Implement,
    Explain,
    Audit,
    ExploreParadox,
    Compress,
}

impl Default for Intent {
    fn default() -> Self {
        Self::Implement
    }
}

impl Intent {
    /// Resolve an intent name; unset or unrecognized names fall back to
    /// `Implement`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("implement") => Self::Implement,
            Some("explain") => Self::Explain,
            Some("audit") => Self::Audit,
            Some("explore_paradox") | Some("explore-paradox") => Self::ExploreParadox,
            Some("compress") => Self::Compress,
            _ => Self::Implement,
        }
    }

    /// The ideal attribute direction for this intent
    pub fn ideal_direction(&self) -> [f64; DIM] {
        match self {
            Self::Implement => [0.8, 0.0, 0.4, 0.5, 0.3, 0.2, 0.8, 0.9, 0.2, 0.9, 0.6, 0.2],
            Self::Explain => [1.0, 0.0, 0.5, 0.4, 0.3, 0.2, 0.7, 0.6, 0.0, 0.8, 0.6, 0.0],
            Self::Audit => [0.9, 0.0, 0.3, 0.4, 0.5, 0.1, 0.9, 0.7, 0.0, 0.9, 0.4, 0.1],
            Self::ExploreParadox => [0.6, 0.0, 0.7, 0.2, 0.9, 0.8, 0.5, 0.3, 0.0, 0.9, 0.8, 0.4],
            Self::Compress => [0.8, 0.0, 0.3, 0.4, 0.4, 0.1, 0.8, 0.8, 0.0, 0.8, 0.4, 0.1],
        }
    }
}
