//! Stereoscopic fusion: rank and amplitude agreement between the capital
//! and attention orderings of a candidate set

use crate::space::EPS;

/// 0-based descending ranks: the highest value gets rank 0
pub fn rank_descending(values: &[f64]) -> Vec<usize> {
    let mut indexed: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut ranks = vec![0; values.len()];
    for (rank, (idx, _)) in indexed.into_iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}

/// Rank agreement for one candidate:
/// `1 - |rank_tsc - rank_scav| / (n - 1)`; 1.0 when n <= 1.
pub fn alignment(rank_tsc: usize, rank_scav: usize, n: usize) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    1.0 - rank_tsc.abs_diff(rank_scav) as f64 / (n - 1) as f64
}

/// Sample z-scores; the zero vector when fewer than two samples or the
/// sample deviation is (near-)zero.
fn z_scores(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();
    if std < EPS {
        return vec![0.0; n];
    }
    values.iter().map(|v| (v - mean) / std).collect()
}

/// Per-candidate amplitude gaps `|z_tsc - z_scav|`
pub fn gaps(tsc_values: &[f64], scav_values: &[f64]) -> Vec<f64> {
    let za = z_scores(tsc_values);
    let zb = z_scores(scav_values);
    za.iter().zip(zb.iter()).map(|(a, b)| (a - b).abs()).collect()
}

/// Alignments, gaps, and the maximum gap for a whole candidate set
pub fn fuse(tsc_values: &[f64], scav_values: &[f64]) -> (Vec<f64>, Vec<f64>, f64) {
    let n = tsc_values.len();
    if n == 0 {
        return (Vec::new(), Vec::new(), 0.0);
    }

    let ranks_tsc = rank_descending(tsc_values);
    let ranks_scav = rank_descending(scav_values);
    let alignments: Vec<f64> = ranks_tsc
        .iter()
        .zip(ranks_scav.iter())
        .map(|(rt, rs)| alignment(*rt, *rs, n))
        .collect();

    let gap_values = gaps(tsc_values, scav_values);
    let gap_max = gap_values.iter().copied().fold(0.0, f64::max);
    (alignments, gap_values, gap_max)
}
