use crate::vector::Vocabulary;
use std::collections::HashMap;

/// Pearson correlation between two raw term-frequency maps over a
/// shared vocabulary. No IDF weighting is applied; this scorer works
/// on plain counts.
pub fn pearson_similarity(
    tf_a: &HashMap<String, u32>,
    tf_b: &HashMap<String, u32>,
    vocabulary: &Vocabulary,
) -> f64 {
    let x = raw_counts(tf_a, vocabulary);
    let y = raw_counts(tf_b, vocabulary);
    correlation(&x, &y)
}

/// One entry per vocabulary term, absent terms contributing 0.
pub fn raw_counts(tf: &HashMap<String, u32>, vocabulary: &Vocabulary) -> Vec<f64> {
    vocabulary
        .terms()
        .iter()
        .map(|term| f64::from(tf.get(term).copied().unwrap_or(0)))
        .collect()
}

/// Sample Pearson correlation of two equal-length vectors. A constant
/// vector (zero centered sum of squares) short-circuits to 0.0.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x * var_y).sqrt()
}
