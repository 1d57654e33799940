use ndarray::{Array3, s};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Penalizes probability mass on identical bases at nearby positions.
///
/// For every offset i in 1..=max_run, the mean inner product between
/// position pairs exactly i apart is accumulated, scaled by i/max_run so
/// longer prospective runs weigh more. This detects pairwise positional
/// similarity, not true consecutive-run length; the approximation is part of
/// the term's calibrated definition and must not be sharpened without
/// re-tuning the weights around it.
pub fn homopolymer_penalty(probs: &Array3<f64>, max_run: usize, weight: f64) -> f64 {
    let (batch, length, _) = probs.dim();
    if length < 2 || max_run == 0 {
        return 0.0;
    }

    let batch_indices: Vec<usize> = (0..batch).collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = batch_indices.iter();

    #[cfg(feature = "parallel")]
    let iterator = batch_indices.par_iter();

    let penalty: f64 = iterator
        .map(|&b| per_item_penalty(probs, b, max_run))
        .sum::<f64>()
        / batch as f64;

    weight * penalty
}

fn per_item_penalty(probs: &Array3<f64>, b: usize, max_run: usize) -> f64 {
    let length = probs.dim().1;
    let mut penalty = 0.0;
    for offset in 1..=max_run.min(length - 1) {
        let mut similarity = 0.0;
        for l in 0..length - offset {
            let here = probs.slice(s![b, l, ..]);
            let ahead = probs.slice(s![b, l + offset, ..]);
            similarity += here.dot(&ahead);
        }
        let mean_similarity = similarity / (length - offset) as f64;
        penalty += mean_similarity * (offset as f64 / max_run as f64);
    }
    penalty
}
