use crate::core::distribution::shannon_entropy;
use crate::core::vocabulary::NucleotideVocabulary;
use ndarray::{Array3, Axis, s};

/// Mean squared deviation of the expected GC fraction from `target_gc`,
/// averaged over the batch and scaled by `weight`. Sequences of length zero
/// are outside the input contract.
pub fn gc_content_loss(
    probs: &Array3<f64>,
    vocabulary: &NucleotideVocabulary,
    target_gc: f64,
    weight: f64,
) -> f64 {
    let (batch, length, _) = probs.dim();
    let mut total = 0.0;
    for b in 0..batch {
        let mut mean_gc = 0.0;
        for l in 0..length {
            mean_gc += vocabulary.gc_mass(probs.slice(s![b, l, ..]));
        }
        mean_gc /= length as f64;
        total += (mean_gc - target_gc).powi(2);
    }
    weight * total / batch as f64
}

/// Penalizes peaked, repetitive distributions: mean positional entropy is
/// normalized by the maximum possible entropy for the tensor's vocabulary
/// extent, and the loss is `weight` times the shortfall from 1. Maximal
/// diversity yields zero loss.
pub fn complexity_loss(probs: &Array3<f64>, weight: f64) -> f64 {
    let vocab_size = probs.len_of(Axis(2));
    let positions = probs.len_of(Axis(0)) * probs.len_of(Axis(1));

    let entropy_sum: f64 = probs.lanes(Axis(2)).into_iter().map(shannon_entropy).sum();
    let mean_entropy = entropy_sum / positions as f64;

    let complexity = mean_entropy / (vocab_size as f64).ln();
    weight * (1.0 - complexity)
}
