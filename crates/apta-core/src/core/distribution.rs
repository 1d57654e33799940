use ndarray::{Array, ArrayView1, Axis, Dimension};

const LOG_EPSILON: f64 = 1e-10;

/// Converts raw per-position scores into probability distributions over the
/// last axis. The per-lane maximum is subtracted before exponentiating, so
/// the transform is defined for any finite input.
pub fn softmax<D: Dimension>(logits: &Array<f64, D>) -> Array<f64, D> {
    let mut probs = logits.clone();
    let vocab_axis = Axis(probs.ndim() - 1);
    for mut lane in probs.lanes_mut(vocab_axis) {
        let max = lane.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
        lane.mapv_inplace(|x| (x - max).exp());
        let sum = lane.sum();
        lane.mapv_inplace(|x| x / sum);
    }
    probs
}

/// Shannon entropy of a single distribution, in nats. The epsilon inside the
/// logarithm keeps zero-probability entries finite.
pub fn shannon_entropy(dist: ArrayView1<f64>) -> f64 {
    -dist.iter().map(|&p| p * (p + LOG_EPSILON).ln()).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, Array3};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn softmax_lanes_sum_to_one_and_are_non_negative() {
        let logits = Array3::from_shape_fn((2, 5, 7), |(b, l, v)| {
            (b as f64) * 1.3 - (l as f64) * 0.7 + (v as f64) * 0.11
        });
        let probs = softmax(&logits);
        for lane in probs.lanes(Axis(2)) {
            assert!((lane.sum() - 1.0).abs() < 1e-5);
            assert!(lane.iter().all(|&p| p >= 0.0));
        }
    }

    #[test]
    fn softmax_is_stable_for_large_logits() {
        let logits = Array3::from_elem((1, 3, 4), 1000.0);
        let probs = softmax(&logits);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!(f64_approx_equal(probs[[0, 0, 0]], 0.25));
    }

    #[test]
    fn softmax_of_uniform_logits_is_uniform() {
        let logits = Array3::from_elem((1, 2, 8), -3.5);
        let probs = softmax(&logits);
        assert!(probs.iter().all(|&p| f64_approx_equal(p, 0.125)));
    }

    #[test]
    fn softmax_favors_the_largest_logit() {
        let mut logits = Array3::zeros((1, 1, 4));
        logits[[0, 0, 2]] = 10.0;
        let probs = softmax(&logits);
        assert!(probs[[0, 0, 2]] > 0.99);
    }

    #[test]
    fn softmax_accepts_any_leading_shape() {
        let logits = Array2::from_shape_fn((3, 5), |(r, v)| (r * v) as f64 * 0.2);
        let probs = softmax(&logits);
        for lane in probs.lanes(Axis(1)) {
            assert!((lane.sum() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn entropy_of_uniform_distribution_is_log_of_size() {
        let dist = Array1::from_elem(16, 1.0 / 16.0);
        let entropy = shannon_entropy(dist.view());
        assert!((entropy - (16.0f64).ln()).abs() < 1e-6);
    }

    #[test]
    fn entropy_of_point_mass_is_near_zero() {
        let mut dist = Array1::zeros(16);
        dist[3] = 1.0;
        let entropy = shannon_entropy(dist.view());
        assert!(entropy.abs() < 1e-6);
    }
}
