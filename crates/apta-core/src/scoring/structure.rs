use crate::core::vocabulary::NucleotideVocabulary;
use ndarray::{Array3, s};
use serde::Deserialize;

const MAX_STEM_LENGTH: usize = 6;

/// Secondary-structure propensities the proxy loss can reward. "No
/// preference" is expressed as `Option::None` at the call sites, keeping the
/// dispatch closed and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    Hairpin,
    GQuadruplex,
}

/// Coarse structural-propensity proxies over the probability tensor.
///
/// Hairpin: the first `min(6, length / 3)` positions are paired against the
/// reversed trailing window and scored by distribution inner products. This
/// rewards 5'/3' agreement as a stand-in for stem formation; it is not a
/// base-pairing-rule check. An empty stem (length < 3) scores zero.
///
/// GQuadruplex: mean per-position guanine mass, RNA/DNA agnostic. High G
/// content stands in for quadruplex-forming potential; the four-runs-of-three
/// motif is not verified.
///
/// Scores are negated so that minimizing the loss maximizes propensity. With
/// no requested structure the loss is zero regardless of weight.
pub fn structure_loss(
    probs: &Array3<f64>,
    vocabulary: &NucleotideVocabulary,
    kind: Option<StructureKind>,
    weight: f64,
) -> f64 {
    let Some(kind) = kind else {
        return 0.0;
    };
    let (batch, length, _) = probs.dim();

    match kind {
        StructureKind::Hairpin => {
            let stem = MAX_STEM_LENGTH.min(length / 3);
            if stem == 0 {
                return 0.0;
            }
            let mut complementarity = 0.0;
            for b in 0..batch {
                for i in 0..stem {
                    let five_prime = probs.slice(s![b, i, ..]);
                    let three_prime = probs.slice(s![b, length - 1 - i, ..]);
                    complementarity += five_prime.dot(&three_prime);
                }
            }
            -weight * complementarity / (batch * stem) as f64
        }
        StructureKind::GQuadruplex => {
            let mut g_content = 0.0;
            for b in 0..batch {
                for l in 0..length {
                    g_content += vocabulary.g_mass(probs.slice(s![b, l, ..]));
                }
            }
            -weight * g_content / (batch * length) as f64
        }
    }
}
