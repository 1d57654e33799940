use super::composition::{complexity_loss, gc_content_loss};
use super::config::{ScoringConfig, ScoringError};
use super::repeats::homopolymer_penalty;
use super::structure::structure_loss;
use crate::core::distribution::softmax;
use ndarray::Array3;
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// Post-weight value of every loss term from the most recent evaluation,
/// plus their sum. Diagnostic only; the optimizer consumes the scalar total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LossBreakdown {
    pub gc_content: f64,
    pub complexity: f64,
    pub homopolymer: f64,
    pub structure: f64,
    pub total: f64,
}

impl LossBreakdown {
    /// String-keyed view of the breakdown for logging and reporting
    /// pipelines, under the reference term names.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("gc_content_loss", self.gc_content),
            ("complexity_loss", self.complexity),
            ("homopolymer_loss", self.homopolymer),
            ("structure_loss", self.structure),
            ("total_aptamer_loss", self.total),
        ])
    }
}

/// Combines the individual loss terms into one optimization objective.
///
/// Borrows an immutable [`ScoringConfig`] for its lifetime; a single scorer
/// can evaluate any number of candidate tensors.
pub struct AptamerScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> AptamerScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Evaluates raw logits of shape `[batch, position, vocabulary]`.
    ///
    /// Logits are converted to probability distributions internally; the
    /// individual terms never see unnormalized input. The structure term is
    /// computed only when a structure kind is configured and is recorded as
    /// zero otherwise, in which case no structure weight is required.
    #[instrument(skip_all, name = "aptamer_design_loss")]
    pub fn evaluate(&self, logits: &Array3<f64>) -> Result<(f64, LossBreakdown), ScoringError> {
        let config = self.config;
        let probs = softmax(logits);

        let gc_content = gc_content_loss(
            &probs,
            &config.vocabulary,
            config.target_gc,
            config.weights.require("gc_content")?,
        );
        let complexity = complexity_loss(&probs, config.weights.require("complexity")?);
        let homopolymer =
            homopolymer_penalty(&probs, config.max_run, config.weights.require("homopolymer")?);

        let structure_weight = match config.structure {
            Some(_) => config.weights.require("structure")?,
            None => 0.0,
        };
        let structure = structure_loss(&probs, &config.vocabulary, config.structure, structure_weight);

        let total = gc_content + complexity + homopolymer + structure;
        trace!(gc_content, complexity, homopolymer, structure, total, "aptamer loss terms");

        Ok((
            total,
            LossBreakdown {
                gc_content,
                complexity,
                homopolymer,
                structure,
                total,
            },
        ))
    }
}
