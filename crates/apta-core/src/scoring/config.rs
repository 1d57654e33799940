use super::structure::StructureKind;
use crate::core::vocabulary::NucleotideVocabulary;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Missing weight for loss term '{0}'")]
    MissingWeight(&'static str),
    #[error("Weight for loss term '{term}' must be non-negative, got {value}")]
    NegativeWeight { term: &'static str, value: f64 },
}

/// Per-term weights for the aggregated design loss, keyed by term name.
///
/// A requested term with no entry is a configuration error surfaced by
/// [`LossWeights::require`] rather than silently defaulted, so a partial
/// weight table supplied by a caller fails fast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LossWeights(HashMap<String, f64>);

impl Default for LossWeights {
    fn default() -> Self {
        let mut weights = HashMap::new();
        weights.insert("gc_content".to_string(), 0.1);
        weights.insert("complexity".to_string(), 0.2);
        weights.insert("homopolymer".to_string(), 0.3);
        weights.insert("structure".to_string(), 0.15);
        Self(weights)
    }
}

impl LossWeights {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn set(&mut self, term: impl Into<String>, weight: f64) {
        self.0.insert(term.into(), weight);
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.0.get(term).copied()
    }

    pub fn require(&self, term: &'static str) -> Result<f64, ScoringError> {
        let weight = self
            .0
            .get(term)
            .copied()
            .ok_or(ScoringError::MissingWeight(term))?;
        if weight < 0.0 {
            return Err(ScoringError::NegativeWeight {
                term,
                value: weight,
            });
        }
        Ok(weight)
    }
}

fn default_target_gc() -> f64 {
    0.5
}

fn default_max_run() -> usize {
    4
}

/// Immutable per-session configuration for the aggregated design loss.
///
/// Built once (programmatically or via [`ScoringConfig::load`]) and shared by
/// reference across evaluations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub vocabulary: NucleotideVocabulary,
    #[serde(default = "default_target_gc")]
    pub target_gc: f64,
    #[serde(default = "default_max_run")]
    pub max_run: usize,
    #[serde(default)]
    pub structure: Option<StructureKind>,
    #[serde(default)]
    pub weights: LossWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            vocabulary: NucleotideVocabulary::default(),
            target_gc: default_target_gc(),
            max_run: default_max_run(),
            structure: None,
            weights: LossWeights::default(),
        }
    }
}

impl ScoringConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_weights_match_the_reference_calibration() {
        let weights = LossWeights::default();
        assert_eq!(weights.get("gc_content"), Some(0.1));
        assert_eq!(weights.get("complexity"), Some(0.2));
        assert_eq!(weights.get("homopolymer"), Some(0.3));
        assert_eq!(weights.get("structure"), Some(0.15));
    }

    #[test]
    fn require_reports_a_missing_term() {
        let weights = LossWeights::empty();
        assert_eq!(
            weights.require("gc_content"),
            Err(ScoringError::MissingWeight("gc_content"))
        );
    }

    #[test]
    fn require_rejects_negative_weights() {
        let mut weights = LossWeights::empty();
        weights.set("complexity", -0.5);
        assert!(matches!(
            weights.require("complexity"),
            Err(ScoringError::NegativeWeight {
                term: "complexity",
                ..
            })
        ));
    }

    #[test]
    fn set_overrides_an_existing_weight() {
        let mut weights = LossWeights::default();
        weights.set("homopolymer", 0.9);
        assert_eq!(weights.require("homopolymer"), Ok(0.9));
    }

    #[test]
    fn empty_config_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "").unwrap();
        let config = ScoringConfig::load(file.path()).unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn config_file_overrides_selected_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "target_gc = 0.45\nmax_run = 3\nstructure = \"g_quadruplex\"\n\n[weights]\ngc_content = 0.25\n"
        )
        .unwrap();
        let config = ScoringConfig::load(file.path()).unwrap();
        assert_eq!(config.target_gc, 0.45);
        assert_eq!(config.max_run, 3);
        assert_eq!(config.structure, Some(StructureKind::GQuadruplex));
        assert_eq!(config.weights.get("gc_content"), Some(0.25));
        // A partial table stays partial; missing terms fail at evaluation.
        assert_eq!(config.weights.get("complexity"), None);
    }

    #[test]
    fn config_file_can_inject_a_vocabulary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[vocabulary]\nrna_a = 0\nrna_g = 1\nrna_c = 2\nrna_u = 3\ndna_a = 4\ndna_g = 5\ndna_c = 6\ndna_t = 7\n"
        )
        .unwrap();
        let config = ScoringConfig::load(file.path()).unwrap();
        assert_eq!(config.vocabulary.rna_g, 1);
        assert_eq!(config.vocabulary.dna_t, 7);
        assert_eq!(config.vocabulary.rna_n, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "target_gc = 0.5\nunknown_knob = 1\n").unwrap();
        let result = ScoringConfig::load(file.path());
        assert!(matches!(result, Err(ConfigLoadError::Toml { .. })));
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let result = ScoringConfig::load(Path::new("/nonexistent/aptamer.toml"));
        assert!(matches!(result, Err(ConfigLoadError::Io { .. })));
    }
}
