//! # Scoring Module
//!
//! This module implements the differentiable loss engine for aptamer design:
//! per-criterion soft scoring functions over `[batch, position, vocabulary]`
//! probability tensors, and the aggregator that combines them into one
//! optimization objective with a per-term breakdown.
//!
//! ## Overview
//!
//! Every term is a smooth function of the per-position nucleotide
//! probabilities, so an upstream gradient-based design loop can use the
//! aggregate as its objective rather than as a post-hoc filter. Terms share
//! the RNA/DNA-agnostic vocabulary handling of
//! [`crate::core::vocabulary::NucleotideVocabulary`] and never branch on a
//! decoded identity.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Loss weights, targets, and the
//!   session-level scoring configuration with TOML loading
//! - **Composition Terms** ([`composition`]) - GC-content and
//!   sequence-complexity losses over the full tensor
//! - **Local-Pattern Term** ([`repeats`]) - Homopolymer penalty from pairwise
//!   position similarity
//! - **Structural Proxies** ([`structure`]) - Hairpin and G-quadruplex
//!   propensity losses over terminal windows and the full sequence
//! - **Aggregation** ([`aggregator`]) - Weighted combination into a scalar
//!   plus diagnostic breakdown

pub mod aggregator;
pub mod composition;
pub mod config;
pub mod repeats;
pub mod structure;
