//! # Core Module
//!
//! This module provides the foundational building blocks for nucleic-acid
//! candidate scoring in AptaDesign: the vocabulary mapping shared by every
//! loss term, the probability-space transforms, and the discrete utilities
//! applied to realized sequences.
//!
//! ## Overview
//!
//! Everything here is a stateless data model or a pure function. The
//! differentiable scoring layer consumes these primitives; nothing in this
//! module depends on the scoring layer.
//!
//! ## Architecture
//!
//! - **Vocabulary Mapping** ([`vocabulary`]) - Injectable index map from
//!   semantic RNA/DNA bases to columns of the shared vocabulary tensor
//! - **Distributional Transforms** ([`distribution`]) - Numerically stable
//!   softmax and entropy primitives over probability lanes
//! - **Sequence Utilities** ([`sequence`]) - GC fraction, melting-temperature
//!   estimation, validation, and complement helpers for decoded candidates

pub mod distribution;
pub mod sequence;
pub mod vocabulary;
