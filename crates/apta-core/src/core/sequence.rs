use phf::{Map, Set, phf_map, phf_set};
use std::collections::BTreeSet;

static VALID_NUCLEOTIDES: Set<char> = phf_set! {'A', 'C', 'G', 'T', 'U'};

static COMPLEMENTS: Map<char, char> = phf_map! {
    'A' => 'T',
    'C' => 'G',
    'G' => 'C',
    'T' => 'A',
    'U' => 'A',
};

const WALLACE_RULE_LIMIT: usize = 14;
const GC_LOWER_BOUND: f64 = 0.3;
const GC_UPPER_BOUND: f64 = 0.7;
const MAX_HOMOPOLYMER_RUN: usize = 6;
const MAX_REPEAT_PERIOD: usize = 5;

/// Ionic conditions for the melting-temperature estimate, in millimolar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltConditions {
    pub na_mm: f64,
    pub mg_mm: f64,
}

impl Default for SaltConditions {
    fn default() -> Self {
        Self {
            na_mm: 50.0,
            mg_mm: 2.0,
        }
    }
}

/// Acceptable length bounds for candidate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self { min: 20, max: 100 }
    }
}

/// Advisory outcome of a sequence validation pass. Failures are reported
/// here, never raised; the message names the first check that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceValidation {
    pub is_valid: bool,
    pub message: String,
}

impl SequenceValidation {
    fn pass() -> Self {
        Self {
            is_valid: true,
            message: "Sequence passed validation".to_string(),
        }
    }

    fn fail(message: String) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

/// Fraction of G/C characters, case-insensitive. An empty sequence has a GC
/// fraction of 0.0.
pub fn gc_fraction(sequence: &str) -> f64 {
    let total = sequence.chars().count();
    if total == 0 {
        return 0.0;
    }
    let gc = sequence
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
        .count();
    gc as f64 / total as f64
}

/// Watson-Crick complement of a single base, DNA-flavored (U pairs as T
/// does). Anything outside the nucleotide alphabet maps to N.
#[inline]
pub fn complement(base: char) -> char {
    COMPLEMENTS
        .get(&base.to_ascii_uppercase())
        .copied()
        .unwrap_or('N')
}

/// Reverse complement of a sequence under [`complement`]'s conventions.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement).collect()
}

/// Estimates the melting temperature in Celsius.
///
/// Sequences below 14 bases use the Wallace rule, Tm = 2(A+T+U) + 4(G+C).
/// Longer sequences use the salt-adjusted approximation
/// 81.5 + 16.6 log10(Na) + 0.41 GC% - 675/length, with a further
/// 2 log10(Mg) shift when magnesium is present. Both branches are coarse
/// estimates, not nearest-neighbor thermodynamics.
pub fn melting_temperature(sequence: &str, salt: &SaltConditions) -> f64 {
    let sequence = sequence.to_uppercase();
    let length = sequence.chars().count();

    let mut tm = if length < WALLACE_RULE_LIMIT {
        let at = sequence
            .chars()
            .filter(|c| matches!(c, 'A' | 'T' | 'U'))
            .count();
        let gc = sequence.chars().filter(|c| matches!(c, 'G' | 'C')).count();
        (2 * at + 4 * gc) as f64
    } else {
        81.5 + 16.6 * (salt.na_mm / 1000.0).log10() + 0.41 * (gc_fraction(&sequence) * 100.0)
            - 675.0 / length as f64
    };

    if salt.mg_mm > 0.0 {
        tm += salt.mg_mm.log10() * 2.0;
    }

    tm
}

/// Checks a decoded candidate against manufacturability rules, in order:
/// length bounds, alphabet, GC range, homopolymer runs, short tandem
/// repeats. The first failing check determines the reported reason.
pub fn validate_sequence(sequence: &str, limits: &LengthLimits) -> SequenceValidation {
    let sequence = sequence.to_uppercase();
    let length = sequence.chars().count();

    if length < limits.min {
        return SequenceValidation::fail(format!(
            "Sequence too short ({length} < {})",
            limits.min
        ));
    }
    if length > limits.max {
        return SequenceValidation::fail(format!("Sequence too long ({length} > {})", limits.max));
    }

    let invalid: BTreeSet<char> = sequence
        .chars()
        .filter(|c| !VALID_NUCLEOTIDES.contains(c))
        .collect();
    if !invalid.is_empty() {
        let listed = invalid
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return SequenceValidation::fail(format!("Invalid nucleotides: {listed}"));
    }

    let gc = gc_fraction(&sequence);
    if !(GC_LOWER_BOUND..=GC_UPPER_BOUND).contains(&gc) {
        return SequenceValidation::fail(format!(
            "Extreme GC content: {:.1}% (should be 30-70%)",
            gc * 100.0
        ));
    }

    for base in ['A', 'C', 'G', 'U'] {
        let run: String = std::iter::repeat(base).take(MAX_HOMOPOLYMER_RUN).collect();
        if sequence.contains(&run) {
            return SequenceValidation::fail(format!("Long homopolymer detected: {run}"));
        }
    }

    // A repeat unit tiling the sequence shows up in the doubled sequence at
    // every phase, which makes the containment check wrap-around.
    let doubled = format!("{sequence}{sequence}");
    for period in 2..=MAX_REPEAT_PERIOD {
        let unit: String = sequence.chars().take(period).collect();
        let copies = length / period + 1;
        if doubled.contains(&unit.repeat(copies)) {
            return SequenceValidation::fail(format!("Simple repeat detected: {unit}"));
        }
    }

    SequenceValidation::pass()
}
