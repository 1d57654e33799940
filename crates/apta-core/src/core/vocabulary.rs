use ndarray::ArrayView1;
use serde::Deserialize;

/// Maps semantic nucleotide identities to integer columns of the probability
/// tensor's vocabulary axis.
///
/// RNA and DNA bases share one vocabulary tensor and are disambiguated purely
/// by index ranges, so every index is carried explicitly instead of being
/// hard-coded at the use sites. The map is built once per design session and
/// shared by reference across all loss evaluations; it is never mutated.
///
/// Indexing past the vocabulary axis of a tensor is a caller configuration
/// error. The scoring functions do not validate vocabulary extents and will
/// panic on an out-of-range column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NucleotideVocabulary {
    pub rna_a: usize,
    pub rna_g: usize,
    pub rna_c: usize,
    pub rna_u: usize,
    /// Ambiguity column for RNA, if the tokenizer defines one.
    #[serde(default)]
    pub rna_n: Option<usize>,
    pub dna_a: usize,
    pub dna_g: usize,
    pub dna_c: usize,
    pub dna_t: usize,
    /// Ambiguity column for DNA, if the tokenizer defines one.
    #[serde(default)]
    pub dna_n: Option<usize>,
}

impl Default for NucleotideVocabulary {
    /// Index layout of the reference design tokenizer, where nucleotide
    /// tokens follow the amino-acid block.
    fn default() -> Self {
        Self {
            rna_a: 24,
            rna_g: 25,
            rna_c: 26,
            rna_u: 27,
            rna_n: Some(28),
            dna_a: 29,
            dna_g: 30,
            dna_c: 31,
            dna_t: 32,
            dna_n: Some(33),
        }
    }
}

impl NucleotideVocabulary {
    /// Probability mass on G or C for one position, taking the element-wise
    /// maximum of the RNA-indexed and DNA-indexed sums so callers never have
    /// to declare which flavor the tensor holds.
    #[inline]
    pub fn gc_mass(&self, dist: ArrayView1<f64>) -> f64 {
        let rna = dist[self.rna_g] + dist[self.rna_c];
        let dna = dist[self.dna_g] + dist[self.dna_c];
        rna.max(dna)
    }

    /// Probability mass on guanine for one position, maximum of the RNA and
    /// DNA columns.
    #[inline]
    pub fn g_mass(&self, dist: ArrayView1<f64>) -> f64 {
        dist[self.rna_g].max(dist[self.dna_g])
    }
}
