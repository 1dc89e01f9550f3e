//! The standard genetic code.
//!
//! The catalog is built once per process and never mutated afterwards.

use std::sync::OnceLock;

use super::{amino_acid_index, nucleotide_index, AMINO_ACIDS};

/// Sense codons in canonical (lexicographic ACGT) order.
pub const CODONS: [&str; 61] = [
    "AAA", "AAC", "AAG", "AAT", "ACA", "ACC", "ACG", "ACT", "AGA", "AGC", "AGG", "AGT", "ATA",
    "ATC", "ATG", "ATT", "CAA", "CAC", "CAG", "CAT", "CCA", "CCC", "CCG", "CCT", "CGA", "CGC",
    "CGG", "CGT", "CTA", "CTC", "CTG", "CTT", "GAA", "GAC", "GAG", "GAT", "GCA", "GCC", "GCG",
    "GCT", "GGA", "GGC", "GGG", "GGT", "GTA", "GTC", "GTG", "GTT", "TAC", "TAT", "TCA", "TCC",
    "TCG", "TCT", "TGC", "TGG", "TGT", "TTA", "TTC", "TTG", "TTT",
];

/// Stop codons of the standard genetic code.
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// One-letter translation of each codon in [`CODONS`].
const TRANSLATION: &[u8; 61] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVVYYSSSSCWCLFLF";

/// Returns the process-wide standard genetic code.
pub fn genetic_code() -> &'static GeneticCode {
    static GENETIC_CODE: OnceLock<GeneticCode> = OnceLock::new();

    GENETIC_CODE.get_or_init(GeneticCode::standard)
}

/// A genetic code relating codons to amino acids.
#[derive(Clone, Debug)]
pub struct GeneticCode {
    // Indexed by the 64-codon index, giving the index among sense codons
    sense: [Option<usize>; 64],
    translation: [usize; 61],
    synonyms: Vec<Vec<usize>>,
}

impl GeneticCode {
    fn standard() -> Self {
        let mut sense = [None; 64];
        let mut translation = [0; 61];
        let mut synonyms = vec![Vec::new(); AMINO_ACIDS.len()];

        let entries = CODONS.iter().zip(TRANSLATION.iter()).filter_map(|(codon, &aa)| {
            Some((full_index(codon.as_bytes())?, amino_acid_index(aa)?))
        });

        for (i, (full, aa)) in entries.enumerate() {
            sense[full] = Some(i);
            translation[i] = aa;
            synonyms[aa].push(i);
        }

        Self {
            sense,
            translation,
            synonyms,
        }
    }

    /// Returns the index of the codon among sense codons.
    ///
    /// Returns `None` for stop codons and anything that is not a codon.
    pub fn sense_index(&self, codon: &[u8]) -> Option<usize> {
        full_index(codon).and_then(|i| self.sense[i])
    }

    /// Returns true if the codon is a stop codon.
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        full_index(codon).map_or(false, |i| self.sense[i].is_none())
    }

    /// Returns the amino acid index encoded by the sense codon with the provided index.
    pub fn amino_acid(&self, codon: usize) -> usize {
        self.translation[codon]
    }

    /// Returns the indices of all sense codons encoding the provided amino acid index.
    pub fn synonyms(&self, amino_acid: usize) -> &[usize] {
        &self.synonyms[amino_acid]
    }
}

/// Maps a codon to an index in [0, 64).
fn full_index(codon: &[u8]) -> Option<usize> {
    match codon {
        &[b1, b2, b3] => {
            Some(nucleotide_index(b1)? * 16 + nucleotide_index(b2)? * 4 + nucleotide_index(b3)?)
        }
        _ => None,
    }
}
