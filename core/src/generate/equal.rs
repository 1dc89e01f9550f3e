//! Equal frequencies.

use crate::{alphabet::Alphabet, Frequencies};

/// Returns equal frequencies for every state.
///
/// For positional nucleotides, each codon position independently gets equal frequencies.
pub fn generate(alphabet: Alphabet) -> Frequencies {
    Frequencies::from_elem(alphabet, 1.0 / alphabet.size() as f64)
}
