//! Conversions of frequencies between alphabets.
//!
//! Every conversion is a pure function of already populated source frequencies, and checks that
//! the converted frequencies sum to one before returning them.

use crate::{
    alphabet::{genetic_code, nucleotide_index, Alphabet, CODON_POSITIONS},
    Error,
};

use super::Frequencies;

/// Converts amino acid frequencies to codon frequencies.
///
/// Each amino acid frequency is shared equally among its synonymous codons.
pub fn amino_to_codon(amino: &Frequencies) -> Result<Frequencies, Error> {
    expect_alphabet(amino, Alphabet::AminoAcid, Alphabet::Codon)?;

    let code = genetic_code();
    let mut codon = Frequencies::from_zeros(Alphabet::Codon);

    for (i, v) in codon.as_mut_slice().iter_mut().enumerate() {
        let aa = code.amino_acid(i);
        *v = amino[aa] / code.synonyms(aa).len() as f64;
    }

    codon.into_validated()
}

/// Converts codon frequencies to amino acid frequencies.
///
/// Each amino acid frequency is the sum of its synonymous codon frequencies.
pub fn codon_to_amino(codon: &Frequencies) -> Result<Frequencies, Error> {
    expect_alphabet(codon, Alphabet::Codon, Alphabet::AminoAcid)?;

    let code = genetic_code();
    let mut amino = Frequencies::from_zeros(Alphabet::AminoAcid);

    for (aa, v) in amino.as_mut_slice().iter_mut().enumerate() {
        *v = code.synonyms(aa).iter().map(|&i| codon[i]).sum();
    }

    amino.into_validated()
}

/// Converts codon frequencies to global nucleotide frequencies.
///
/// Each codon contributes its frequency weighted by the fraction of its three positions taken
/// by each nucleotide.
pub fn codon_to_nucleotide(codon: &Frequencies) -> Result<Frequencies, Error> {
    expect_alphabet(codon, Alphabet::Codon, Alphabet::Nucleotide)?;

    let mut nucleotide = Frequencies::from_zeros(Alphabet::Nucleotide);

    for_each_codon_base(codon, |_, base, freq| {
        nucleotide.as_mut_slice()[base] += freq / CODON_POSITIONS as f64;
    });

    nucleotide.into_validated()
}

/// Converts codon frequencies to positional nucleotide frequencies.
///
/// The frequency of a nucleotide at a position is the summed frequency of all codons with that
/// nucleotide at that position.
pub fn codon_to_positional(codon: &Frequencies) -> Result<Frequencies, Error> {
    expect_alphabet(codon, Alphabet::Codon, Alphabet::PositionalNucleotide)?;

    let mut positional = Frequencies::from_zeros(Alphabet::PositionalNucleotide);
    let size = Alphabet::PositionalNucleotide.size();

    for_each_codon_base(codon, |position, base, freq| {
        positional.as_mut_slice()[position * size + base] += freq;
    });

    positional.into_validated()
}

/// Converts amino acid frequencies to global nucleotide frequencies via codon frequencies.
pub fn amino_to_nucleotide(amino: &Frequencies) -> Result<Frequencies, Error> {
    amino_to_codon(amino).and_then(|codon| codon_to_nucleotide(&codon))
}

/// Converts amino acid frequencies to positional nucleotide frequencies via codon frequencies.
pub fn amino_to_positional(amino: &Frequencies) -> Result<Frequencies, Error> {
    amino_to_codon(amino).and_then(|codon| codon_to_positional(&codon))
}

/// Converts global nucleotide frequencies to positional nucleotide frequencies.
///
/// The global frequencies are used for all three positions.
pub fn nucleotide_to_positional(nucleotide: &Frequencies) -> Result<Frequencies, Error> {
    expect_alphabet(
        nucleotide,
        Alphabet::Nucleotide,
        Alphabet::PositionalNucleotide,
    )?;

    Frequencies {
        alphabet: Alphabet::PositionalNucleotide,
        values: nucleotide.as_slice().repeat(CODON_POSITIONS),
    }
    .into_validated()
}

/// Converts frequencies into the requested alphabet.
///
/// Frequencies already in the requested alphabet are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::IncompatibleAlphabet`] if there is no conversion between the alphabets.
pub fn convert(from: &Frequencies, to: Alphabet) -> Result<Frequencies, Error> {
    match (from.alphabet(), to) {
        (from_alphabet, to) if from_alphabet == to => Ok(from.clone()),
        (Alphabet::AminoAcid, Alphabet::Codon) => amino_to_codon(from),
        (Alphabet::AminoAcid, Alphabet::Nucleotide) => amino_to_nucleotide(from),
        (Alphabet::AminoAcid, Alphabet::PositionalNucleotide) => amino_to_positional(from),
        (Alphabet::Codon, Alphabet::AminoAcid) => codon_to_amino(from),
        (Alphabet::Codon, Alphabet::Nucleotide) => codon_to_nucleotide(from),
        (Alphabet::Codon, Alphabet::PositionalNucleotide) => codon_to_positional(from),
        (Alphabet::Nucleotide, Alphabet::PositionalNucleotide) => nucleotide_to_positional(from),
        (basis, output) => Err(Error::IncompatibleAlphabet { basis, output }),
    }
}

fn expect_alphabet(freqs: &Frequencies, from: Alphabet, to: Alphabet) -> Result<(), Error> {
    if freqs.alphabet() == from {
        Ok(())
    } else {
        Err(Error::IncompatibleAlphabet {
            basis: freqs.alphabet(),
            output: to,
        })
    }
}

/// Calls `f(position, base, frequency)` for each base of each codon.
fn for_each_codon_base<F>(codon: &Frequencies, mut f: F)
where
    F: FnMut(usize, usize, f64),
{
    for (symbol, &freq) in Alphabet::Codon.symbols().iter().zip(codon.as_slice()) {
        for (position, &b) in symbol.as_bytes().iter().enumerate() {
            // Codon symbols consist of canonical nucleotides only
            if let Some(base) = nucleotide_index(b) {
                f(position, base, freq);
            }
        }
    }
}
