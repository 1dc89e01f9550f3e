//! Genetic alphabets over which frequencies are defined.

use std::{fmt, str::FromStr};

pub mod code;
pub use code::{genetic_code, GeneticCode};

/// Nucleotides in canonical order.
pub const NUCLEOTIDES: [&str; 4] = ["A", "C", "G", "T"];

/// Amino acids in canonical (alphabetical one-letter) order.
pub const AMINO_ACIDS: [&str; 20] = [
    "A", "C", "D", "E", "F", "G", "H", "I", "K", "L", "M", "N", "P", "Q", "R", "S", "T", "V", "W",
    "Y",
];

/// Number of positions in a codon.
pub const CODON_POSITIONS: usize = 3;

/// A genetic alphabet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Alphabet {
    /// The four nucleotides.
    Nucleotide,
    /// The twenty amino acids.
    AminoAcid,
    /// The 61 sense codons of the standard genetic code.
    Codon,
    /// The four nucleotides, separately for each of the three codon positions.
    PositionalNucleotide,
}

impl Alphabet {
    /// All alphabets.
    pub const ALL: [Alphabet; 4] = [
        Alphabet::Nucleotide,
        Alphabet::AminoAcid,
        Alphabet::Codon,
        Alphabet::PositionalNucleotide,
    ];

    /// Returns the number of states in a single row of the alphabet.
    pub fn size(&self) -> usize {
        match self {
            Alphabet::Nucleotide | Alphabet::PositionalNucleotide => NUCLEOTIDES.len(),
            Alphabet::AminoAcid => AMINO_ACIDS.len(),
            Alphabet::Codon => code::CODONS.len(),
        }
    }

    /// Returns the number of independent rows.
    ///
    /// This is three for positional nucleotides, and one otherwise.
    pub fn rows(&self) -> usize {
        match self {
            Alphabet::PositionalNucleotide => CODON_POSITIONS,
            _ => 1,
        }
    }

    /// Returns the total number of frequencies over all rows.
    pub fn elements(&self) -> usize {
        self.size() * self.rows()
    }

    /// Returns the number of characters in a symbol of the alphabet.
    pub fn symbol_len(&self) -> usize {
        match self {
            Alphabet::Codon => CODON_POSITIONS,
            _ => 1,
        }
    }

    /// Returns the symbols of a single row in canonical order.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            Alphabet::Nucleotide | Alphabet::PositionalNucleotide => &NUCLEOTIDES,
            Alphabet::AminoAcid => &AMINO_ACIDS,
            Alphabet::Codon => &code::CODONS,
        }
    }

    /// Returns the index of a symbol within a row, if it belongs to the alphabet.
    ///
    /// Lookup is case-insensitive.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        match (self, symbol.as_bytes()) {
            (Alphabet::Nucleotide | Alphabet::PositionalNucleotide, &[b]) => nucleotide_index(b),
            (Alphabet::AminoAcid, &[b]) => amino_acid_index(b),
            (Alphabet::Codon, codon) => genetic_code().sense_index(codon),
            _ => None,
        }
    }

    /// Returns true if the byte may occur in sequences counted over this alphabet.
    pub(crate) fn is_valid_byte(&self, b: u8) -> bool {
        match self {
            Alphabet::AminoAcid => amino_acid_index(b).is_some(),
            _ => nucleotide_index(b).is_some(),
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Alphabet::Nucleotide => 0,
            Alphabet::AminoAcid => 1,
            Alphabet::Codon => 2,
            Alphabet::PositionalNucleotide => 3,
        }
    }
}

/// Maps a nucleotide byte to its canonical index.
pub fn nucleotide_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Maps an amino acid byte to its canonical index.
pub fn amino_acid_index(b: u8) -> Option<usize> {
    let b = b.to_ascii_uppercase();
    AMINO_ACIDS.iter().position(|aa| aa.as_bytes()[0] == b)
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alphabet::Nucleotide => "nucleotide",
            Alphabet::AminoAcid => "amino acid",
            Alphabet::Codon => "codon",
            Alphabet::PositionalNucleotide => "positional nucleotide",
        })
    }
}

impl FromStr for Alphabet {
    type Err = ParseAlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nuc" | "nucleotide" => Ok(Alphabet::Nucleotide),
            "amino" | "aa" | "amino-acid" | "aminoacid" => Ok(Alphabet::AminoAcid),
            "codon" => Ok(Alphabet::Codon),
            "posnuc" | "positional" | "positional-nucleotide" => {
                Ok(Alphabet::PositionalNucleotide)
            }
            _ => Err(ParseAlphabetError(String::from(s))),
        }
    }
}

/// An error associated with parsing an alphabet name.
#[derive(Debug)]
pub struct ParseAlphabetError(String);

impl fmt::Display for ParseAlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown alphabet '{}' (expected one of 'nuc', 'amino', 'codon', 'posNuc')",
            self.0
        )
    }
}

impl std::error::Error for ParseAlphabetError {}
