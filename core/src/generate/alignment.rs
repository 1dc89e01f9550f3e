//! Frequencies counted from sequences.

use std::borrow::Cow;

use crate::{
    alphabet::{amino_acid_index, genetic_code, nucleotide_index, Alphabet, CODON_POSITIONS},
    error::Malformed,
    input::sequence::{self, Sequence},
    Error, Frequencies,
};

/// Policy for stop codons met while counting codons.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StopCodons {
    /// Fail with [`Error::NonCanonicalSymbol`].
    #[default]
    Reject,
    /// Skip stop codons, normalizing by the number of sense codons counted.
    Skip,
}

#[derive(Clone, Debug)]
enum Source {
    Sequences(Vec<Sequence>),
    Reader(sequence::Builder),
}

/// Frequencies counted from a set of sequences, optionally restricted to alignment columns.
#[derive(Clone, Debug)]
pub struct Alignment {
    source: Source,
    columns: Option<Vec<usize>>,
    stop_codons: StopCodons,
}

impl Alignment {
    /// Creates a new alignment from sequences read by the provided builder.
    ///
    /// Sequences are read when frequencies are generated.
    pub fn from_reader(reader: sequence::Builder) -> Self {
        Self::new(Source::Reader(reader))
    }

    /// Creates a new alignment from sequences in memory.
    pub fn from_sequences(sequences: Vec<Sequence>) -> Self {
        Self::new(Source::Sequences(sequences))
    }

    fn new(source: Source) -> Self {
        Self {
            source,
            columns: None,
            stop_codons: StopCodons::default(),
        }
    }

    /// Generates frequencies over the basis alphabet by counting symbols.
    ///
    /// Lower-case symbols are counted as upper-case, and bytes outside the alphabet (such as
    /// gaps and ambiguity codes) are discarded. For codons and positional nucleotides, columns
    /// refer to codon triplets rather than single sites.
    pub fn generate(&self, alphabet: Alphabet) -> Result<Frequencies, Error> {
        let sequences = match &self.source {
            Source::Sequences(sequences) => Cow::Borrowed(sequences),
            Source::Reader(reader) => Cow::Owned(reader.read()?),
        };

        let composite = self.composite(&sequences, alphabet)?;
        log::trace!("Counting {} {alphabet} sites", composite.len());

        count(&composite, alphabet, self.stop_codons)
    }

    /// Sets the alignment columns from which to count, indexed from zero.
    ///
    /// By default, entire sequences are counted.
    pub fn set_columns(mut self, columns: Vec<usize>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the stop codon policy.
    ///
    /// By default, stop codons are rejected.
    pub fn set_stop_codons(mut self, stop_codons: StopCodons) -> Self {
        self.stop_codons = stop_codons;
        self
    }

    fn composite(&self, sequences: &[Sequence], alphabet: Alphabet) -> Result<Vec<u8>, Error> {
        let width = site_width(alphabet);

        if width > 1 {
            if let Some((record, sequence)) = sequences
                .iter()
                .enumerate()
                .find(|(_, sequence)| sequence.len() % width != 0)
            {
                return Err(Malformed::NotCodons {
                    record,
                    length: sequence.len(),
                }
                .into());
            }
        }

        let raw = match self.columns.as_deref() {
            Some(columns) => select_columns(sequences, columns, width)?,
            None => sequences.concat(),
        };

        Ok(raw
            .into_iter()
            .map(|b| b.to_ascii_uppercase())
            .filter(|&b| alphabet.is_valid_byte(b))
            .collect())
    }
}

fn site_width(alphabet: Alphabet) -> usize {
    match alphabet {
        Alphabet::Codon | Alphabet::PositionalNucleotide => CODON_POSITIONS,
        Alphabet::Nucleotide | Alphabet::AminoAcid => 1,
    }
}

fn select_columns(
    sequences: &[Sequence],
    columns: &[usize],
    width: usize,
) -> Result<Vec<u8>, Error> {
    let expected = sequences.first().map(Vec::len).unwrap_or(0);

    if let Some((record, sequence)) = sequences
        .iter()
        .enumerate()
        .find(|(_, sequence)| sequence.len() != expected)
    {
        return Err(Malformed::UnequalLengths {
            record,
            expected,
            actual: sequence.len(),
        }
        .into());
    }

    let n = expected / width;
    let mut selected = Vec::with_capacity(columns.len() * sequences.len() * width);

    for &column in columns {
        if column >= n {
            return Err(Malformed::ColumnOutOfBounds { column, columns: n }.into());
        }

        let start = column * width;
        for sequence in sequences {
            selected.extend_from_slice(&sequence[start..start + width]);
        }
    }

    Ok(selected)
}

fn count(
    symbols: &[u8],
    alphabet: Alphabet,
    stop_codons: StopCodons,
) -> Result<Frequencies, Error> {
    let width = site_width(alphabet);

    if symbols.len() < width {
        return Err(Error::EmptyInput { alphabet });
    }

    let remainder = symbols.chunks_exact(width).remainder();
    if !remainder.is_empty() {
        return Err(Error::NonCanonicalSymbol {
            symbol: String::from_utf8_lossy(remainder).into_owned(),
            alphabet,
        });
    }

    let mut freqs = Frequencies::from_zeros(alphabet);
    let counts = freqs.as_mut_slice();

    let total = match alphabet {
        Alphabet::Nucleotide | Alphabet::AminoAcid => {
            let index = match alphabet {
                Alphabet::AminoAcid => amino_acid_index,
                _ => nucleotide_index,
            };

            for &b in symbols {
                let i = index(b).ok_or_else(|| non_canonical(&[b], alphabet))?;
                counts[i] += 1.0;
            }

            symbols.len()
        }
        Alphabet::Codon => {
            let code = genetic_code();
            let mut stops = 0;

            for codon in symbols.chunks_exact(CODON_POSITIONS) {
                match code.sense_index(codon) {
                    Some(i) => counts[i] += 1.0,
                    None if code.is_stop(codon) && stop_codons == StopCodons::Skip => stops += 1,
                    None => return Err(non_canonical(codon, alphabet)),
                }
            }

            let counted = symbols.len() / CODON_POSITIONS - stops;

            if stops > 0 {
                log::warn!(
                    "Skipped {stops} stop codon(s) in sequences, \
                    counting frequencies from the remaining {counted} codon(s)"
                );
            }
            if counted == 0 {
                return Err(Error::EmptyInput { alphabet });
            }

            counted
        }
        Alphabet::PositionalNucleotide => {
            let size = alphabet.size();

            for codon in symbols.chunks_exact(CODON_POSITIONS) {
                for (position, &b) in codon.iter().enumerate() {
                    let i = nucleotide_index(b).ok_or_else(|| non_canonical(&[b], alphabet))?;
                    counts[position * size + i] += 1.0;
                }
            }

            symbols.len() / CODON_POSITIONS
        }
    };

    let total = total as f64;
    counts.iter_mut().for_each(|count| *count /= total);

    freqs.into_validated()
}

fn non_canonical(symbol: &[u8], alphabet: Alphabet) -> Error {
    Error::NonCanonicalSymbol {
        symbol: String::from_utf8_lossy(symbol).into_owned(),
        alphabet,
    }
}
