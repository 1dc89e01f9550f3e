//! Errors associated with computing frequencies.

use std::{fmt, io, path::PathBuf};

use crate::{
    alphabet::{genetic_code, Alphabet},
    empirical,
};

/// An error associated with computing frequencies.
///
/// None of these are transient: each reflects either an invalid configuration, invalid input
/// data, or (for [`Error::ArithmeticConsistency`]) an internal bug.
#[derive(Debug)]
pub enum Error {
    /// The output alphabet cannot be produced from the basis alphabet.
    IncompatibleAlphabet {
        /// The basis alphabet.
        basis: Alphabet,
        /// The requested output alphabet.
        output: Alphabet,
    },
    /// The constraint fraction lies outside (0, 1].
    InvalidConstraint {
        /// The provided constraint.
        constraint: f64,
    },
    /// A constraint was requested for positional nucleotide frequencies.
    PositionalConstraint,
    /// User-supplied or sequence input has the wrong shape.
    MalformedInput(Malformed),
    /// No usable symbols remained after filtering input sequences.
    EmptyInput {
        /// The alphabet being counted.
        alphabet: Alphabet,
    },
    /// A sequence contains a symbol outside the expected alphabet, or an uncountable stop codon.
    NonCanonicalSymbol {
        /// The offending symbol.
        symbol: String,
        /// The alphabet being counted.
        alphabet: Alphabet,
    },
    /// Constraint relaxation is impossible for the provided frequencies.
    DegenerateDistribution(Degenerate),
    /// The empirical model is not recognized.
    UnknownModel {
        /// The requested model name.
        name: String,
    },
    /// Computed frequencies do not sum to one.
    ArithmeticConsistency {
        /// The alphabet of the frequencies.
        alphabet: Alphabet,
        /// The first row failing the check.
        row: usize,
        /// The sum of that row.
        sum: f64,
    },
    /// Failed to write frequencies to the requested destination.
    Export {
        /// The destination path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// I/O error.
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Malformed> for Error {
    fn from(e: Malformed) -> Self {
        Self::MalformedInput(e)
    }
}

impl From<Degenerate> for Error {
    fn from(e: Degenerate) -> Self {
        Self::DegenerateDistribution(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IncompatibleAlphabet { basis, output } => write!(
                f,
                "cannot calculate {output} frequencies based on {basis} frequencies"
            ),
            Error::InvalidConstraint { constraint } => {
                write!(f, "constraint {constraint} must lie in the interval (0, 1]")
            }
            Error::PositionalConstraint => f.write_str(
                "frequency constraints cannot be used with positional nucleotide frequencies",
            ),
            Error::MalformedInput(e) => write!(f, "malformed input: {e}"),
            Error::EmptyInput { alphabet } => write!(
                f,
                "no {alphabet} symbols found from which to obtain frequencies"
            ),
            Error::NonCanonicalSymbol { symbol, alphabet } => {
                if *alphabet == Alphabet::Codon && genetic_code().is_stop(symbol.as_bytes()) {
                    write!(f, "found stop codon '{symbol}' in sequences")
                } else {
                    write!(f, "found non-canonical {alphabet} symbol '{symbol}' in sequences")
                }
            }
            Error::DegenerateDistribution(e) => write!(f, "cannot relax frequencies: {e}"),
            Error::UnknownModel { name } => {
                if empirical::CODON_MODELS.contains(&name.to_ascii_lowercase().as_str()) {
                    write!(
                        f,
                        "no frequency table registered for empirical codon model '{name}'"
                    )
                } else {
                    write!(f, "unknown empirical model '{name}'")
                }
            }
            Error::ArithmeticConsistency { alphabet, row, sum } => write!(
                f,
                "{alphabet} frequencies (row {row}) sum to {sum}, not 1; this is a bug"
            ),
            Error::Export { path, source } => {
                write!(f, "failed to save frequencies to '{}': {source}", path.display())
            }
            Error::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Export { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// A description of malformed input.
#[derive(Clone, Debug, PartialEq)]
pub enum Malformed {
    /// A dictionary key has the wrong number of characters.
    KeyLength {
        /// The key.
        key: String,
        /// The expected number of characters.
        expected: usize,
    },
    /// A dictionary key is not a symbol of the alphabet.
    UnknownSymbol {
        /// The key.
        symbol: String,
        /// The expected alphabet.
        alphabet: Alphabet,
    },
    /// Two dictionary keys name the same symbol.
    DuplicateSymbol {
        /// The later of the two keys.
        symbol: String,
    },
    /// A dictionary value has the wrong shape.
    ValueShape {
        /// The key of the value.
        symbol: String,
        /// The expected number of values.
        expected: usize,
    },
    /// A dictionary value is negative or not finite.
    InvalidValue {
        /// The key of the value.
        symbol: String,
        /// The value.
        value: f64,
    },
    /// User-supplied frequencies do not sum to one.
    Sum {
        /// The row failing the check.
        row: usize,
        /// The sum of that row.
        sum: f64,
    },
    /// A sequence length is not a multiple of three for codon data.
    NotCodons {
        /// The index of the sequence.
        record: usize,
        /// The length of the sequence.
        length: usize,
    },
    /// Sequences differ in length where an alignment is required.
    UnequalLengths {
        /// The index of the sequence.
        record: usize,
        /// The length of the first sequence.
        expected: usize,
        /// The length of the offending sequence.
        actual: usize,
    },
    /// A requested column lies beyond the alignment.
    ColumnOutOfBounds {
        /// The requested column.
        column: usize,
        /// The number of columns in the alignment.
        columns: usize,
    },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::KeyLength { key, expected } => write!(
                f,
                "key '{key}' should have {expected} character(s) for this alphabet"
            ),
            Malformed::UnknownSymbol { symbol, alphabet } => {
                write!(f, "'{symbol}' is not a {alphabet} symbol")
            }
            Malformed::DuplicateSymbol { symbol } => {
                write!(f, "symbol '{symbol}' is given more than once")
            }
            Malformed::ValueShape { symbol, expected } => write!(
                f,
                "value for '{symbol}' should consist of {expected} frequencies"
            ),
            Malformed::InvalidValue { symbol, value } => {
                write!(f, "invalid frequency {value} for '{symbol}'")
            }
            Malformed::Sum { row, sum } => {
                write!(f, "provided frequencies (row {row}) sum to {sum}, not 1")
            }
            Malformed::NotCodons { record, length } => write!(
                f,
                "sequence {record} has length {length}, which is not a multiple of three"
            ),
            Malformed::UnequalLengths {
                record,
                expected,
                actual,
            } => write!(
                f,
                "sequence {record} has length {actual} while the first has length {expected}; \
                columns can only be selected from an alignment"
            ),
            Malformed::ColumnOutOfBounds { column, columns } => write!(
                f,
                "column {column} is out of bounds for alignment with {columns} columns"
            ),
        }
    }
}

/// A reason why constraint relaxation is impossible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Degenerate {
    /// All frequencies are zero.
    AllZero,
    /// No frequencies are zero, so there is nothing to relax into.
    NoZeroStates,
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Degenerate::AllZero => "all state frequencies are zero",
            Degenerate::NoZeroStates => "no state frequencies are zero",
        })
    }
}
