//! User-supplied frequencies.

use std::{fmt, num::ParseFloatError, str::FromStr};

use indexmap::IndexMap;

use crate::{
    alphabet::{Alphabet, CODON_POSITIONS},
    error::Malformed,
    frequencies::EPSILON,
    Error, Frequencies,
};

/// A user-supplied frequency value for a single symbol.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single frequency.
    Scalar(f64),
    /// One frequency per codon position, for positional nucleotides.
    Positions(Vec<f64>),
}

impl Value {
    fn as_slice(&self) -> &[f64] {
        match self {
            Value::Scalar(v) => std::slice::from_ref(v),
            Value::Positions(vs) => vs,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<[f64; CODON_POSITIONS]> for Value {
    fn from(vs: [f64; CODON_POSITIONS]) -> Self {
        Value::Positions(vs.to_vec())
    }
}

impl FromStr for Value {
    type Err = ParseValueError;

    /// Parses either a single frequency, or frequencies separated by '/'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            s.split('/')
                .map(|v| v.trim().parse())
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Positions)
                .map_err(ParseValueError)
        } else {
            s.trim().parse().map(Value::Scalar).map_err(ParseValueError)
        }
    }
}

/// An error associated with parsing a user-supplied frequency value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseValueError(ParseFloatError);

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse frequency: {}", self.0)
    }
}

impl std::error::Error for ParseValueError {}

/// A mapping from symbol to frequency supplied by the user.
///
/// Symbols not in the mapping are given frequency zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFrequencies(IndexMap<String, Value>);

impl UserFrequencies {
    /// Creates a new, empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for a symbol, returning the previous value if any.
    pub fn insert<S, V>(&mut self, symbol: S, value: V) -> Option<Value>
    where
        S: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(symbol.into(), value.into())
    }

    /// Generates frequencies over the basis alphabet from the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if a key has the wrong length or is not a symbol of the
    /// alphabet, if two keys name the same symbol ignoring case, if a value has the wrong shape or is negative, or if the frequencies do not sum
    /// to one.
    pub fn generate(&self, alphabet: Alphabet) -> Result<Frequencies, Error> {
        let mut freqs = Frequencies::from_zeros(alphabet);
        let size = alphabet.size();
        let values = freqs.as_mut_slice();
        let mut seen = vec![false; size];

        for (key, value) in self.0.iter() {
            if key.len() != alphabet.symbol_len() {
                return Err(Malformed::KeyLength {
                    key: key.clone(),
                    expected: alphabet.symbol_len(),
                }
                .into());
            }

            let index = alphabet
                .index_of(key)
                .ok_or_else(|| Malformed::UnknownSymbol {
                    symbol: key.clone(),
                    alphabet,
                })?;

            if std::mem::replace(&mut seen[index], true) {
                return Err(Malformed::DuplicateSymbol {
                    symbol: key.clone(),
                }
                .into());
            }

            let value = value.as_slice();
            if value.len() != alphabet.rows() {
                return Err(Malformed::ValueShape {
                    symbol: key.clone(),
                    expected: alphabet.rows(),
                }
                .into());
            }

            for (row, &v) in value.iter().enumerate() {
                if !v.is_finite() || v < 0.0 {
                    return Err(Malformed::InvalidValue {
                        symbol: key.clone(),
                        value: v,
                    }
                    .into());
                }

                values[row * size + index] = v;
            }
        }

        if let Some((row, sum)) = freqs
            .row_sums()
            .into_iter()
            .enumerate()
            .find(|(_, sum)| (sum - 1.0).abs() >= EPSILON)
        {
            return Err(Malformed::Sum { row, sum }.into());
        }

        Ok(freqs)
    }
}

impl<S, V> FromIterator<(S, V)> for UserFrequencies
where
    S: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
    {
        Self(
            iter.into_iter()
                .map(|(s, v)| (s.into(), v.into()))
                .collect(),
        )
    }
}
