//! Frequency vectors over genetic alphabets.

use std::{fmt, ops::Index, slice::ChunksExact};

use indexmap::IndexMap;

use crate::{alphabet::Alphabet, Error};

pub mod convert;

pub mod io;

pub mod relax;
pub use relax::relax;

/// Tolerance within which frequencies must sum to one.
///
/// Frequencies smaller than this in absolute value are considered to be zero.
pub const EPSILON: f64 = 1e-10;

/// Number of decimals kept in the codon dictionary view.
pub const DICT_PRECISION: i32 = 10;

/// Frequencies over an alphabet.
///
/// Values are stored in the canonical order of the alphabet. For positional nucleotides, the
/// three rows (one per codon position) are stored in row-major order, and each row is a
/// distribution of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Frequencies {
    alphabet: Alphabet,
    values: Vec<f64>,
}

impl Frequencies {
    /// Returns the alphabet of the frequencies.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the frequencies as a flat slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Creates new frequencies where every element has the same value.
    pub fn from_elem(alphabet: Alphabet, value: f64) -> Self {
        Self {
            alphabet,
            values: vec![value; alphabet.elements()],
        }
    }

    /// Creates new frequencies from rows, one per codon position for positional nucleotides.
    pub fn from_rows<I>(alphabet: Alphabet, rows: I) -> Result<Self, LengthError>
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        Self::new(alphabet, rows.into_iter().flatten().collect::<Vec<_>>())
    }

    /// Creates new frequencies filled with zeros.
    pub fn from_zeros(alphabet: Alphabet) -> Self {
        Self::from_elem(alphabet, 0.0)
    }

    /// Returns the frequency of a symbol, if it belongs to the alphabet.
    ///
    /// For positional nucleotides, this is the frequency at the first codon position.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.alphabet.index_of(symbol).map(|i| self.values[i])
    }

    /// Creates new frequencies, checking that the number of values matches the alphabet.
    ///
    /// No check is made that the frequencies sum to one, see [`Frequencies::validate`].
    pub fn new<V>(alphabet: Alphabet, values: V) -> Result<Self, LengthError>
    where
        Vec<f64>: From<V>,
    {
        let values = Vec::from(values);

        if values.len() == alphabet.elements() {
            Ok(Self { alphabet, values })
        } else {
            Err(LengthError {
                alphabet,
                expected: alphabet.elements(),
                actual: values.len(),
            })
        }
    }

    /// Returns the row of frequencies for a codon position.
    ///
    /// For alphabets other than positional nucleotides, only row 0 exists.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.rows().nth(row)
    }

    /// Returns an iterator over rows.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.values.chunks_exact(self.alphabet.size())
    }

    /// Returns the sum of each row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }

    /// Returns a mapping from codon to frequency rounded to ten decimals.
    ///
    /// Only defined for codon frequencies.
    pub fn to_codon_dict(&self) -> Option<IndexMap<&'static str, f64>> {
        if self.alphabet != Alphabet::Codon {
            return None;
        }

        let scale = 10f64.powi(DICT_PRECISION);

        Some(
            self.alphabet
                .symbols()
                .iter()
                .zip(self.values.iter())
                .map(|(&codon, &v)| (codon, (v * scale).round() / scale))
                .collect(),
        )
    }

    /// Checks that every row sums to one within [`EPSILON`].
    ///
    /// # Errors
    ///
    /// A failure here signals a bug in how the frequencies were generated or converted, and is
    /// reported as [`Error::ArithmeticConsistency`].
    pub fn validate(&self) -> Result<(), Error> {
        match self
            .row_sums()
            .into_iter()
            .enumerate()
            .find(|(_, sum)| (sum - 1.0).abs() >= EPSILON)
        {
            Some((row, sum)) => Err(Error::ArithmeticConsistency {
                alphabet: self.alphabet,
                row,
                sum,
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn into_validated(self) -> Result<Self, Error> {
        self.validate().map(|()| self)
    }
}

impl Index<usize> for Frequencies {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        self.values.index(index)
    }
}

impl AsRef<[f64]> for Frequencies {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// An error associated with a number of values not matching an alphabet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LengthError {
    alphabet: Alphabet,
    expected: usize,
    actual: usize,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} {} frequencies, found {}",
            self.expected, self.alphabet, self.actual
        )
    }
}

impl std::error::Error for LengthError {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::approx::ApproxEq;

    impl ApproxEq for Frequencies {
        fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
            self.alphabet == other.alphabet && self.values.approx_eq(&other.values, epsilon)
        }
    }

    #[test]
    fn test_new_wrong_length() {
        assert_eq!(
            Frequencies::new(Alphabet::AminoAcid, vec![0.5, 0.5]),
            Err(LengthError {
                alphabet: Alphabet::AminoAcid,
                expected: 20,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rows() {
        let freqs = Frequencies::from_rows(
            Alphabet::PositionalNucleotide,
            [
                vec![0.1, 0.2, 0.3, 0.4],
                vec![0.25; 4],
                vec![1.0, 0.0, 0.0, 0.0],
            ],
        )
        .unwrap();

        assert_eq!(freqs.rows().len(), 3);
        assert_eq!(freqs.row(2), Some(&[1.0, 0.0, 0.0, 0.0][..]));
        assert_eq!(freqs.row(3), None);
        assert_approx_eq!(freqs.row_sums(), vec![1.0; 3], epsilon = EPSILON);
        assert!(freqs.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_failing_row() {
        let freqs = Frequencies::from_rows(
            Alphabet::PositionalNucleotide,
            [vec![0.25; 4], vec![0.5, 0.0, 0.0, 0.0], vec![0.25; 4]],
        )
        .unwrap();

        assert!(matches!(
            freqs.validate(),
            Err(Error::ArithmeticConsistency { row: 1, .. })
        ));
    }

    #[test]
    fn test_get() {
        let freqs = Frequencies::new(Alphabet::Nucleotide, [0.1, 0.2, 0.3, 0.4]).unwrap();

        assert_eq!(freqs.get("G"), Some(0.3));
        assert_eq!(freqs.get("t"), Some(0.4));
        assert_eq!(freqs.get("U"), None);
    }

    #[test]
    fn test_codon_dict() {
        let freqs = Frequencies::from_elem(Alphabet::Codon, 1.0 / 61.0);
        let dict = freqs.to_codon_dict().unwrap();

        assert_eq!(dict.len(), 61);
        assert_eq!(dict.get_index(0), Some((&"AAA", &0.0163934426)));
        assert_eq!(dict.get_index(60).map(|(k, _)| *k), Some("TTT"));

        assert!(Frequencies::from_elem(Alphabet::AminoAcid, 0.05)
            .to_codon_dict()
            .is_none());
    }
}
