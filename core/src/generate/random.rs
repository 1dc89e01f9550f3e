//! Random frequencies.
//!
//! Frequencies are essentially flat, but with noise: each state but the last draws a value
//! uniformly from `[MIN, 2 / size)`, subject to leaving room for the remaining states, and the
//! last state takes whatever mass is left.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{alphabet::Alphabet, Frequencies};

/// Smallest frequency drawn for any state.
pub const MIN: f64 = 1e-5;

/// A generator of random frequencies.
#[derive(Clone, Debug, Default)]
pub struct Random {
    seed: Option<u64>,
}

impl Random {
    /// Creates a new generator seeded from system entropy on each use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new generator with a fixed seed.
    ///
    /// Generating twice with the same seed gives the same frequencies.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Generates random frequencies over the provided alphabet.
    ///
    /// For positional nucleotides, the three rows are drawn independently.
    pub fn generate(&self, alphabet: Alphabet) -> Frequencies {
        let mut rng = match self.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };

        let mut freqs = Frequencies::from_zeros(alphabet);
        freqs
            .as_mut_slice()
            .chunks_exact_mut(alphabet.size())
            .for_each(|row| draw_row(&mut rng, row));

        freqs
    }
}

fn draw_row<R>(rng: &mut R, row: &mut [f64])
where
    R: Rng,
{
    let max = 2.0 / row.len() as f64;
    let mut sum = 0.0;

    let (last, init) = match row.split_last_mut() {
        Some(split) => split,
        None => return,
    };

    let n = init.len();
    for (i, v) in init.iter_mut().enumerate() {
        // Leave at least MIN for each state still to be drawn, including the last. Drawing
        // uniformly from the truncated range is equivalent to redrawing until the value fits.
        let room = 1.0 - sum - MIN * (n - i) as f64;

        *v = if room < max {
            rng.gen_range(MIN..=room.max(MIN))
        } else {
            rng.gen_range(MIN..max)
        };

        sum += *v;
    }

    *last = 1.0 - sum;
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::frequencies::EPSILON;

    #[test]
    fn test_random_is_valid() {
        for alphabet in Alphabet::ALL {
            for seed in 0..25 {
                let freqs = Random::with_seed(seed).generate(alphabet);
                let max = 2.0 / alphabet.size() as f64;

                assert!(freqs.validate().is_ok());

                for row in freqs.rows() {
                    let (last, init) = row.split_last().unwrap();

                    assert!(init.iter().all(|&v| (MIN..max).contains(&v)), "{row:?}");
                    assert!(*last >= MIN - EPSILON, "{row:?}");
                }
            }
        }
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let first = Random::with_seed(7).generate(Alphabet::Codon);
        let second = Random::with_seed(7).generate(Alphabet::Codon);

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_unseeded_differs() {
        let random = Random::new();

        let first = random.generate(Alphabet::AminoAcid);
        let second = random.generate(Alphabet::AminoAcid);

        assert_ne!(first, second);
        assert!(first.validate().is_ok());
        assert!(second.validate().is_ok());
    }

    #[test]
    fn test_random_positional_rows_differ() {
        let freqs = Random::with_seed(1).generate(Alphabet::PositionalNucleotide);

        assert_ne!(freqs.row(0), freqs.row(1));
        assert_ne!(freqs.row(1), freqs.row(2));
    }
}
