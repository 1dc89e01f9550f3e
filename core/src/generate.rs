//! Strategies for generating frequencies over a basis alphabet.
//!
//! A strategy only ever produces frequencies over the basis alphabet it is asked for; any
//! conversion to another alphabet is left to the [`Engine`](crate::Engine).

use crate::{alphabet::Alphabet, empirical, Error, Frequencies};

pub mod alignment;
pub use alignment::{Alignment, StopCodons};

pub mod equal;

pub mod random;
pub use random::Random;

pub mod user;
pub use user::UserFrequencies;

/// A strategy for generating frequencies.
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Equal frequencies for every state.
    Equal,
    /// Noisy, near-uniform random frequencies.
    Random(Random),
    /// Frequencies supplied by the user.
    User(UserFrequencies),
    /// Frequencies counted from sequences.
    Alignment(Alignment),
    /// Frequencies of a published empirical model, looked up by name.
    Empirical(String),
}

impl Strategy {
    /// Generates frequencies over the basis alphabet.
    ///
    /// Empirical frequencies are always returned over the native alphabet of the model,
    /// regardless of the basis.
    pub fn generate(&self, basis: Alphabet) -> Result<Frequencies, Error> {
        log::debug!("Generating {basis} frequencies using {} strategy", self.name());

        match self {
            Strategy::Equal => Ok(equal::generate(basis)),
            Strategy::Random(random) => Ok(random.generate(basis)),
            Strategy::User(user) => user.generate(basis),
            Strategy::Alignment(alignment) => alignment.generate(basis),
            Strategy::Empirical(name) => empirical::tables().get(name).cloned(),
        }
    }

    /// Returns true if constraint relaxation may be applied to generated frequencies.
    pub fn is_relaxable(&self) -> bool {
        matches!(self, Strategy::User(_) | Strategy::Alignment(_))
    }

    /// Returns a short name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Equal => "equal",
            Strategy::Random(_) => "random",
            Strategy::User(_) => "user",
            Strategy::Alignment(_) => "alignment",
            Strategy::Empirical(_) => "empirical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaxable_strategies() {
        assert!(Strategy::User(UserFrequencies::default()).is_relaxable());
        assert!(Strategy::Alignment(Alignment::from_sequences(Vec::new())).is_relaxable());

        assert!(!Strategy::Equal.is_relaxable());
        assert!(!Strategy::Random(Random::default()).is_relaxable());
        assert!(!Strategy::Empirical(String::from("wag")).is_relaxable());
    }

    #[test]
    fn test_empirical_ignores_basis() {
        let freqs = Strategy::Empirical(String::from("LG"))
            .generate(Alphabet::Nucleotide)
            .unwrap();

        assert_eq!(freqs.alphabet(), Alphabet::AminoAcid);
    }
}
