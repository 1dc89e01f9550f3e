use anyhow::Error;

use clap::Parser;
use statefreqs_core::{generate, Strategy};

use crate::shared::Shared;

/// Generate random frequencies.
///
/// Frequencies are near-uniform with noise: no state except the last exceeds twice the uniform
/// frequency, and every state has a small positive frequency.
#[derive(Debug, Parser)]
pub struct Random {
    #[command(flatten)]
    pub shared: Shared,

    /// Seed for the random number generator.
    ///
    /// If unset, a seed is drawn from system entropy, and frequencies differ between runs.
    #[clap(short = 's', long, value_name = "INT")]
    pub seed: Option<u64>,
}

impl Random {
    pub fn run(self) -> Result<(), Error> {
        let random = match self.seed {
            Some(seed) => generate::Random::with_seed(seed),
            None => generate::Random::new(),
        };

        self.shared.run(Strategy::Random(random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::parse_subcmd;

    #[test]
    fn test_seed() {
        assert_eq!(parse_subcmd::<Random>("statefreqs random -t nuc").seed, None);
        assert_eq!(
            parse_subcmd::<Random>("statefreqs random -t nuc --seed 3").seed,
            Some(3)
        );
    }
}
