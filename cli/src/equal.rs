use anyhow::Error;

use clap::Parser;
use statefreqs_core::Strategy;

use crate::shared::Shared;

/// Generate equal frequencies.
///
/// Every state has the same frequency. For positional nucleotides, this holds at every codon
/// position.
#[derive(Debug, Parser)]
pub struct Equal {
    #[command(flatten)]
    pub shared: Shared,
}

impl Equal {
    pub fn run(self) -> Result<(), Error> {
        self.shared.run(Strategy::Equal)
    }
}
