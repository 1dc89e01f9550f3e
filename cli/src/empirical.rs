use std::path::PathBuf;

use anyhow::{anyhow, Error};

use clap::Parser;
use statefreqs_core::{
    empirical::{self, Tables, CODON_MODELS},
    frequencies::io::read,
    Alphabet, Strategy,
};

use crate::shared::Shared;

/// Use frequencies of an empirical model.
///
/// The amino acid models JTT, WAG and LG are built in. Frequencies are returned as tabulated,
/// over the alphabet of the model, without conversion.
#[derive(Debug, Parser)]
pub struct Empirical {
    /// Name of the model.
    #[clap(value_name = "MODEL")]
    pub model: String,

    #[command(flatten)]
    pub shared: Shared,

    /// Register frequencies for a model from a file.
    ///
    /// Provide a model name and a path separated by '=', e.g. 'ECMrest=ecmrest.txt'. The file
    /// should hold one frequency per line. Tables for the codon models ECMrest and ECMunrest
    /// should hold 61 codon frequencies, and any other table 20 amino acid frequencies. A
    /// registered table replaces any built-in table with the same name. May be repeated.
    #[clap(long = "table", value_parser = parse_table, value_name = "NAME=PATH")]
    pub tables: Vec<(String, PathBuf)>,
}

fn parse_table(s: &str) -> Result<(String, PathBuf), String> {
    s.split_once('=')
        .map(|(name, path)| (name.trim().to_string(), PathBuf::from(path)))
        .ok_or_else(|| format!("expected NAME=PATH, found '{s}'"))
}

impl Empirical {
    pub fn run(self) -> Result<(), Error> {
        if !self.tables.is_empty() {
            let tables = self
                .tables
                .iter()
                .try_fold(Tables::builtin(), |tables, (name, path)| {
                    let alphabet = if CODON_MODELS.contains(&name.to_ascii_lowercase().as_str()) {
                        Alphabet::Codon
                    } else {
                        Alphabet::AminoAcid
                    };

                    let freqs = read::Builder::new(alphabet)
                        .read_from_path(path)
                        .map_err(|e| {
                            anyhow!(
                                "failed to read {alphabet} frequencies for '{name}' from '{}': {e}",
                                path.display()
                            )
                        })?;

                    log::debug!("Registered empirical model '{name}' from '{}'", path.display());

                    Ok::<_, Error>(tables.with_table(name, freqs))
                })?;

            empirical::init(tables).map_err(|_| anyhow!("empirical tables already registered"))?;
        }

        self.shared.run(Strategy::Empirical(self.model))
    }
}
