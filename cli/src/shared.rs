use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{anyhow, bail, Error};

use clap::{Args, ValueEnum};
use statefreqs_core::{compute, frequencies::io::write, Alphabet, Builder, Frequencies, Strategy};

/// Arguments shared by all strategies.
#[derive(Args, Debug)]
pub struct Shared {
    /// Alphabet of the output frequencies.
    ///
    /// One of 'nuc', 'amino', 'codon', or 'posNuc' (nucleotides by codon position).
    #[clap(short = 't', long = "type", value_name = "ALPHABET")]
    pub output: Alphabet,

    /// Alphabet over which frequencies are generated.
    ///
    /// Amino acid and codon frequencies may be converted to any output alphabet; when generating
    /// codons by amino acids, synonymous codons have equal frequencies. Nucleotides can only be
    /// used to generate nucleotide frequencies, and positional nucleotides only positional
    /// nucleotide frequencies, except as described for '--strict-alphabets'. By default, the
    /// output alphabet is used.
    #[clap(short = 'b', long = "by", value_name = "ALPHABET")]
    pub basis: Option<Alphabet>,

    /// Fraction of probability mass kept by states with non-zero frequency.
    ///
    /// The remaining mass is shared equally among states with zero frequency. Only applies to
    /// user and read frequencies, and cannot be used for positional nucleotides.
    #[clap(short = 'c', long, default_value_t = 1.0, value_name = "FLOAT")]
    pub constraint: f64,

    /// Output path.
    ///
    /// If unset, frequencies are written to stdout. If the path exists, it will be overwritten.
    #[clap(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Number of decimals written.
    #[clap(short = 'p', long, default_value_t = write::DEFAULT_PRECISION, value_name = "INT")]
    pub precision: usize,

    /// Format written to stdout.
    #[clap(
        long,
        value_enum,
        default_value_t = Format::Lines,
        conflicts_with = "output_path"
    )]
    pub format: Format,

    /// Disallow falling back between nucleotide and positional nucleotide alphabets.
    ///
    /// By default, positional nucleotide frequencies by nucleotides use the same nucleotide
    /// frequencies for every codon position, and nucleotide frequencies by positional
    /// nucleotides are instead generated by nucleotides, with a warning. If set, these cases are
    /// errors.
    #[clap(long)]
    pub strict_alphabets: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// One value per line, or one codon position per line for positional nucleotides.
    Lines,
    /// Tab-separated codon and frequency, rounded to ten decimals. Codon output only.
    Dict,
}

impl Shared {
    pub fn run(self, strategy: Strategy) -> Result<(), Error> {
        let mut builder = Builder::new(self.output)
            .set_constraint(self.constraint)
            .set_precision(self.precision)
            .set_alphabet_fallback(!self.strict_alphabets);

        if let Some(basis) = self.basis {
            builder = builder.set_basis(basis);
        }
        if let Some(path) = &self.output_path {
            builder = builder.set_save(path);
        }

        let freqs = compute(builder, strategy)?;

        if self.output_path.is_none() {
            match self.format {
                Format::Lines => write::Builder::default()
                    .set_precision(self.precision)
                    .write_to_stdout(&freqs)
                    .map_err(|e| anyhow!("failed to write frequencies to stdout: {e}"))?,
                Format::Dict => write_dict(&mut io::stdout().lock(), &freqs)?,
            }
        }

        Ok(())
    }
}

fn write_dict<W>(writer: &mut W, freqs: &Frequencies) -> Result<(), Error>
where
    W: Write,
{
    let Some(dict) = freqs.to_codon_dict() else {
        bail!(
            "dictionary format only applies to codon frequencies, not {} frequencies",
            freqs.alphabet()
        )
    };

    for (codon, v) in dict {
        writeln!(writer, "{codon}\t{v}")?;
    }

    Ok(())
}
