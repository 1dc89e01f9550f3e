use std::path::PathBuf;

use anyhow::Error;

use clap::Parser;
use statefreqs_core::{
    generate::{Alignment, StopCodons},
    input::sequence::{self, Format},
    Input, Strategy,
};

use crate::shared::Shared;

/// Count frequencies from sequences.
///
/// Symbols are counted across all sequences, after converting to upper case and discarding
/// anything outside the basis alphabet, such as gaps and ambiguity codes. For codons and
/// positional nucleotides, sequences are counted in consecutive triplets.
#[derive(Debug, Parser)]
pub struct Read {
    /// Input sequences.
    ///
    /// The input can be provided here or read from stdin in FASTA or FASTQ format, optionally
    /// gzip compressed.
    #[clap(value_parser, value_name = "PATH")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub shared: Shared,

    /// Alignment columns from which to count, indexed from zero.
    ///
    /// If set, sequences must all have the same length. For codons and positional nucleotides,
    /// columns refer to codons rather than single sites. Use comma to separate columns.
    #[clap(long, use_value_delimiter = true, value_name = "INT,...")]
    pub columns: Option<Vec<usize>>,

    /// Sequence format.
    ///
    /// If unset, the format is detected from the input.
    #[clap(long, value_name = "FORMAT")]
    pub seq_format: Option<Format>,

    /// Skip stop codons when counting codons.
    ///
    /// By default, a stop codon in the sequences is an error. If set, stop codons are skipped
    /// with a warning, and frequencies are based on the remaining codons.
    #[clap(long)]
    pub skip_stop_codons: bool,
}

impl Read {
    pub fn run(self) -> Result<(), Error> {
        let mut reader = sequence::Builder::default().set_input(Input::new(self.input)?);
        if let Some(format) = self.seq_format {
            reader = reader.set_format(format);
        }

        let mut alignment = Alignment::from_reader(reader);
        if let Some(columns) = self.columns {
            alignment = alignment.set_columns(columns);
        }
        if self.skip_stop_codons {
            alignment = alignment.set_stop_codons(StopCodons::Skip);
        }

        self.shared.run(Strategy::Alignment(alignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::parse_subcmd;

    #[test]
    fn test_columns() {
        let read = parse_subcmd::<Read>("statefreqs read -t codon --columns 0,4,2 seqs.fa");

        assert_eq!(read.columns, Some(vec![0, 4, 2]));
        assert_eq!(read.input, Some(PathBuf::from("seqs.fa")));
    }

    #[test]
    fn test_defaults() {
        let read = parse_subcmd::<Read>("statefreqs read -t nuc");

        assert_eq!(read.input, None);
        assert_eq!(read.columns, None);
        assert_eq!(read.seq_format, None);
        assert!(!read.skip_stop_codons);
    }

    #[test]
    fn test_seq_format() {
        let read = parse_subcmd::<Read>("statefreqs read -t amino --seq-format fastq");

        assert_eq!(read.seq_format, Some(Format::Fastq));
    }
}
