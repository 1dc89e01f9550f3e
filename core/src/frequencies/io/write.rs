//! Utilities for writing frequencies.

use std::{fs, io, path::Path};

use crate::Frequencies;

use super::text;

/// Default number of decimals written.
pub const DEFAULT_PRECISION: usize = 10;

/// A builder to write frequencies.
#[derive(Debug)]
pub struct Builder {
    precision: usize,
}

impl Builder {
    /// Set precision.
    ///
    /// If unset, a precision of ten digits will be used.
    pub fn set_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Write frequencies to writer.
    pub fn write<W>(self, writer: &mut W, freqs: &Frequencies) -> io::Result<()>
    where
        W: io::Write,
    {
        text::write_frequencies(writer, freqs, self.precision)
    }

    /// Write frequencies to stdout.
    pub fn write_to_stdout(self, freqs: &Frequencies) -> io::Result<()> {
        self.write(&mut io::stdout().lock(), freqs)
    }

    /// Write frequencies to path.
    ///
    /// If path already exists, it will be overwritten.
    pub fn write_to_path<P>(self, path: P, freqs: &Frequencies) -> io::Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = io::BufWriter::new(fs::File::create(path)?);
        self.write(&mut writer, freqs)?;
        io::Write::flush(&mut writer)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            precision: DEFAULT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::alphabet::Alphabet;

    #[test]
    fn test_write_to_path_round_trip() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("freqs.txt");

        let freqs = Frequencies::from_elem(Alphabet::Codon, 1. / 61.);
        Builder::default().write_to_path(&path, &freqs)?;

        let written = fs::read_to_string(&path)?;
        assert_eq!(written.lines().count(), 61);
        assert_eq!(written.lines().next(), Some("0.0163934426"));

        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("freqs.txt");

        let freqs = Frequencies::from_elem(Alphabet::Nucleotide, 0.25);
        assert!(Builder::default().write_to_path(path, &freqs).is_err());
    }
}
