//! Utilities for reading frequencies.

use std::{fs, io, path::Path};

use crate::{alphabet::Alphabet, Frequencies};

use super::text;

/// A builder to read frequencies over an alphabet.
#[derive(Debug)]
pub struct Builder {
    alphabet: Alphabet,
}

impl Builder {
    /// Creates a new builder for frequencies over the provided alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Read frequencies from reader.
    pub fn read<R>(self, reader: &mut R) -> io::Result<Frequencies>
    where
        R: io::BufRead,
    {
        text::read_frequencies(reader, self.alphabet)
    }

    /// Read frequencies from path.
    pub fn read_from_path<P>(self, path: P) -> io::Result<Frequencies>
    where
        P: AsRef<Path>,
    {
        self.read(&mut io::BufReader::new(fs::File::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::frequencies::io::write;

    #[test]
    fn test_read_written_positional() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("positional.txt");

        let freqs = Frequencies::from_rows(
            Alphabet::PositionalNucleotide,
            [vec![0.25; 4], vec![0.5, 0.5, 0., 0.], vec![0.125, 0.375, 0.25, 0.25]],
        )
        .unwrap();
        write::Builder::default().write_to_path(&path, &freqs)?;

        let read = Builder::new(Alphabet::PositionalNucleotide).read_from_path(&path)?;
        assert_eq!(read, freqs);

        Ok(())
    }

    #[test]
    fn test_read_missing_path() {
        let result = Builder::new(Alphabet::Codon).read_from_path("does/not/exist.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
