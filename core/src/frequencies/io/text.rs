//! Reading and writing for the text format.
//!
//! The plain text format writes one line per row of frequencies. For most alphabets, there is a
//! single row, and each frequency is written on its own line. For positional nucleotides, each of
//! the three codon positions is written on its own line, with the four frequencies separated by a
//! single space.

use std::{fmt::Write as _, io, str::FromStr};

use crate::{alphabet::Alphabet, Frequencies};

fn parse_frequencies(s: &str, alphabet: Alphabet) -> io::Result<Frequencies> {
    s.split_ascii_whitespace()
        .map(f64::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        .and_then(|vec| {
            Frequencies::new(alphabet, vec)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        })
}

/// Reads frequencies over the provided alphabet in text format from a reader.
///
/// Any whitespace may separate values, so frequencies written on a single line are also accepted.
pub fn read_frequencies<R>(reader: &mut R, alphabet: Alphabet) -> io::Result<Frequencies>
where
    R: io::BufRead,
{
    let mut buf = String::new();
    let _bytes_read = reader.read_to_string(&mut buf)?;

    parse_frequencies(&buf, alphabet)
}

fn format_row(row: &[f64], sep: &str, precision: usize) -> String {
    row.iter().enumerate().fold(String::new(), |mut s, (i, x)| {
        if i > 0 {
            s.push_str(sep);
        }
        // Writing to a string cannot fail
        let _ = write!(s, "{x:.precision$}");
        s
    })
}

/// Writes frequencies in text format to a writer.
pub fn write_frequencies<W>(
    writer: &mut W,
    freqs: &Frequencies,
    precision: usize,
) -> io::Result<()>
where
    W: io::Write,
{
    match freqs.alphabet() {
        Alphabet::PositionalNucleotide => {
            for row in freqs.rows() {
                writeln!(writer, "{}", format_row(row, " ", precision))?;
            }
            Ok(())
        }
        _ => writeln!(writer, "{}", format_row(freqs.as_slice(), "\n", precision)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_nucleotide() -> io::Result<()> {
        let mut dest = Vec::new();
        let freqs = Frequencies::new(Alphabet::Nucleotide, [0.5, 0.25, 0.25, 0.]).unwrap();
        write_frequencies(&mut dest, &freqs, 2)?;

        assert_eq!(dest, b"0.50\n0.25\n0.25\n0.00\n");

        Ok(())
    }

    #[test]
    fn test_write_positional() -> io::Result<()> {
        let mut dest = Vec::new();
        let freqs = Frequencies::from_rows(
            Alphabet::PositionalNucleotide,
            [
                vec![0.1, 0.2, 0.3, 0.4],
                vec![0.25; 4],
                vec![1.0, 0.0, 0.0, 0.0],
            ],
        )
        .unwrap();
        write_frequencies(&mut dest, &freqs, 3)?;

        assert_eq!(
            dest,
            b"0.100 0.200 0.300 0.400\n0.250 0.250 0.250 0.250\n1.000 0.000 0.000 0.000\n"
        );

        Ok(())
    }

    #[test]
    fn test_read_nucleotide() -> io::Result<()> {
        let src = b"0.5\n0.25\n0.25\n0.0\n";

        assert_eq!(
            read_frequencies(&mut &src[..], Alphabet::Nucleotide)?,
            Frequencies::new(Alphabet::Nucleotide, [0.5, 0.25, 0.25, 0.]).unwrap()
        );

        Ok(())
    }

    #[test]
    fn test_read_scientific() -> io::Result<()> {
        let src = b"2.500000000000000000e-01 2.5e-01\n0.25\n2.5E-1\n";

        assert_eq!(
            read_frequencies(&mut &src[..], Alphabet::Nucleotide)?,
            Frequencies::from_elem(Alphabet::Nucleotide, 0.25)
        );

        Ok(())
    }

    #[test]
    fn test_read_wrong_length() {
        let src = b"0.5\n0.5\n";

        let result = read_frequencies(&mut &src[..], Alphabet::Nucleotide);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_not_a_number() {
        let src = b"0.5\nhalf\n0\n0\n";

        let result = read_frequencies(&mut &src[..], Alphabet::Nucleotide);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
