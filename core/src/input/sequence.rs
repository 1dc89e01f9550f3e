//! Reading raw sequences from FASTA and FASTQ files.

use std::{fmt, io, str::FromStr};

use bio::io::{fasta, fastq};
use flate2::bufread::MultiGzDecoder;

use crate::{input, Input};

/// A raw sequence of symbols.
pub type Sequence = Vec<u8>;

/// A builder to read sequences.
///
/// The sequence format and compression method are detected from the data unless set explicitly.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    input: Option<Input>,
    format: Option<Format>,
    compression_method: Option<Option<CompressionMethod>>,
}

impl Builder {
    /// Reads all sequences from the input.
    ///
    /// If no input is set, stdin is used.
    pub fn read(&self) -> io::Result<Vec<Sequence>> {
        let input = self.input.as_ref().unwrap_or(&Input::Stdin);

        let sequences = match input.open()? {
            input::Reader::File(reader) => self.read_from_reader(reader),
            input::Reader::Stdin(reader) => self.read_from_reader(reader),
        }?;

        log::debug!(
            "Read {} sequences from {}",
            sequences.len(),
            input
                .as_path()
                .map(|path| format!("'{}'", path.display()))
                .unwrap_or_else(|| String::from("stdin"))
        );

        Ok(sequences)
    }

    /// Reads all sequences from a reader.
    pub fn read_from_reader<R>(&self, mut reader: R) -> io::Result<Vec<Sequence>>
    where
        R: io::BufRead,
    {
        let compression_method = match self.compression_method {
            Some(compression_method) => compression_method,
            None => CompressionMethod::detect(&mut reader)?,
        };

        match compression_method {
            Some(CompressionMethod::Gzip) => {
                self.read_decompressed(io::BufReader::new(MultiGzDecoder::new(reader)))
            }
            None => self.read_decompressed(reader),
        }
    }

    fn read_decompressed<R>(&self, mut reader: R) -> io::Result<Vec<Sequence>>
    where
        R: io::BufRead,
    {
        let format = match self.format {
            Some(format) => format,
            None => Format::detect(&mut reader)?,
        };

        match format {
            Format::Fasta => fasta::Reader::new(reader)
                .records()
                .map(|record| record.map(|record| record.seq().to_vec()))
                .collect(),
            Format::Fastq => fastq::Reader::new(reader)
                .records()
                .map(|record| {
                    record
                        .map(|record| record.seq().to_vec())
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
                })
                .collect(),
        }
    }

    /// Sets the compression method.
    ///
    /// By default, gzip compression is detected automatically.
    pub fn set_compression_method(mut self, compression_method: Option<CompressionMethod>) -> Self {
        self.compression_method = Some(compression_method);
        self
    }

    /// Sets the sequence format.
    ///
    /// By default, the format is detected from the first record marker.
    pub fn set_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the input.
    pub fn set_input(mut self, input: Input) -> Self {
        self.input = Some(input);
        self
    }
}

/// A sequence file format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// FASTA.
    Fasta,
    /// FASTQ.
    Fastq,
}

impl Format {
    fn detect<R>(reader: &mut R) -> io::Result<Format>
    where
        R: io::BufRead,
    {
        const FASTQ_MARKER: u8 = b'@';

        let src = reader.fill_buf()?;

        match src.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(&FASTQ_MARKER) => Ok(Format::Fastq),
            _ => Ok(Format::Fasta),
        }
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" | "fa" => Ok(Format::Fasta),
            "fastq" | "fq" => Ok(Format::Fastq),
            _ => Err(ParseFormatError(String::from(s))),
        }
    }
}

/// An error associated with parsing a sequence format name.
#[derive(Debug)]
pub struct ParseFormatError(String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported sequence format '{}'", self.0)
    }
}

impl std::error::Error for ParseFormatError {}

/// A compression method for sequence files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip, including BGZF.
    Gzip,
}

impl CompressionMethod {
    fn detect<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: io::BufRead,
    {
        const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

        let src = reader.fill_buf()?;

        if let Some(buf) = src.get(..GZIP_MAGIC_NUMBER.len()) {
            if buf == GZIP_MAGIC_NUMBER {
                return Ok(Some(CompressionMethod::Gzip));
            }
        }

        Ok(None)
    }
}
