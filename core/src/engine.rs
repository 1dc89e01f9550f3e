//! The frequency engine.
//!
//! An [`Engine`] is configured through a [`Builder`], which checks that the requested output
//! alphabet can be produced from the basis alphabet before anything is generated. Computing
//! consumes the engine, so each engine yields exactly one set of frequencies.

use std::path::PathBuf;

use crate::{
    alphabet::Alphabet,
    empirical,
    frequencies::{convert, io::write, relax},
    Error, Frequencies, Strategy,
};

/// How an output alphabet relates to a basis alphabet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Compatibility {
    /// The output is produced from the basis, converting if required.
    Supported,
    /// Nucleotide frequencies are used for every codon position.
    Broadcast,
    /// Positional nucleotide frequencies are requested as a basis for global nucleotide
    /// frequencies, and the basis is reinterpreted as nucleotides.
    Collapse,
    /// The output cannot be produced from the basis.
    Incompatible,
}

// Rows are basis and columns are output, both in the order of `Alphabet::ALL`.
const COMPATIBILITY: [[Compatibility; 4]; 4] = {
    use Compatibility::{Broadcast as B, Collapse as L, Incompatible as I, Supported as S};

    [
        [S, I, I, B], // nucleotide
        [S, S, S, S], // amino acid
        [S, S, S, S], // codon
        [L, I, I, S], // positional nucleotide
    ]
};

impl Compatibility {
    /// Returns the compatibility of an output alphabet with a basis alphabet.
    pub fn of(basis: Alphabet, output: Alphabet) -> Self {
        COMPATIBILITY[basis.index()][output.index()]
    }
}

/// A builder for an [`Engine`].
#[derive(Clone, Debug)]
pub struct Builder {
    output: Alphabet,
    basis: Option<Alphabet>,
    constraint: f64,
    save: Option<PathBuf>,
    precision: usize,
    alphabet_fallback: bool,
}

impl Builder {
    /// Creates a new builder for frequencies over the provided output alphabet.
    pub fn new(output: Alphabet) -> Self {
        Self {
            output,
            basis: None,
            constraint: 1.0,
            save: None,
            precision: write::DEFAULT_PRECISION,
            alphabet_fallback: true,
        }
    }

    /// Builds an engine generating frequencies with the provided strategy.
    ///
    /// # Errors
    ///
    /// Fails if the output alphabet cannot be produced from the basis alphabet, or if the
    /// constraint is invalid.
    pub fn build(self, strategy: Strategy) -> Result<Engine, Error> {
        let output = self.output;
        let mut basis = self.basis.unwrap_or(output);

        match (Compatibility::of(basis, output), self.alphabet_fallback) {
            (Compatibility::Supported, _) => (),
            (Compatibility::Broadcast, true) => log::warn!(
                "Using {basis} frequencies for every codon position, \
                since {output} frequencies cannot be generated by {basis}"
            ),
            (Compatibility::Collapse, true) => {
                log::warn!(
                    "Generating {output} frequencies by {output} rather than by {basis}, \
                    since codon positions do not apply to {output} frequencies"
                );
                basis = output;
            }
            _ => return Err(Error::IncompatibleAlphabet { basis, output }),
        }

        let mut constraint = self.constraint;
        if !(constraint > 0.0 && constraint <= 1.0) {
            return Err(Error::InvalidConstraint { constraint });
        } else if constraint < 1.0 && !strategy.is_relaxable() {
            log::warn!(
                "Ignoring constraint {constraint}, which only applies to user or alignment \
                frequencies"
            );
            constraint = 1.0;
        } else if constraint < 1.0
            && (basis == Alphabet::PositionalNucleotide
                || output == Alphabet::PositionalNucleotide)
        {
            return Err(Error::PositionalConstraint);
        }

        log::debug!(
            "Built engine for {output} frequencies by {basis} using {} strategy",
            strategy.name()
        );

        Ok(Engine {
            basis,
            output,
            constraint,
            save: self.save,
            precision: self.precision,
            strategy,
        })
    }

    /// Sets whether to fall back between nucleotide and positional nucleotide alphabets.
    ///
    /// When enabled, positional nucleotide output by nucleotides uses the nucleotide frequencies
    /// for every codon position, and nucleotide output by positional nucleotides is generated by
    /// nucleotides instead. Each fallback emits a warning. When disabled, these pairings fail
    /// with [`Error::IncompatibleAlphabet`].
    ///
    /// Broadcasting generates a single nucleotide vector, so every codon position gets identical
    /// frequencies. This differs from switching the basis to positional nucleotides, which draws
    /// independent rows for random frequencies; set that basis explicitly to get such rows.
    ///
    /// Enabled by default.
    pub fn set_alphabet_fallback(mut self, alphabet_fallback: bool) -> Self {
        self.alphabet_fallback = alphabet_fallback;
        self
    }

    /// Sets the basis alphabet over which frequencies are generated.
    ///
    /// By default, the output alphabet is used.
    pub fn set_basis(mut self, basis: Alphabet) -> Self {
        self.basis = Some(basis);
        self
    }

    /// Sets the constraint fraction in (0, 1].
    ///
    /// By default, the constraint is one, meaning that no relaxation is applied. See
    /// [`relax`](crate::frequencies::relax) for details.
    pub fn set_constraint(mut self, constraint: f64) -> Self {
        self.constraint = constraint;
        self
    }

    /// Sets the number of decimals used when saving.
    pub fn set_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets a path to which computed frequencies are saved.
    ///
    /// If the path already exists, it will be overwritten.
    pub fn set_save<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.save = Some(path.into());
        self
    }
}

/// A single-use engine computing frequencies.
#[derive(Debug)]
pub struct Engine {
    basis: Alphabet,
    output: Alphabet,
    constraint: f64,
    save: Option<PathBuf>,
    precision: usize,
    strategy: Strategy,
}

impl Engine {
    /// Returns the basis alphabet, after any fallback.
    pub fn basis(&self) -> Alphabet {
        self.basis
    }

    /// Computes frequencies over the output alphabet.
    ///
    /// Empirical frequencies are returned as tabulated, without conversion or validation.
    pub fn compute(self) -> Result<Frequencies, Error> {
        let freqs = match &self.strategy {
            Strategy::Empirical(name) => {
                let freqs = empirical::tables().get(name)?.clone();

                if freqs.alphabet() != self.output {
                    log::warn!(
                        "Empirical model '{name}' provides {} frequencies, not {} frequencies",
                        freqs.alphabet(),
                        self.output
                    );
                }

                freqs
            }
            strategy => {
                let mut freqs = strategy.generate(self.basis)?;

                if self.constraint < 1.0 {
                    freqs = relax(&freqs, self.constraint)?;
                }
                freqs.validate()?;

                Slots::new(freqs).into_output(self.output)?
            }
        };

        if let Some(path) = self.save {
            write::Builder::default()
                .set_precision(self.precision)
                .write_to_path(&path, &freqs)
                .map_err(|source| Error::Export {
                    path: path.clone(),
                    source,
                })?;

            log::info!("Saved {} frequencies to '{}'", freqs.alphabet(), path.display());
        }

        Ok(freqs)
    }

    /// Returns the output alphabet.
    pub fn output(&self) -> Alphabet {
        self.output
    }
}

/// Builds an engine and computes frequencies.
pub fn compute(builder: Builder, strategy: Strategy) -> Result<Frequencies, Error> {
    builder.build(strategy)?.compute()
}

/// At most one set of frequencies per alphabet, filled on demand by conversion.
#[derive(Debug)]
struct Slots {
    basis: Alphabet,
    slots: [Option<Frequencies>; 4],
}

impl Slots {
    fn new(freqs: Frequencies) -> Self {
        let basis = freqs.alphabet();
        let mut slots = [None, None, None, None];
        slots[basis.index()] = Some(freqs);

        Self { basis, slots }
    }

    fn fill(&mut self, alphabet: Alphabet) -> Result<(), Error> {
        if self.get(alphabet).is_some() {
            return Ok(());
        }

        let source = match alphabet {
            Alphabet::AminoAcid => Alphabet::Codon,
            Alphabet::Codon => Alphabet::AminoAcid,
            Alphabet::PositionalNucleotide if self.get(Alphabet::Nucleotide).is_some() => {
                Alphabet::Nucleotide
            }
            Alphabet::Nucleotide | Alphabet::PositionalNucleotide => {
                self.fill(Alphabet::Codon)?;
                Alphabet::Codon
            }
        };

        let freqs = match self.get(source) {
            Some(freqs) => convert::convert(freqs, alphabet)?,
            None => {
                return Err(Error::IncompatibleAlphabet {
                    basis: self.basis,
                    output: alphabet,
                })
            }
        };

        log::trace!("Converted {source} frequencies to {alphabet} frequencies");
        self.slots[alphabet.index()] = Some(freqs);

        Ok(())
    }

    fn get(&self, alphabet: Alphabet) -> Option<&Frequencies> {
        self.slots[alphabet.index()].as_ref()
    }

    fn into_output(mut self, output: Alphabet) -> Result<Frequencies, Error> {
        self.fill(output)?;

        self.slots[output.index()]
            .take()
            .ok_or(Error::IncompatibleAlphabet {
                basis: self.basis,
                output,
            })
    }
}
