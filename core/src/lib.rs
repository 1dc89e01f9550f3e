#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Tools for computing equilibrium state frequencies of sequence evolution models.
//!
//! This serves as the core library implementation for the `statefreqs` CLI, but can also be used
//! as a free-standing library by code building substitution models.
//!
//! # Overview
//!
//! Frequencies are defined over one of four [`Alphabet`]s: nucleotides, amino acids, the 61 sense
//! codons of the standard genetic code, or nucleotides at each of the three codon positions.
//! A [`Strategy`] generates [`Frequencies`] over a *basis* alphabet, and the [`Engine`] converts
//! these to the requested *output* alphabet. For instance, codon frequencies may be generated by
//! amino acids, in which case synonymous codons share the frequency of their amino acid equally.
//!
//! Every set of frequencies returned sums to one, within [`frequencies::EPSILON`]. For positional
//! nucleotides, this holds for each codon position separately.
//!
//! # Example
//!
//! ```
//! use statefreqs_core::{compute, generate::UserFrequencies, Alphabet, Builder, Strategy};
//!
//! // Prefer alanine and glycine equally
//! let user = UserFrequencies::from_iter([("A", 0.5), ("G", 0.5)]);
//!
//! // Compute codon frequencies by amino acids
//! let builder = Builder::new(Alphabet::Codon).set_basis(Alphabet::AminoAcid);
//! let freqs = compute(builder, Strategy::User(user))?;
//!
//! // Alanine has four synonymous codons
//! assert_eq!(freqs.get("GCA"), Some(0.125));
//! # Ok::<(), statefreqs_core::Error>(())
//! ```

#[cfg(test)]
#[macro_use]
pub(crate) mod approx;

pub mod alphabet;
pub use alphabet::Alphabet;

pub mod empirical;

pub mod engine;
pub use engine::{compute, Builder, Engine};

pub mod error;
pub use error::Error;

pub mod frequencies;
pub use frequencies::Frequencies;

pub mod generate;
pub use generate::Strategy;

pub mod input;
pub use input::Input;
