//! Constraint relaxation.
//!
//! Rather than forbidding states with zero frequency outright, relaxation lets the non-zero
//! ("preferred") states keep a fraction `c` of the total mass and shares the remaining `1 - c`
//! equally among the zero states.

use crate::{alphabet::Alphabet, error::Degenerate, Error};

use super::{Frequencies, EPSILON};

/// Returns relaxed frequencies, leaving the provided frequencies untouched.
///
/// Non-zero frequencies are scaled by `constraint`, and each zero frequency receives
/// `(1 - constraint) / zeros`. A constraint of one returns the frequencies unchanged.
///
/// # Errors
///
/// Fails if the constraint is not in (0, 1], if the frequencies are positional nucleotide
/// frequencies, if they are all zero or none of them are zero, or if the relaxed frequencies do
/// not sum to one.
pub fn relax(freqs: &Frequencies, constraint: f64) -> Result<Frequencies, Error> {
    if !(constraint > 0.0 && constraint <= 1.0) {
        return Err(Error::InvalidConstraint { constraint });
    } else if freqs.alphabet() == Alphabet::PositionalNucleotide {
        return Err(Error::PositionalConstraint);
    } else if constraint == 1.0 {
        return Ok(freqs.clone());
    }

    let zeros = freqs.as_slice().iter().filter(|&&v| is_zero(v)).count();
    if zeros == freqs.as_slice().len() {
        return Err(Degenerate::AllZero.into());
    } else if zeros == 0 {
        return Err(Degenerate::NoZeroStates.into());
    }

    let fill = (1.0 - constraint) / zeros as f64;
    log::debug!(
        "Relaxing {} frequencies: {zeros} zero states receive {fill} each",
        freqs.alphabet()
    );

    let mut relaxed = freqs.clone();
    relaxed.as_mut_slice().iter_mut().for_each(|v| {
        *v = if is_zero(*v) { fill } else { *v * constraint };
    });

    relaxed.into_validated()
}

fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relax_codons() {
        let mut codon = Frequencies::from_zeros(Alphabet::Codon);
        codon.as_mut_slice()[..10].iter_mut().for_each(|v| *v = 0.1);

        let relaxed = relax(&codon, 0.95).unwrap();

        for &v in &relaxed.as_slice()[..10] {
            assert_approx_eq!(v, 0.095, epsilon = EPSILON);
        }
        for &v in &relaxed.as_slice()[10..] {
            assert_approx_eq!(v, 0.05 / 51.0, epsilon = EPSILON);
        }
        assert_approx_eq!(relaxed.row_sums()[0], 1.0, epsilon = EPSILON);

        // Input is left as is
        assert_eq!(codon[10], 0.0);
    }

    #[test]
    fn test_relax_leaves_no_zeros() {
        let nucleotide = Frequencies::new(Alphabet::Nucleotide, [0.5, 0.5, 0., 0.]).unwrap();
        let relaxed = relax(&nucleotide, 0.9).unwrap();

        assert!(relaxed.as_slice().iter().all(|&v| v > 0.0));
        assert_approx_eq!(relaxed.as_slice(), &[0.45, 0.45, 0.05, 0.05][..], epsilon = EPSILON);
    }

    #[test]
    fn test_relax_unconstrained_is_identity() {
        let nucleotide = Frequencies::new(Alphabet::Nucleotide, [1., 0., 0., 0.]).unwrap();
        assert_eq!(relax(&nucleotide, 1.0).unwrap(), nucleotide);
    }

    #[test]
    fn test_relax_without_zero_states() {
        let amino = Frequencies::from_elem(Alphabet::AminoAcid, 0.05);

        assert!(matches!(
            relax(&amino, 0.95),
            Err(Error::DegenerateDistribution(Degenerate::NoZeroStates))
        ));
    }

    #[test]
    fn test_relax_all_zero() {
        let amino = Frequencies::from_zeros(Alphabet::AminoAcid);

        assert!(matches!(
            relax(&amino, 0.95),
            Err(Error::DegenerateDistribution(Degenerate::AllZero))
        ));
    }

    #[test]
    fn test_relax_invalid_constraint() {
        let nucleotide = Frequencies::new(Alphabet::Nucleotide, [1., 0., 0., 0.]).unwrap();

        for constraint in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                relax(&nucleotide, constraint),
                Err(Error::InvalidConstraint { .. })
            ));
        }
    }

    #[test]
    fn test_relax_positional() {
        let positional = Frequencies::from_elem(Alphabet::PositionalNucleotide, 0.25);

        assert!(matches!(
            relax(&positional, 0.95),
            Err(Error::PositionalConstraint)
        ));
    }
}
