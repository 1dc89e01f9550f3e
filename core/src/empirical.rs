//! Empirical frequencies of published substitution models.
//!
//! The amino acid models JTT, WAG and LG are built in. The empirical codon models ECMrest and
//! ECMunrest are recognized by name, but their frequencies must be registered through [`init`]
//! before use.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::{alphabet::Alphabet, Error, Frequencies};

/// Names of the recognized empirical codon models.
pub const CODON_MODELS: [&str; 2] = ["ecmrest", "ecmunrest"];

/// JTT amino acid frequencies (Jones, Taylor and Thornton, 1992).
pub const JTT: [f64; 20] = [
    0.076748, 0.019803, 0.051544, 0.061830, 0.040126, 0.073152, 0.022944, 0.053761, 0.058676,
    0.091904, 0.023826, 0.042645, 0.050901, 0.040752, 0.051691, 0.068765, 0.058565, 0.066005,
    0.014261, 0.032102,
];

/// WAG amino acid frequencies (Whelan and Goldman, 2001).
pub const WAG: [f64; 20] = [
    0.086628, 0.019308, 0.057045, 0.058059, 0.038432, 0.083252, 0.024431, 0.048466, 0.062029,
    0.086209, 0.019503, 0.039089, 0.045763, 0.036728, 0.043972, 0.069518, 0.061013, 0.070896,
    0.014386, 0.035274,
];

/// LG amino acid frequencies (Le and Gascuel, 2008).
pub const LG: [f64; 20] = [
    0.079066, 0.012937, 0.053052, 0.071586, 0.042302, 0.057337, 0.022355, 0.062157, 0.064600,
    0.099081, 0.022951, 0.041977, 0.044040, 0.040767, 0.055941, 0.061197, 0.053287, 0.069147,
    0.012066, 0.034155,
];

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Registers the empirical tables used by [`tables`].
///
/// This can only succeed once, and must happen before the first call to [`tables`]. If the
/// tables were already set, the provided tables are returned as the error.
pub fn init(tables: Tables) -> Result<(), Tables> {
    TABLES.set(tables)
}

/// Returns the process-wide empirical tables.
///
/// If [`init`] was not called, only the built-in tables are available.
pub fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::builtin)
}

/// A collection of named empirical frequency tables.
///
/// Names are matched case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct Tables(IndexMap<String, Frequencies>);

impl Tables {
    /// Creates the built-in tables.
    pub fn builtin() -> Self {
        [("jtt", JTT), ("wag", WAG), ("lg", LG)]
            .into_iter()
            .fold(Self::default(), |tables, (name, values)| {
                tables.with_table(name, amino_acids(values))
            })
    }

    /// Returns the frequencies of a model.
    ///
    /// The frequencies are returned exactly as tabulated. In particular, they are not checked to
    /// sum to one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownModel`] if no table by this name is registered.
    pub fn get(&self, name: &str) -> Result<&Frequencies, Error> {
        self.0
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| Error::UnknownModel {
                name: String::from(name),
            })
    }

    /// Returns an iterator over the registered model names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Adds or replaces a table.
    pub fn with_table<S>(mut self, name: S, frequencies: Frequencies) -> Self
    where
        S: AsRef<str>,
    {
        self.0.insert(name.as_ref().to_ascii_lowercase(), frequencies);
        self
    }
}

fn amino_acids(values: [f64; 20]) -> Frequencies {
    let mut freqs = Frequencies::from_zeros(Alphabet::AminoAcid);
    freqs.as_mut_slice().copy_from_slice(&values);
    freqs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let tables = Tables::builtin();

        assert_eq!(tables.names().collect::<Vec<_>>(), ["jtt", "wag", "lg"]);

        for name in ["jtt", "wag", "lg"] {
            let freqs = tables.get(name).unwrap();
            let sum: f64 = freqs.as_slice().iter().sum();

            assert_eq!(freqs.alphabet(), Alphabet::AminoAcid);
            assert!((sum - 1.0).abs() < 1e-5, "{name}: {sum}");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let tables = Tables::builtin();

        assert_eq!(tables.get("WAG").unwrap().get("A"), Some(0.086628));
        assert_eq!(tables.get("Lg").unwrap().get("L"), Some(0.099081));
    }

    #[test]
    fn test_unknown_model() {
        let tables = Tables::builtin();

        assert!(matches!(
            tables.get("dayhoff"),
            Err(Error::UnknownModel { name }) if name == "dayhoff"
        ));
    }

    #[test]
    fn test_codon_models_need_registration() {
        let tables = Tables::builtin();

        assert!(tables.get("ECMrest").is_err());

        let equal = Frequencies::from_elem(Alphabet::Codon, 1.0 / 61.0);
        let tables = tables.with_table("ECMrest", equal.clone());

        assert_eq!(tables.get("ecmrest").unwrap(), &equal);
        assert!(tables.get("ecmunrest").is_err());
    }
}
