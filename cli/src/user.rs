use anyhow::Error;

use clap::Parser;
use statefreqs_core::{
    generate::{user::Value, UserFrequencies},
    Strategy,
};

use crate::shared::Shared;

/// Use provided frequencies.
///
/// Symbols that are not provided have frequency zero. Provided frequencies must sum to one,
/// and may be relaxed using the constraint option.
#[derive(Debug, Parser)]
pub struct User {
    #[command(flatten)]
    pub shared: Shared,

    /// Frequencies of symbols in the basis alphabet.
    ///
    /// Provide a symbol and its frequency separated by '=', e.g. 'A=0.25' or 'ATG=0.1'. For
    /// positional nucleotides, provide one frequency for each codon position separated by '/',
    /// e.g. 'A=0.1/0.3/0.25'.
    #[clap(
        required = true,
        value_parser = parse_entry,
        value_name = "SYMBOL=FREQUENCY"
    )]
    pub frequencies: Vec<(String, Value)>,
}

fn parse_entry(s: &str) -> Result<(String, Value), String> {
    let (symbol, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=FREQUENCY, found '{s}'"))?;

    let value = value.parse::<Value>().map_err(|e| e.to_string())?;

    Ok((symbol.trim().to_string(), value))
}

impl User {
    pub fn run(self) -> Result<(), Error> {
        let user = UserFrequencies::from_iter(self.frequencies);

        self.shared.run(Strategy::User(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::{parse_subcmd, try_parse_subcmd};

    #[test]
    fn test_parse_frequencies() {
        let user = parse_subcmd::<User>("statefreqs user -t nuc A=0.5 T=.5");

        assert_eq!(
            user.frequencies,
            vec![
                (String::from("A"), Value::Scalar(0.5)),
                (String::from("T"), Value::Scalar(0.5)),
            ]
        );
    }

    #[test]
    fn test_parse_positional_frequencies() {
        let user = parse_subcmd::<User>("statefreqs user -t posNuc A=1/0.5/0 C=0/0.5/1");

        assert_eq!(
            user.frequencies[1],
            (String::from("C"), Value::Positions(vec![0.0, 0.5, 1.0]))
        );
    }

    #[test]
    fn test_frequencies_required() {
        assert!(try_parse_subcmd::<User>("statefreqs user -t nuc").is_err());
    }

    #[test]
    fn test_malformed_entry() {
        assert!(try_parse_subcmd::<User>("statefreqs user -t nuc A:0.5").is_err());
        assert!(try_parse_subcmd::<User>("statefreqs user -t nuc A=half").is_err());
    }
}
