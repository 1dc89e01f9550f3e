use std::io::Write;

use anyhow::Error;

use clap::{ArgAction, Parser, Subcommand};

mod empirical;
use empirical::Empirical;

mod equal;
use equal::Equal;

mod random;
use random::Random;

mod read;
use read::Read;

mod shared;

mod user;
use user::User;

const NAME: &str = env!("CARGO_BIN_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Tools for generating equilibrium state frequencies.
///
/// Frequencies are generated over a basis alphabet ("by"), and converted to the requested output
/// alphabet ("type"). Frequencies are written to stdout, one value per line, unless an output
/// path is given.
#[derive(Debug, Parser)]
#[clap(name = NAME, author = AUTHOR, version = VERSION, about)]
#[clap(subcommand_required = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress warnings.
    ///
    /// By default, only warnings are printed. By setting this flag, warnings will be disabled.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity.
    ///
    /// Flag can be set multiply times to increase verbosity, or left unset for quiet mode.
    #[clap(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print CLI arguments for debugging.
    #[clap(long, hide = true, global = true)]
    debug: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        if self.debug {
            eprintln!("{self:#?}");
        }

        let level = if self.quiet {
            log::LevelFilter::Off
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        match env_logger::Builder::new()
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let level = record.level().as_str().to_lowercase();
                let args = record.args();
                writeln!(buf, "[statefreqs {level:>5}] {args}")
            })
            .try_init()
        {
            Ok(()) => (),
            Err(e) => eprintln!("failed to setup logger: {e}"),
        }

        self.command.run()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Empirical(Empirical),
    Equal(Equal),
    Random(Random),
    Read(Read),
    User(User),
}

impl Command {
    fn run(self) -> Result<(), Error> {
        match self {
            Command::Empirical(empirical) => empirical.run(),
            Command::Equal(equal) => equal.run(),
            Command::Random(random) => random.run(),
            Command::Read(read) => read.run(),
            Command::User(user) => user.run(),
        }
    }
}

macro_rules! impl_try_from_command {
    ($($variant:ident),+) => {
        $(
            impl TryFrom<Command> for $variant {
                type Error = Command;

                fn try_from(command: Command) -> Result<Self, Self::Error> {
                    match command {
                        Command::$variant(subcmd) => Ok(subcmd),
                        command => Err(command),
                    }
                }
            }
        )+
    };
}

impl_try_from_command!(Empirical, Equal, Random, Read, User);

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
