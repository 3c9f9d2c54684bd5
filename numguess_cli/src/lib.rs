use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub name: Option<String>,
    pub rounds: u32,
    pub max_attempts: Option<u32>,
    pub seed: Option<u64>,
    pub verbosity: u64,
}

#[derive(Debug)]
pub enum ConfigError {
    Clap(clap::Error),

    InvalidValue { flag: &'static str, value: String },
}

impl From<clap::Error> for ConfigError {
    fn from(err: clap::Error) -> ConfigError {
        ConfigError::Clap(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ConfigError::Clap(err) => write!(fmt, "{}", err),
            ConfigError::InvalidValue { flag, value } => {
                write!(fmt, "invalid value `{}` for --{}", value, flag)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    /// Help and version output travel through clap as errors but are not failures.
    pub fn is_informational(&self) -> bool {
        match self {
            ConfigError::Clap(err) => matches!(
                err.kind,
                clap::ErrorKind::HelpDisplayed | clap::ErrorKind::VersionDisplayed
            ),
            ConfigError::InvalidValue { .. } => false,
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("Numguess")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Guess the number between 1 and 10")
        .arg(
            Arg::with_name("NAME")
                .short("n")
                .long("name")
                .takes_value(true)
                .help("Name shown in the result message"),
        )
        .arg(
            Arg::with_name("ROUNDS")
                .short("r")
                .long("rounds")
                .takes_value(true)
                .help("Number of rounds to play"),
        )
        .arg(
            Arg::with_name("MAX_ATTEMPTS")
                .short("m")
                .long("max-attempts")
                .takes_value(true)
                .help("If specified, a round ends after this many invalid entries"),
        )
        .arg(
            Arg::with_name("SEED")
                .short("s")
                .long("seed")
                .takes_value(true)
                .help("If specified, answers are drawn from a generator seeded with this value"),
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .multiple(true)
                .help("Raise log verbosity, repeat for more"),
        )
}

fn parse_value<T: FromStr>(
    args: &ArgMatches,
    name: &str,
    flag: &'static str,
) -> Result<Option<T>, ConfigError> {
    match args.value_of(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                flag,
                value: raw.to_owned(),
            }),
        None => Ok(None),
    }
}

fn positive(value: Option<u32>, flag: &'static str) -> Result<Option<u32>, ConfigError> {
    match value {
        Some(0) => Err(ConfigError::InvalidValue {
            flag,
            value: "0".to_owned(),
        }),
        other => Ok(other),
    }
}

impl CliConfig {
    /// Reads the configuration from the process arguments. Help and version
    /// requests print and exit here, as clap does; every other problem is
    /// returned.
    pub fn new() -> Result<Self, ConfigError> {
        let result = Self::from_args(std::env::args_os());
        if let Err(err) = &result {
            if let ConfigError::Clap(clap_err) = err {
                if err.is_informational() {
                    clap_err.exit();
                }
            }
        }
        result
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = app().get_matches_from_safe(args)?;

        let name = args
            .value_of("NAME")
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(str::to_owned);
        let rounds = positive(parse_value(&args, "ROUNDS", "rounds")?, "rounds")?.unwrap_or(1);
        let max_attempts = positive(
            parse_value(&args, "MAX_ATTEMPTS", "max-attempts")?,
            "max-attempts",
        )?;
        let seed = parse_value(&args, "SEED", "seed")?;
        let verbosity = args.occurrences_of("VERBOSE");

        Ok(Self {
            name,
            rounds,
            max_attempts,
            seed,
            verbosity,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &CliConfig::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| NAME: {:?}", self.name);
        info!("| ROUNDS: {}", self.rounds);
        info!("| MAX_ATTEMPTS: {:?}", self.max_attempts);
        info!("| SEED: {:?}", self.seed);
        info!("| VERBOSE: {}", self.verbosity);
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            name: None,
            rounds: 1,
            max_attempts: None,
            seed: None,
            verbosity: 0,
        }
    }
}
