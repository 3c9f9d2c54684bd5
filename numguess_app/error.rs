use std::fmt;

use numguess_cli::ConfigError;

#[derive(Debug)]
pub enum NumguessError {
    Core(numguess_core::Error),
    Config(ConfigError),
}

impl NumguessError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Core(numguess_core::Error::EndOfInput) => 0,
            Self::Core(_) => 1,
        }
    }
}

impl From<numguess_core::Error> for NumguessError {
    fn from(err: numguess_core::Error) -> NumguessError {
        NumguessError::Core(err)
    }
}

impl From<ConfigError> for NumguessError {
    fn from(err: ConfigError) -> NumguessError {
        NumguessError::Config(err)
    }
}

impl fmt::Display for NumguessError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Core(err) => write!(fmt, "{}", err),
            Self::Config(err) => write!(fmt, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let closed: NumguessError = numguess_core::Error::EndOfInput.into();
        assert_eq!(closed.exit_code(), 0);

        let exhausted: NumguessError = numguess_core::Error::AttemptsExhausted(3).into();
        assert_eq!(exhausted.exit_code(), 1);

        let config: NumguessError = ConfigError::InvalidValue {
            flag: "rounds",
            value: "x".to_owned(),
        }
        .into();
        assert_eq!(config.exit_code(), 2);
        assert_eq!(config.to_string(), "invalid value `x` for --rounds");

        let usage = numguess_cli::CliConfig::from_args(vec!["numguess", "--rounds"])
            .map_err(NumguessError::from)
            .unwrap_err();
        assert_eq!(usage.exit_code(), 2);
    }
}
