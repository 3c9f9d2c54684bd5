use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),

    EndOfInput,
    AttemptsExhausted(u32),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Io(err) => write!(fmt, "console I/O failed: {}", err),
            Error::EndOfInput => write!(fmt, "input closed before a valid guess was entered"),
            Error::AttemptsExhausted(max) => {
                write!(fmt, "no valid guess after {} attempt(s)", max)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}
