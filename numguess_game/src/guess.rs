use log::{debug, trace};
use numguess_core::{Console, Error};

use crate::range::in_range;

pub const PROMPT: &str = "Guess a number between 1 and 10:";
pub const INVALID_ENTRY: &str = "Invalid entry, please try again.";

/// Parses one line of input as a guess. Anything that is not a valid integer
/// in range, including text and overflowing numbers, yields `None`.
pub fn parse_guess(line: &str) -> Option<i64> {
    line.trim().parse::<i64>().ok().filter(|x| in_range(*x))
}

/// Prompts until a valid guess is entered.
///
/// With `max_attempts` set, gives up with [`Error::AttemptsExhausted`] after
/// that many rejected entries. A closed input stream ends the loop with
/// [`Error::EndOfInput`].
pub fn acquire_guess<C: Console + ?Sized>(
    console: &mut C,
    max_attempts: Option<u32>,
) -> Result<i64, Error> {
    let mut rejected: u32 = 0;
    loop {
        console.write_line(PROMPT)?;
        let line = match console.read_line()? {
            Some(line) => line,
            None => return Err(Error::EndOfInput),
        };
        trace!("Raw guess {:?}", line);

        if let Some(guess) = parse_guess(&line) {
            debug!("Accepted guess {} after {} rejection(s)", guess, rejected);
            return Ok(guess);
        }

        rejected += 1;
        debug!("Rejected entry {:?} ({})", line, rejected);
        console.write_line(INVALID_ENTRY)?;

        if let Some(max) = max_attempts {
            if rejected >= max {
                return Err(Error::AttemptsExhausted(max));
            }
        }
    }
}
