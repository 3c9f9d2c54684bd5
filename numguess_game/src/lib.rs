mod answer;
mod game;
mod guess;
mod outcome;
mod range;

pub use answer::generate_answer;
pub use game::{Game, GameConfig, DEFAULT_PLAYER};
pub use guess::{acquire_guess, parse_guess, INVALID_ENTRY, PROMPT};
pub use outcome::{is_correct, outcome_message, print_result};
pub use range::*;
