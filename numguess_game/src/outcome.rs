use numguess_core::{Console, Error};

pub fn is_correct(guess: i64, answer: i64) -> bool {
    guess == answer
}

pub fn outcome_message(player: &str, correct: bool, answer: i64) -> String {
    if correct {
        format!("{} guessed correctly!", player)
    } else {
        format!("{} guessed incorrectly! The answer was {}", player, answer)
    }
}

/// Writes the single outcome line for a finished round.
pub fn print_result<C: Console + ?Sized>(
    console: &mut C,
    player: &str,
    correct: bool,
    answer: i64,
) -> Result<(), Error> {
    console.write_line(&outcome_message(player, correct, answer))
}
