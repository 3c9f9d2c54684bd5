use log::debug;
use numguess_core::{Console, Error};
use rand::Rng;

use crate::answer::generate_answer;
use crate::guess::acquire_guess;
use crate::outcome::{is_correct, print_result};

pub const DEFAULT_PLAYER: &str = "Player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Rejected entries allowed per round, `None` for no limit.
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Plays one round against a fresh answer drawn from `rng` and returns
    /// whether the player guessed it.
    pub fn play<R, C>(
        &self,
        player: Option<&str>,
        rng: &mut R,
        console: &mut C,
    ) -> Result<bool, Error>
    where
        R: Rng + ?Sized,
        C: Console + ?Sized,
    {
        let answer = generate_answer(rng);
        debug!("Answer drawn");
        self.play_with_answer(player, answer, console)
    }

    pub fn play_with_answer<C: Console + ?Sized>(
        &self,
        player: Option<&str>,
        answer: i64,
        console: &mut C,
    ) -> Result<bool, Error> {
        let player = player.unwrap_or(DEFAULT_PLAYER);
        let guess = acquire_guess(console, self.config.max_attempts)?;
        let correct = is_correct(guess, answer);
        debug!("{} guessed {} against {}: {}", player, guess, answer, correct);
        print_result(console, player, correct, answer)?;
        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::{INVALID_ENTRY, PROMPT};
    use numguess_core::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn invalid_entries_then_correct_guess() {
        let mut console = ScriptedConsole::new(vec!["0", "11", "5"]);
        let won = Game::default()
            .play_with_answer(Some("Alice"), 5, &mut console)
            .unwrap();
        assert!(won);
        assert_eq!(
            console.output(),
            [
                PROMPT,
                INVALID_ENTRY,
                PROMPT,
                INVALID_ENTRY,
                PROMPT,
                "Alice guessed correctly!"
            ]
        );
    }

    #[test]
    fn wrong_guess_reveals_answer_for_default_player() {
        let mut console = ScriptedConsole::new(vec!["3"]);
        let won = Game::default()
            .play_with_answer(None, 7, &mut console)
            .unwrap();
        assert!(!won);
        assert_eq!(
            console.output().last().map(String::as_str),
            Some("Player guessed incorrectly! The answer was 7")
        );
    }

    #[test]
    fn result_matches_calculator_for_every_pair() {
        let game = Game::default();
        for answer in 1..=10 {
            for guess in 1..=10 {
                let mut console = ScriptedConsole::new(vec![guess.to_string()]);
                let won = game.play_with_answer(None, answer, &mut console).unwrap();
                assert_eq!(won, is_correct(guess, answer));
            }
        }
    }

    #[test]
    fn play_uses_answer_from_injected_rng() {
        let rng = StdRng::seed_from_u64(2024);
        let expected = generate_answer(&mut rng.clone());

        for guess in 1..=10 {
            let mut console = ScriptedConsole::new(vec![guess.to_string()]);
            let won = Game::default()
                .play(Some("Bob"), &mut rng.clone(), &mut console)
                .unwrap();
            assert_eq!(won, guess == expected);
        }
    }

    #[test]
    fn bounded_game_gives_up() {
        let game = Game::new(GameConfig {
            max_attempts: Some(1),
        });
        assert_eq!(game.config().max_attempts, Some(1));
        assert_eq!(Game::default().config(), &GameConfig::default());
        let mut console = ScriptedConsole::new(vec!["nope", "4"]);
        let err = game.play_with_answer(None, 4, &mut console).unwrap_err();
        assert!(matches!(err, Error::AttemptsExhausted(1)));
        assert_eq!(console.output(), [PROMPT, INVALID_ENTRY]);
    }

    #[test]
    fn closed_input_surfaces() {
        let mut console = ScriptedConsole::default();
        let mut rng = StdRng::seed_from_u64(1);
        let err = Game::default()
            .play(None, &mut rng, &mut console)
            .unwrap_err();
        assert!(matches!(err, Error::EndOfInput));
    }
}
