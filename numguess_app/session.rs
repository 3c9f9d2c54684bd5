use log::{debug, info};
use numguess_cli::CliConfig;
use numguess_core::Console;
use numguess_game::{Game, GameConfig};
use rand::Rng;
use std::fmt;

use crate::error::NumguessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub played: u32,
    pub won: u32,
}

impl Tally {
    pub fn record(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.won += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "won {} of {} round(s)", self.won, self.played)
    }
}

/// A run of one or more rounds for the same player.
pub struct Session {
    game: Game,
    player: Option<String>,
    rounds: u32,
    tally: Tally,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            game: Game::new(GameConfig {
                max_attempts: config.max_attempts,
            }),
            player: config.name.clone(),
            rounds: config.rounds,
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Plays every configured round. The tally keeps the rounds finished
    /// before an error.
    pub fn run<R, C>(&mut self, rng: &mut R, console: &mut C) -> Result<(), NumguessError>
    where
        R: Rng + ?Sized,
        C: Console + ?Sized,
    {
        for round in 1..=self.rounds {
            debug!("Round {}/{}", round, self.rounds);
            let won = self.game.play(self.player.as_deref(), rng, console)?;
            self.tally.record(won);
        }
        info!("Session over, {}", self.tally);
        Ok(())
    }
}
