use log::{debug, info};
use thiserror::Error;

use crate::{
    game::{Event, Game, GameError, GuessOutcome, Phase, Tier},
    player::Player,
};

pub mod direct;
pub mod realtime;

/// Defines a driver that lets a player play games against a clock.
pub trait Driver {
    /// Construct a new instance of the driver with the given player.
    fn new(player: Player, game: Game) -> Self
    where
        Self: Sized;

    /// Play one game on the given tier until time runs out.
    fn play(&mut self, tier: Tier) -> Result<Summary, DriverError>;

    /// The session being played.
    fn game(&self) -> &Game;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("game error: {0}")]
    Game(#[from] GameError),
    #[error("player ran out of options to guess")]
    NoOptions,
}

/// Tally of a finished game.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub score: u32,
    pub high_score: u32,
    pub correct: u32,
    pub incorrect: u32,
}

/// Let the player look at the game and make a guess if one is wanted.
fn act(game: &mut Game, player: &mut Player) -> Result<(), DriverError> {
    player.observe(game);
    if game.phase() != Phase::Guessing {
        return Ok(());
    }
    let choice = player.choose(game.options()).ok_or(DriverError::NoOptions)?;
    match game.submit_guess(&choice) {
        GuessOutcome::Correct => debug!("Guessed {} correctly", choice),
        GuessOutcome::Incorrect => debug!("Guessed {} wrongly", choice),
        GuessOutcome::Ignored => {}
    }
    Ok(())
}

/// Fold the game's notifications into the running tally. This is where sounds and
/// effects would be triggered.
fn record_events(game: &mut Game, summary: &mut Summary) {
    for event in game.drain_events() {
        match event {
            Event::CorrectGuess => summary.correct += 1,
            Event::IncorrectGuess => summary.incorrect += 1,
            Event::GameOver {
                score,
                high_score,
                new_high_score,
            } => {
                summary.score = score;
                summary.high_score = high_score;
                if new_high_score {
                    info!("New high score: {}", high_score);
                }
            }
            Event::GameStarted(_) | Event::RoundStarted | Event::TargetHidden => {}
        }
    }
}
