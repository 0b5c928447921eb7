use log::info;
use std::time::Duration;

use super::{act, record_events, Driver, DriverError, Summary};
use crate::{
    game::{Game, Phase, Tier},
    player::Player,
};

/// Simulated time the player spends on each decision.
const THINK_TIME: Duration = Duration::from_millis(300);

/// A driver which runs the game on a simulated clock, so a whole game plays out instantly.
pub struct DirectDriver {
    /// The session being played.
    game: Game,
    /// The player making guesses.
    player: Player,
}

impl Driver for DirectDriver {
    fn new(player: Player, game: Game) -> Self {
        DirectDriver { game, player }
    }

    fn play(&mut self, tier: Tier) -> Result<Summary, DriverError> {
        self.game.start(tier)?;

        let mut summary = Summary::default();
        while self.game.phase() != Phase::Ended {
            act(&mut self.game, &mut self.player)?;
            self.game.advance(THINK_TIME)?;
            record_events(&mut self.game, &mut summary);
        }

        info!(
            "Finished {} game: {} correct, {} incorrect, score {}",
            tier, summary.correct, summary.incorrect, summary.score
        );
        Ok(summary)
    }

    fn game(&self) -> &Game {
        &self.game
    }
}
