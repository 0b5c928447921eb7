use log::{info, trace};
use std::time::{Duration, Instant};

use super::{act, record_events, Driver, DriverError, Summary};
use crate::{
    game::{Game, Phase, Tier},
    player::Player,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_THINK_TIME: Duration = Duration::from_millis(800);

/// A driver which runs the game against the wall clock, as a person would play it.
pub struct RealtimeDriver {
    /// The session being played.
    game: Game,
    /// The player making guesses.
    player: Player,
    /// How long the player looks at the options before guessing.
    think_time: Duration,
}

impl RealtimeDriver {
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }
}

impl Driver for RealtimeDriver {
    fn new(player: Player, game: Game) -> Self {
        RealtimeDriver {
            game,
            player,
            think_time: DEFAULT_THINK_TIME,
        }
    }

    fn play(&mut self, tier: Tier) -> Result<Summary, DriverError> {
        self.game.start(tier)?;

        let mut summary = Summary::default();
        let mut last_update = Instant::now();
        let mut options_shown_at: Option<Instant> = None;
        loop {
            std::thread::sleep(POLL_INTERVAL);

            let now = Instant::now();
            self.game.advance(now - last_update)?;
            last_update = now;
            record_events(&mut self.game, &mut summary);

            match self.game.phase() {
                Phase::Ended | Phase::Idle => break,
                Phase::Guessing => {
                    let shown_at = *options_shown_at.get_or_insert(now);
                    if now - shown_at >= self.think_time {
                        act(&mut self.game, &mut self.player)?;
                        options_shown_at = None;
                    }
                }
                Phase::Revealing | Phase::RoundTransition => {
                    self.player.observe(&self.game);
                    options_shown_at = None;
                }
            }
            trace!("{}s remaining", self.game.time_remaining());
        }
        record_events(&mut self.game, &mut summary);

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
