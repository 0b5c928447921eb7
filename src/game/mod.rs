use log::{debug, info, trace, warn};
use rand::{rngs::StdRng, SeedableRng};
use std::{mem, time::Duration};
use thiserror::Error;

pub use difficulty::{DifficultyProfile, Distractors, Tier};
pub use score::ScoreTracker;
pub use state::{GuessStatus, Phase, Snapshot};

use crate::{
    color::{build_options, random_color, Color},
    timer::{Delay, Interval, TICK},
};
use state::{Round, Stage};

mod difficulty;
mod score;
mod state;
#[cfg(test)]
mod tests;

/// How long a correct guess is shown before the next round starts.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(500);

/// Failure modes for starting or continuing a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),
    #[error("could not find enough distinct colors after {attempts} attempts")]
    OptionGenerationExhausted { attempts: usize },
}

/// What happened to a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    /// Guesses are only accepted while the options are on display.
    Ignored,
}

/// Notifications for the audio and feedback layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    GameStarted(Tier),
    RoundStarted,
    TargetHidden,
    CorrectGuess,
    IncorrectGuess,
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// A play session: the current game (if any) plus the session high score.
///
/// All input goes through `&mut self`, so ticks and guesses are applied one at a time.
#[derive(Debug)]
pub struct Game {
    stage: Stage,
    /// Tier of the current or most recent game.
    tier: Option<Tier>,
    scores: ScoreTracker,
    events: Vec<Event>,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Start a new session with a randomly seeded color source.
    pub fn new() -> Self {
        Game::with_rng(StdRng::from_entropy())
    }

    /// Start a new session whose colors are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Game::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Game {
            stage: Stage::Idle,
            tier: None,
            scores: ScoreTracker::default(),
            events: Vec::new(),
            rng,
        }
    }

    /// Start a game on the tier with the given identifier.
    pub fn start_round(&mut self, tier_id: &str) -> Result<(), GameError> {
        self.start(Tier::from_id(tier_id)?)
    }

    /// Start a game on the given tier, abandoning any game in progress.
    /// On error the session is left untouched.
    pub fn start(&mut self, tier: Tier) -> Result<(), GameError> {
        let profile = tier.profile();
        let (target, options) = self.draw_colors(profile)?;

        self.tier = Some(tier);
        self.scores.reset_score();
        self.stage = Stage::Revealing {
            round: Round {
                target,
                options,
                reveal_countdown: profile.reveal_secs,
                time_remaining: profile.time_limit_secs,
                status: GuessStatus::None,
            },
            reveal_tick: Interval::new(TICK),
        };

        info!("Started {} game", profile.name);
        self.events.push(Event::GameStarted(tier));
        self.events.push(Event::RoundStarted);
        Ok(())
    }

    /// Guess which option is the target.
    pub fn submit_guess(&mut self, color: &Color) -> GuessOutcome {
        let Some(profile) = self.profile() else {
            return GuessOutcome::Ignored;
        };

        match mem::take(&mut self.stage) {
            Stage::Guessing {
                mut round,
                game_tick,
            } => {
                if *color == round.target {
                    debug!("Correct guess {}", color);
                    round.status = GuessStatus::Correct;
                    self.stage = Stage::RoundTransition {
                        round,
                        game_tick,
                        delay: Delay::new(TRANSITION_DELAY),
                        points: profile.points_per_correct,
                    };
                    self.events.push(Event::CorrectGuess);
                    GuessOutcome::Correct
                } else {
                    debug!("Incorrect guess {} (target {})", color, round.target);
                    round.status = GuessStatus::Incorrect;
                    self.stage = Stage::Guessing { round, game_tick };
                    self.events.push(Event::IncorrectGuess);
                    GuessOutcome::Incorrect
                }
            }
            stage => {
                trace!("Ignoring guess during {}", stage.phase());
                self.stage = stage;
                GuessOutcome::Ignored
            }
        }
    }

    /// Abandon the current game and return to the menu. The score is not counted towards the
    /// high score. Returns false if there was nothing to quit.
    pub fn quit(&mut self) -> bool {
        if let Stage::Idle = self.stage {
            return false;
        }
        debug!("Quit during {}", self.phase());
        self.stage = Stage::Idle;
        true
    }

    /// Clear the session high score. Only allowed from the menu.
    pub fn reset_high_score(&mut self) -> bool {
        if let Stage::Idle = self.stage {
            self.scores.reset_high_score();
            true
        } else {
            false
        }
    }

    /// Let one second of game time pass.
    pub fn tick(&mut self) -> Result<(), GameError> {
        self.advance(TICK)
    }

    /// Let `elapsed` of game time pass, firing every timer that falls due in order.
    pub fn advance(&mut self, elapsed: Duration) -> Result<(), GameError> {
        let mut remaining = elapsed;
        while let Some(next) = self.next_deadline() {
            let step = next.min(remaining);
            self.step(step)?;
            remaining -= step;
            if remaining.is_zero() {
                break;
            }
        }
        Ok(())
    }

    /// Time until the next live timer fires, if any are live.
    fn next_deadline(&self) -> Option<Duration> {
        match &self.stage {
            Stage::Revealing { reveal_tick, .. } => Some(reveal_tick.until_next()),
            Stage::Guessing { game_tick, .. } => Some(game_tick.until_next()),
            Stage::RoundTransition {
                game_tick, delay, ..
            } => Some(game_tick.until_next().min(delay.remaining())),
            Stage::Idle | Stage::Ended { .. } => None,
        }
    }

    /// Move the live timers forward by at most the time to the next deadline.
    fn step(&mut self, by: Duration) -> Result<(), GameError> {
        match &mut self.stage {
            Stage::Revealing { reveal_tick, .. } => {
                if reveal_tick.advance(by) > 0 {
                    self.reveal_tick();
                }
            }
            Stage::Guessing { game_tick, .. } => {
                if game_tick.advance(by) > 0 {
                    self.game_tick();
                }
            }
            Stage::RoundTransition {
                game_tick, delay, ..
            } => {
                let tick_due = game_tick.advance(by) > 0;
                let delay_due = delay.advance(by);
                // Running out of time wins over a pending round change
                if tick_due {
                    self.game_tick();
                }
                if delay_due && self.phase() == Phase::RoundTransition {
                    self.next_round()?;
                }
            }
            Stage::Idle | Stage::Ended { .. } => {}
        }
        Ok(())
    }

    fn reveal_tick(&mut self) {
        let Stage::Revealing { round, .. } = &mut self.stage else {
            return;
        };
        round.reveal_countdown = round.reveal_countdown.saturating_sub(1);
        trace!("Reveal countdown {}", round.reveal_countdown);
        if round.reveal_countdown > 0 {
            return;
        }

        if let Stage::Revealing { round, .. } = mem::take(&mut self.stage) {
            debug!("Target hidden, {}s remaining", round.time_remaining);
            self.stage = Stage::Guessing {
                round,
                game_tick: Interval::new(TICK),
            };
            self.events.push(Event::TargetHidden);
        }
    }

    fn game_tick(&mut self) {
        let expired = match &mut self.stage {
            Stage::Guessing { round, .. } | Stage::RoundTransition { round, .. } => {
                round.time_remaining = round.time_remaining.saturating_sub(1);
                trace!("Time remaining {}", round.time_remaining);
                round.time_remaining == 0
            }
            _ => false,
        };
        if expired {
            self.end_game();
        }
    }

    /// Start the next round after a correct guess.
    fn next_round(&mut self) -> Result<(), GameError> {
        let Some(profile) = self.profile() else {
            warn!("No difficulty selected, ending the game");
            self.end_game();
            return Ok(());
        };
        let (target, options) = match self.draw_colors(profile) {
            Ok(colors) => colors,
            Err(e) => {
                warn!("Could not start next round: {}", e);
                self.end_game();
                return Err(e);
            }
        };

        if let Stage::RoundTransition { round, points, .. } = mem::take(&mut self.stage) {
            self.scores.record_round_win(points);
            self.stage = Stage::Revealing {
                round: Round {
                    target,
                    options,
                    reveal_countdown: profile.reveal_secs,
                    time_remaining: round.time_remaining,
                    status: GuessStatus::None,
                },
                reveal_tick: Interval::new(TICK),
            };
            debug!("Next round, score {}", self.scores.score());
            self.events.push(Event::RoundStarted);
        }
        Ok(())
    }

    /// Finish the game and fold its score into the high score.
    fn end_game(&mut self) {
        let round = match mem::take(&mut self.stage) {
            Stage::RoundTransition { round, points, .. } => {
                // The guess landed before time ran out
                self.scores.record_round_win(points);
                round
            }
            Stage::Revealing { round, .. } | Stage::Guessing { round, .. } => round,
            stage => {
                self.stage = stage;
                return;
            }
        };

        let new_high_score = self.scores.finalize_session();
        info!(
            "Game over, score {} (high score {})",
            self.scores.score(),
            self.scores.high_score()
        );
        self.events.push(Event::GameOver {
            score: self.scores.score(),
            high_score: self.scores.high_score(),
            new_high_score,
        });
        self.stage = Stage::Ended { round };
    }

    fn draw_colors(
        &mut self,
        profile: &DifficultyProfile,
    ) -> Result<(Color, Vec<Color>), GameError> {
        let target = random_color(&mut self.rng);
        let options = build_options(&target, profile, &mut self.rng)?;
        Ok((target, options))
    }

    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn profile(&self) -> Option<&'static DifficultyProfile> {
        self.tier.map(|tier| tier.profile())
    }

    /// Whether the target color is currently on display.
    pub fn is_revealed(&self) -> bool {
        self.phase() == Phase::Revealing
    }

    /// The target color, but only while it's on display.
    pub fn target_color(&self) -> Option<Color> {
        match &self.stage {
            Stage::Revealing { round, .. } => Some(round.target),
            _ => None,
        }
    }

    pub fn options(&self) -> &[Color] {
        self.stage
            .round()
            .map(|round| round.options.as_slice())
            .unwrap_or_default()
    }

    pub fn reveal_countdown(&self) -> u32 {
        self.stage
            .round()
            .map(|round| round.reveal_countdown)
            .unwrap_or_default()
    }

    pub fn time_remaining(&self) -> u32 {
        self.stage
            .round()
            .map(|round| round.time_remaining)
            .unwrap_or_default()
    }

    pub fn status(&self) -> GuessStatus {
        self.stage
            .round()
            .map(|round| round.status)
            .unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }

    /// Take the notifications queued since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            tier: self.tier,
            target_color: self.target_color(),
            options: self.options().to_vec(),
            reveal_countdown: self.reveal_countdown(),
            time_remaining: self.time_remaining(),
            score: self.score(),
            high_score: self.high_score(),
            status: self.status(),
        }
    }
}
