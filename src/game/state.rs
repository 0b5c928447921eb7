use serde::Serialize;
use strum::{Display, IntoStaticStr};

use super::Tier;
use crate::{
    color::Color,
    timer::{Delay, Interval},
};

/// Where the game is, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    /// No game in progress (main menu).
    Idle,
    /// The target color is on display.
    Revealing,
    /// The options are on display and guesses are accepted.
    Guessing,
    /// A correct guess is being celebrated before the next round.
    RoundTransition,
    /// Time ran out.
    Ended,
}

/// Outcome of the last guess in the current round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GuessStatus {
    #[default]
    #[strum(serialize = "")]
    #[serde(rename = "")]
    None,
    Correct,
    Incorrect,
}

/// One show-target-then-guess cycle.
#[derive(Debug, Clone)]
pub struct Round {
    pub target: Color,
    pub options: Vec<Color>,
    pub reveal_countdown: u32,
    pub time_remaining: u32,
    pub status: GuessStatus,
}

/// Internal game state. Each variant owns the round and the timers that are live in
/// that phase, so leaving a phase cancels its timers.
#[derive(Debug, Default)]
pub(super) enum Stage {
    #[default]
    Idle,
    Revealing {
        round: Round,
        reveal_tick: Interval,
    },
    Guessing {
        round: Round,
        game_tick: Interval,
    },
    RoundTransition {
        round: Round,
        game_tick: Interval,
        delay: Delay,
        points: u32,
    },
    Ended {
        round: Round,
    },
}

impl Stage {
    pub fn phase(&self) -> Phase {
        match self {
            Stage::Idle => Phase::Idle,
            Stage::Revealing { .. } => Phase::Revealing,
            Stage::Guessing { .. } => Phase::Guessing,
            Stage::RoundTransition { .. } => Phase::RoundTransition,
            Stage::Ended { .. } => Phase::Ended,
        }
    }

    pub fn round(&self) -> Option<&Round> {
        match self {
            Stage::Idle => None,
            Stage::Revealing { round, .. }
            | Stage::Guessing { round, .. }
            | Stage::RoundTransition { round, .. }
            | Stage::Ended { round } => Some(round),
        }
    }
}

/// Everything a presentation layer needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub tier: Option<Tier>,
    /// Only present while the target is being revealed.
    pub target_color: Option<Color>,
    pub options: Vec<Color>,
    pub reveal_countdown: u32,
    pub time_remaining: u32,
    pub score: u32,
    pub high_score: u32,
    pub status: GuessStatus,
}
