use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use super::GameError;

/// How the wrong options in a round are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distractors {
    /// Unrelated random colors.
    Random,
    /// Small perturbations of the target color.
    NearMiss,
}

/// Timing and scoring parameters for a difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Name shown to the player.
    pub name: &'static str,
    /// Seconds of guessing time for the whole game.
    pub time_limit_secs: u32,
    /// Seconds the target color is shown at the start of each round.
    pub reveal_secs: u32,
    pub points_per_correct: u32,
    /// Magnitude of per-channel perturbation for near-miss distractors.
    pub color_variation: u32,
    /// Number of options per round, the target included.
    pub option_count: usize,
    pub distractors: Distractors,
}

const EASY: DifficultyProfile = DifficultyProfile {
    name: "Easy",
    time_limit_secs: 45,
    reveal_secs: 6,
    points_per_correct: 1,
    color_variation: 60,
    option_count: 6,
    distractors: Distractors::Random,
};

const MEDIUM: DifficultyProfile = DifficultyProfile {
    name: "Medium",
    time_limit_secs: 30,
    reveal_secs: 3,
    points_per_correct: 2,
    color_variation: 40,
    option_count: 6,
    distractors: Distractors::Random,
};

const HARD: DifficultyProfile = DifficultyProfile {
    name: "Hard",
    time_limit_secs: 20,
    reveal_secs: 2,
    points_per_correct: 3,
    color_variation: 10,
    option_count: 6,
    distractors: Distractors::NearMiss,
};

/// A selectable difficulty level, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Look up a tier by its identifier (`easy`, `medium` or `hard`).
    pub fn from_id(id: &str) -> Result<Self, GameError> {
        serde_plain::from_str(id).map_err(|_| GameError::UnknownDifficulty(id.to_owned()))
    }

    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        match self {
            Tier::Easy => &EASY,
            Tier::Medium => &MEDIUM,
            Tier::Hard => &HARD,
        }
    }
}
