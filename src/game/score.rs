use serde::Serialize;

/// Current score and the best score seen this session.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTracker {
    score: u32,
    high_score: u32,
}

impl ScoreTracker {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn record_round_win(&mut self, points: u32) {
        self.score += points;
    }

    /// Fold the current score into the high score. Returns true if it set a new high score.
    /// Call once per finished game, never on quit.
    pub fn finalize_session(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn reset_high_score(&mut self) {
        self.high_score = 0;
    }
}
