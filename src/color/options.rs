use log::trace;
use rand::{seq::SliceRandom, Rng};

use super::{perturb, random_color, Color};
use crate::game::{DifficultyProfile, Distractors, GameError};

/// Total candidate draws allowed before giving up on an option set.
pub const MAX_ATTEMPTS: usize = 1000;

/// Share of the tier's color variation used when nudging the target for near-miss distractors.
const NEAR_MISS_SCALE: f64 = 0.25;

/// Build a shuffled set of `profile.option_count` distinct colors containing `target` once.
pub fn build_options<R: Rng + ?Sized>(
    target: &Color,
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Result<Vec<Color>, GameError> {
    let mut options = Vec::with_capacity(profile.option_count);
    options.push(*target);

    let mut attempts = 0;
    while options.len() < profile.option_count {
        if attempts >= MAX_ATTEMPTS {
            return Err(GameError::OptionGenerationExhausted { attempts });
        }
        attempts += 1;

        let candidate = match profile.distractors {
            Distractors::Random => random_color(rng),
            Distractors::NearMiss => perturb(
                target,
                profile.color_variation as f64 * NEAR_MISS_SCALE,
                rng,
            ),
        };
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    trace!("Built {} options in {} attempts", options.len(), attempts);

    options.shuffle(rng);
    Ok(options)
}
