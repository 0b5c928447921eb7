use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{color::Color, game::Game};

/// An automated player which memorizes the target and picks the option that looks closest.
#[derive(Debug)]
pub struct Player {
    /// The target as last seen.
    memory: Option<Color>,
    /// Options already guessed this round.
    tried: Vec<Color>,
    /// Chance of picking the closest option rather than a random one.
    accuracy: f64,
    rng: StdRng,
}

impl Default for Player {
    fn default() -> Self {
        Player::new(1.0, StdRng::from_entropy())
    }
}

impl Player {
    pub fn new(accuracy: f64, rng: StdRng) -> Self {
        Player {
            memory: None,
            tried: Vec::new(),
            accuracy: accuracy.clamp(0.0, 1.0),
            rng,
        }
    }

    pub fn with_seed(accuracy: f64, seed: u64) -> Self {
        Player::new(accuracy, StdRng::seed_from_u64(seed))
    }

    /// Look at the screen, remembering the target if it's on display.
    pub fn observe(&mut self, game: &Game) {
        if let Some(target) = game.target_color() {
            if self.memory != Some(target) {
                trace!("Memorizing {}", target);
                self.memory = Some(target);
                self.tried.clear();
            }
        }
    }

    /// Pick an option that hasn't been tried yet this round.
    pub fn choose(&mut self, options: &[Color]) -> Option<Color> {
        let untried = options
            .iter()
            .filter(|c| !self.tried.contains(c))
            .copied()
            .collect::<Vec<_>>();

        let closest = self.memory.and_then(|memory| {
            untried
                .iter()
                .min_by_key(|c| c.distance(&memory))
                .copied()
        });
        let choice = match closest {
            Some(closest) if self.rng.gen_bool(self.accuracy) => Some(closest),
            _ => untried.choose(&mut self.rng).copied(),
        }?;

        debug!("Choosing {} from {} untried options", choice, untried.len());
        self.tried.push(choice);
        Some(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::{
        color::Color,
        game::{Game, Phase},
    };

    #[test]
    fn picks_remembered_color() {
        let mut game = Game::with_seed(1);
        game.start_round("hard").unwrap();
        let mut player = Player::with_seed(1.0, 1);
        player.observe(&game);
        let target = game.target_color().unwrap();

        while game.phase() == Phase::Revealing {
            game.tick().unwrap();
        }
        player.observe(&game);
        assert_eq!(player.choose(game.options()), Some(target));
    }

    #[test]
    fn closest_option() {
        let mut player = Player::with_seed(1.0, 2);
        player.memory = Some(Color::new(100, 100, 100));
        let options = [
            Color::new(0, 0, 0),
            Color::new(101, 99, 100),
            Color::new(200, 200, 200),
        ];
        assert_eq!(player.choose(&options), Some(Color::new(101, 99, 100)));
        // Never the same option twice
        assert_eq!(player.choose(&options), Some(Color::new(0, 0, 0)));
        assert_eq!(player.choose(&options), Some(Color::new(200, 200, 200)));
        assert_eq!(player.choose(&options), None);
    }

    #[test]
    fn guesses_without_memory() {
        let mut player = Player::with_seed(1.0, 3);
        let options = [Color::new(1, 1, 1), Color::new(2, 2, 2)];
        assert!(player.choose(&options).is_some());
        assert!(player.choose(&options).is_some());
        assert_eq!(player.choose(&options), None);
        assert_eq!(player.choose(&[]), None);
    }

    #[test]
    fn new_target_resets_tried() {
        let mut game = Game::with_seed(4);
        let mut player = Player::with_seed(0.0, 4);

        game.start_round("easy").unwrap();
        player.observe(&game);
        let options = game.options().to_vec();
        for _ in 0..options.len() {
            assert!(player.choose(&options).is_some());
        }
        assert_eq!(player.choose(&options), None);

        game.start_round("easy").unwrap();
        player.observe(&game);
        assert!(player.choose(game.options()).is_some());
    }
}
