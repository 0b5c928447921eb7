use super::{Game, Phase};
use crate::color::Color;

mod session;

/// The current target, whether or not it's on display.
fn target(game: &Game) -> Color {
    game.stage.round().unwrap().target
}

fn ticks(game: &mut Game, n: u32) {
    for _ in 0..n {
        game.tick().unwrap();
    }
}

/// Start a game on `tier` and let the reveal countdown run out.
fn start_guessing(seed: u64, tier: &str) -> Game {
    let mut game = Game::with_seed(seed);
    game.start_round(tier).unwrap();
    let reveal_secs = game.profile().unwrap().reveal_secs;
    ticks(&mut game, reveal_secs);
    assert_eq!(game.phase(), Phase::Guessing);
    game
}
