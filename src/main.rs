use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use color_match::{
    config::Config,
    driver::{direct::DirectDriver, realtime::RealtimeDriver, Driver},
    game::Game,
    player::Player,
};

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let config = Config::parse();
    info!("Playing {} {} game(s)", config.games, config.tier);

    let game = match config.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    let player = match config.seed {
        Some(seed) => Player::with_seed(config.accuracy, seed.wrapping_add(1)),
        None => Player::new(config.accuracy, StdRng::from_entropy()),
    };

    let mut driver: Box<dyn Driver> = if config.realtime {
        Box::new(RealtimeDriver::new(player, game))
    } else {
        Box::new(DirectDriver::new(player, game))
    };

    for number in 1..=config.games {
        let summary = driver
            .play(config.tier)
            .with_context(|| format!("failed to play game {}", number))?;
        info!(
            "Game {}: score {}, high score {}",
            number, summary.score, summary.high_score
        );
        debug!(
            "Final state: {}",
            serde_json::to_string(&driver.game().snapshot())?
        );
    }

    Ok(())
}
