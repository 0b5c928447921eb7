use clap::Parser;

use crate::game::Tier;

/// Let a bot play the color matching game.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "color-match")]
pub struct Config {
    /// Difficulty tier (easy, medium or hard)
    #[arg(default_value = "medium", value_parser = parse_tier)]
    pub tier: Tier,

    /// Number of consecutive games to play in the session
    #[arg(long, default_value_t = 3)]
    pub games: u32,

    /// Seed for reproducible colors and guesses
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance the player picks the option closest to the target it remembers
    #[arg(long, default_value_t = 0.8, value_parser = parse_accuracy)]
    pub accuracy: f64,

    /// Play against the wall clock rather than a simulated one
    #[arg(long)]
    pub realtime: bool,
}

fn parse_tier(id: &str) -> Result<Tier, String> {
    Tier::from_id(id).map_err(|e| e.to_string())
}

fn parse_accuracy(value: &str) -> Result<f64, String> {
    let accuracy: f64 = value
        .parse()
        .map_err(|_| format!("{:?} is not a number", value))?;
    if (0.0..=1.0).contains(&accuracy) {
        Ok(accuracy)
    } else {
        Err("must be between 0 and 1".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Config;
    use crate::game::Tier;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("main").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            Config {
                tier: Tier::Medium,
                games: 3,
                seed: None,
                accuracy: 0.8,
                realtime: false,
            }
        );
    }

    #[test]
    fn all_options() {
        let config = parse(&[
            "hard",
            "--games",
            "5",
            "--seed",
            "42",
            "--accuracy",
            "0.5",
            "--realtime",
        ])
        .unwrap();
        assert_eq!(
            config,
            Config {
                tier: Tier::Hard,
                games: 5,
                seed: Some(42),
                accuracy: 0.5,
                realtime: true,
            }
        );
    }

    #[test]
    fn bad_options() {
        assert!(parse(&["impossible"]).is_err());
        assert!(parse(&["--games"]).is_err());
        assert!(parse(&["--games", "many"]).is_err());
        assert!(parse(&["--accuracy", "1.5"]).is_err());
        assert!(parse(&["--accuracy", "lots"]).is_err());
        assert!(parse(&["--fast"]).is_err());
    }
}
