use super::{start_guessing, target, ticks};
use crate::game::{Event, Game, Phase, Tier, TRANSITION_DELAY};

/// Guess right once, then let the clock run out.
fn win_one_round_then_time_out(game: &mut Game) {
    let target = target(game);
    game.submit_guess(&target);
    game.advance(TRANSITION_DELAY).unwrap();
    while game.phase() != Phase::Ended {
        game.tick().unwrap();
    }
}

#[test]
fn high_score_after_game_over() {
    let mut game = start_guessing(20, "hard");
    win_one_round_then_time_out(&mut game);
    assert_eq!(game.score(), 3);
    assert_eq!(game.high_score(), 3);
    assert!(game.drain_events().contains(&Event::GameOver {
        score: 3,
        high_score: 3,
        new_high_score: true
    }));
}

#[test]
fn high_score_persists_across_games_and_tiers() {
    let mut game = start_guessing(21, "hard");
    win_one_round_then_time_out(&mut game);
    assert_eq!(game.high_score(), 3);

    // A new game resets the score but not the high score
    game.start(Tier::Easy).unwrap();
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), 3);

    ticks(&mut game, 6);
    win_one_round_then_time_out(&mut game);
    assert_eq!(game.score(), 1);
    assert_eq!(game.high_score(), 3);
    // Lower scores don't count as a new high score
    assert_eq!(
        game.drain_events().last(),
        Some(&Event::GameOver {
            score: 1,
            high_score: 3,
            new_high_score: false
        })
    );
}

#[test]
fn quit_keeps_high_score() {
    let mut game = start_guessing(22, "medium");
    let target = target(&game);
    game.submit_guess(&target);
    game.advance(TRANSITION_DELAY).unwrap();
    assert_eq!(game.score(), 2);
    assert_eq!(game.high_score(), 0);

    assert!(game.quit());
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.high_score(), 0);
    assert_eq!(game.score(), 2);
    assert!(!game
        .drain_events()
        .iter()
        .any(|e| matches!(e, Event::GameOver { .. })));

    // Already at the menu
    assert!(!game.quit());
}

#[test]
fn quit_after_game_over() {
    let mut game = start_guessing(23, "hard");
    win_one_round_then_time_out(&mut game);
    assert!(game.quit());
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.high_score(), 3);
    assert!(game.options().is_empty());
    assert_eq!(game.time_remaining(), 0);
}

#[test]
fn reset_high_score() {
    let mut game = start_guessing(24, "hard");
    win_one_round_then_time_out(&mut game);
    assert_eq!(game.high_score(), 3);

    // Only from the menu
    assert!(!game.reset_high_score());
    assert_eq!(game.high_score(), 3);

    game.quit();
    assert!(game.reset_high_score());
    assert_eq!(game.high_score(), 0);
    assert!(game.reset_high_score());
    assert_eq!(game.high_score(), 0);
}

#[test]
fn reset_high_score_before_any_game() {
    let mut game = Game::with_seed(25);
    assert!(game.reset_high_score());
    assert_eq!(game.high_score(), 0);
}

#[test]
fn seeded_sessions_repeat() {
    let mut a = Game::with_seed(26);
    let mut b = Game::with_seed(26);
    a.start(Tier::Medium).unwrap();
    b.start(Tier::Medium).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}
