// Turn sequencing and scoring properties of the match engine
use swing_core::{calculate_score, replay_log, Player, Scores, TurnEngine, Winner};

fn tick_n(engine: &mut TurnEngine, n: u32) {
    for _ in 0..n {
        engine.tick();
    }
}

#[test]
fn test_score_bullseye() {
    assert_eq!(calculate_score(90), 100, "Bullseye stop scores the maximum");
}

#[test]
fn test_score_opposite_bound() {
    assert_eq!(calculate_score(-90), 0, "Bottom-of-swing stop scores zero");
}

#[test]
fn test_score_center() {
    assert_eq!(calculate_score(0), 10);
}

#[test]
fn test_score_formula_over_reachable_angles() {
    let mut angle = -90;
    while angle <= 90 {
        let score = calculate_score(angle);
        assert!(score <= 100, "Score out of range at angle {}", angle);
        assert_eq!(
            score as i32,
            (100 - (angle - 90).abs()).max(0),
            "Score formula mismatch at angle {}",
            angle
        );
        angle += 2;
    }
}

#[test]
fn test_full_match_player_one_wins() {
    let mut engine = TurnEngine::new();

    // 90 ticks carries the needle from -90 to the +90 bullseye
    tick_n(&mut engine, 90);
    assert_eq!(engine.angle(), 90);
    let first = engine.stop_turn(Player::One).expect("player 1 stop should land");
    assert_eq!(first.score, 100);

    // 45 ticks from the restart leaves player 2 at 0 degrees
    tick_n(&mut engine, 45);
    assert_eq!(engine.angle(), 0);
    let second = engine.stop_turn(Player::Two).expect("player 2 stop should land");
    assert_eq!(second.score, 10);

    assert!(engine.is_finished());
    assert_eq!(engine.winner(), Some(Winner::PlayerOne));
    assert_eq!(engine.winner().unwrap().to_string(), "Player 1 Wins!");
}

#[test]
fn test_full_match_player_two_wins() {
    let mut engine = TurnEngine::new();

    tick_n(&mut engine, 45);
    assert_eq!(engine.stop_turn(Player::One).unwrap().score, 10);

    tick_n(&mut engine, 90);
    assert_eq!(engine.stop_turn(Player::Two).unwrap().score, 100);

    assert_eq!(engine.winner(), Some(Winner::PlayerTwo));
    assert_eq!(engine.winner().unwrap().to_string(), "Player 2 Wins!");
}

#[test]
fn test_full_match_tie() {
    let mut engine = TurnEngine::new();

    tick_n(&mut engine, 90);
    engine.stop_turn(Player::One).unwrap();
    tick_n(&mut engine, 90);
    engine.stop_turn(Player::Two).unwrap();

    assert_eq!(engine.state().scores.player_one, 100);
    assert_eq!(engine.state().scores.player_two, 100);
    assert_eq!(engine.winner(), Some(Winner::Tie));
    assert_eq!(engine.winner().unwrap().to_string(), "It's a Tie!");
}

#[test]
fn test_wrong_player_stop_is_ignored() {
    let mut engine = TurnEngine::new();
    tick_n(&mut engine, 10);

    assert!(engine.stop_turn(Player::Two).is_none());
    assert_eq!(engine.state().scores, Scores::default());
    assert_eq!(engine.current_player(), Player::One);

    // The swing keeps running after the stray trigger
    let before = engine.angle();
    engine.tick();
    assert_ne!(engine.angle(), before);
}

#[test]
fn test_double_stop_does_not_double_record() {
    let mut engine = TurnEngine::new();
    tick_n(&mut engine, 90);

    assert!(engine.stop_turn(Player::One).is_some());
    // Stray repeat trigger: player 1's turn is already over
    assert!(engine.stop_turn(Player::One).is_none());

    assert_eq!(engine.state().scores.player_one, 100);
    assert_eq!(engine.state().scores.player_two, 0);
    assert_eq!(engine.current_player(), Player::Two);
    assert!(!engine.is_finished());
}

#[test]
fn test_stop_after_finish_is_ignored() {
    let mut engine = TurnEngine::new();
    engine.stop_turn(Player::One).unwrap();
    engine.stop_turn(Player::Two).unwrap();
    assert!(engine.is_finished());

    assert!(engine.stop_turn(Player::One).is_none());
    assert!(engine.stop_turn(Player::Two).is_none());
    assert_eq!(engine.winner(), Some(Winner::Tie));
}

#[test]
fn test_turn_restart_resets_needle() {
    let mut engine = TurnEngine::new();
    tick_n(&mut engine, 37);
    engine.stop_turn(Player::One).unwrap();

    // Player 2 starts from the bottom of the swing, moving upward
    assert_eq!(engine.angle(), -90);
    engine.tick();
    assert_eq!(engine.angle(), -88);
}

#[test]
fn test_winner_unavailable_mid_match() {
    let mut engine = TurnEngine::new();
    assert_eq!(engine.winner(), None);
    tick_n(&mut engine, 90);
    engine.stop_turn(Player::One).unwrap();
    assert_eq!(engine.winner(), None);
}

#[test]
fn test_live_match_log_replays_identically() {
    let mut engine = TurnEngine::new();
    tick_n(&mut engine, 152);
    engine.stop_turn(Player::One).expect("player 1 stop should land");
    tick_n(&mut engine, 91);
    engine.stop_turn(Player::Two).expect("player 2 stop should land");

    let live_scores = engine.state().scores;
    let log = engine.into_log(7);

    let out = replay_log(&log);
    assert!(out.valid, "Freshly recorded log should replay cleanly");
    assert_eq!(out.player_one_score, live_scores.player_one);
    assert_eq!(out.player_two_score, live_scores.player_two);
    assert_eq!(out.events_len, 2);
}
