use pirate_fleet::{calculate_final_score, GameStats, ScoringConfig};

fn stats(
    enemy_ships_remaining: i64,
    own_ships_sunk: i64,
    hits_on_enemy: i64,
    misses: i64,
) -> GameStats {
    GameStats {
        fleet_size: 5,
        enemy_ships_remaining,
        own_ships_sunk,
        hits_on_enemy,
        misses,
        scoring: ScoringConfig::default(),
    }
}

#[test]
fn test_mid_game_score() {
    // 3 * 100 + 4 * 50 - 15 * 2
    assert_eq!(calculate_final_score(&stats(2, 1, 10, 5)), 470);
}

#[test]
fn test_score_can_go_negative() {
    // 0 * 100 + 0 * 50 - 64 * 2
    assert_eq!(calculate_final_score(&stats(5, 5, 10, 54)), -128);
}

#[test]
fn test_custom_constants() {
    let mut s = stats(0, 0, 17, 3);
    s.scoring = ScoringConfig {
        sink_bonus: 10,
        ship_bonus: 0,
        guess_penalty: 1,
    };
    assert_eq!(calculate_final_score(&s), 50 - 20);
}

#[test]
fn test_extreme_constants_saturate() {
    let mut s = stats(0, 0, 10, 5);
    s.scoring.sink_bonus = i64::MAX;
    // Bonuses pin at the maximum before the guess penalty is taken off.
    assert_eq!(calculate_final_score(&s), i64::MAX - 30);

    let mut s = stats(5, 5, 10, 5);
    s.scoring.guess_penalty = i64::MAX;
    assert_eq!(calculate_final_score(&s), i64::MIN + 1);
}
