//! End-of-match statistics and the final score formula.

use crate::config::ScoringConfig;

/// Statistics for one side, read by [`calculate_final_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    /// Ships in a complete fleet.
    pub fleet_size: i64,
    pub enemy_ships_remaining: i64,
    pub own_ships_sunk: i64,
    pub hits_on_enemy: i64,
    pub misses: i64,
    pub scoring: ScoringConfig,
}

/// `(fleet - enemy left) * sink bonus + (fleet - own sunk) * ship bonus
/// - (hits + misses) * guess penalty`. May be negative. Saturates at the
/// `i64` bounds for extreme scoring constants.
pub fn calculate_final_score(stats: &GameStats) -> i64 {
    let scoring = &stats.scoring;
    let sink_bonus = stats
        .fleet_size
        .saturating_sub(stats.enemy_ships_remaining)
        .saturating_mul(scoring.sink_bonus);
    let ship_bonus = stats
        .fleet_size
        .saturating_sub(stats.own_ships_sunk)
        .saturating_mul(scoring.ship_bonus);
    let guess_penalty = stats
        .hits_on_enemy
        .saturating_add(stats.misses)
        .saturating_mul(scoring.guess_penalty);
    sink_bonus
        .saturating_add(ship_bonus)
        .saturating_sub(guess_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_game_without_guesses() {
        let stats = GameStats {
            fleet_size: 5,
            enemy_ships_remaining: 0,
            own_ships_sunk: 0,
            hits_on_enemy: 0,
            misses: 0,
            scoring: ScoringConfig::default(),
        };
        assert_eq!(calculate_final_score(&stats), 5 * 100 + 5 * 50);
    }
}
