use rand::{rngs::SmallRng, Rng};

use crate::{
    bitboard::MoveGrid,
    combat::Resolution,
    common::{AttackError, PlacementError},
    config::GameConfig,
    game::{Match, Move, Side},
    grid::Grid,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Put the full fleet and the required hazards onto `grid`.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        config: &GameConfig,
    ) -> Result<(), PlacementError>;

    /// Choose the next move given the locations already attacked. `None`
    /// means no move is left.
    fn select_move(&mut self, rng: &mut SmallRng, performed: &MoveGrid) -> Option<Move>;

    /// Inform the player of the result of its own move.
    fn handle_resolution(&mut self, _res: &Resolution) {}

    /// Inform the player of an opponent move against its grid.
    fn handle_opponent_resolution(&mut self, _res: &Resolution) {}
}

/// Computer player: random placement, uniformly random normal attacks.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        config: &GameConfig,
    ) -> Result<(), PlacementError> {
        grid.place_random_fleet(rng, config.required_mines, config.required_seamonsters)
    }

    fn select_move(&mut self, rng: &mut SmallRng, performed: &MoveGrid) -> Option<Move> {
        let open = performed.width() * performed.height() - performed.count_ones();
        if open == 0 {
            return None;
        }
        let pick = rng.random_range(0..open);
        performed.iter_unset().nth(pick).map(Move::Normal)
    }
}

/// Let `player` move for `side`, then hand the result to both players.
/// Rejected moves are returned as errors with the match unchanged.
pub fn take_turn(
    game: &mut Match,
    side: Side,
    player: &mut dyn Player,
    opponent: &mut dyn Player,
    rng: &mut SmallRng,
) -> Result<Resolution, AttackError> {
    let mv = player
        .select_move(rng, game.side(side).performed_moves())
        .ok_or(AttackError::NoCandidates)?;
    let res = game.perform(side, mv, rng)?;
    player.handle_resolution(&res);
    opponent.handle_opponent_resolution(&res);
    Ok(res)
}
