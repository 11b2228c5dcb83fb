//! Match controller: owns both sides, enforces turn preconditions, keeps the
//! hit/miss bookkeeping and queues events for the caller.

use alloc::collections::vec_deque::{Drain, VecDeque};
use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::MoveGrid;
use crate::combat::{self, Resolution};
use crate::common::{AttackError, CellMark, GridLocation};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::penalty::PenaltyCell;
use crate::score::{calculate_final_score, GameStats};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// A move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Fire at a chosen location.
    Normal(GridLocation),
    /// Fire at a random unattacked, hazard-free ship segment.
    GuaranteedHit,
    /// Set off a random unattacked mine on the opponent's grid.
    GuaranteedMine,
}

/// Notifications produced by the match, drained by the caller.
///
/// For every resolved move the order is: cell marks, penalty, sink (with the
/// reveal of the sunk ship), win, and finally `PlayerMoved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Draw `mark` at `location` on `owner`'s grid.
    CellMarked {
        owner: Side,
        location: GridLocation,
        mark: CellMark,
    },
    /// Show these cells of `owner`'s grid.
    CellsRevealed { owner: Side, cells: Vec<GridLocation> },
    /// `attacker` triggered a hazard.
    PenaltyTriggered { attacker: Side, penalty: PenaltyCell },
    ShipSunk { attacker: Side, location: GridLocation },
    PlayerWon(Side),
    PlayerMoved(Side),
}

/// Bookkeeping for one side: its own grid and its attacks on the opponent.
#[derive(Debug, Clone)]
pub struct SideState {
    grid: Grid,
    performed_moves: MoveGrid,
    hits: usize,
    misses: usize,
    last_penalty: Option<PenaltyCell>,
}

impl SideState {
    fn new(grid: Grid) -> Result<Self, AttackError> {
        let performed_moves = MoveGrid::try_new(grid.width(), grid.height())?;
        Ok(Self {
            grid,
            performed_moves,
            hits: 0,
            misses: 0,
            last_penalty: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Locations this side has attacked on the opponent's grid.
    pub fn performed_moves(&self) -> &MoveGrid {
        &self.performed_moves
    }

    pub fn number_of_hits(&self) -> usize {
        self.hits
    }

    pub fn number_of_misses(&self) -> usize {
        self.misses
    }

    /// Hazard most recently triggered by this side.
    pub fn last_penalty(&self) -> Option<&PenaltyCell> {
        self.last_penalty.as_ref()
    }

    /// Forget counters, performed moves and the last penalty. The grid is
    /// left as is.
    pub fn reset(&mut self) {
        self.hits = 0;
        self.misses = 0;
        self.last_penalty = None;
        self.performed_moves.clear_all();
    }
}

/// A two-sided match. Each grid is only ever changed through attacks by the
/// opposing side.
#[derive(Debug)]
pub struct Match {
    config: GameConfig,
    human: SideState,
    computer: SideState,
    winner: Option<Side>,
    events: VecDeque<GameEvent>,
}

impl Match {
    /// Start a match. Both grids must match the configured size and be
    /// ready to play, hazards included.
    pub fn new(config: GameConfig, human: Grid, computer: Grid) -> Result<Self, AttackError> {
        for grid in [&human, &computer] {
            if grid.width() != config.width
                || grid.height() != config.height
                || !grid.ready_to_play(true, true)
            {
                return Err(AttackError::NotReady);
            }
        }
        log::info!(
            "match started on a {}x{} grid with {} ships per side",
            config.width,
            config.height,
            config.fleet_size()
        );
        Ok(Self {
            config,
            human: SideState::new(human)?,
            computer: SideState::new(computer)?,
            winner: None,
            events: VecDeque::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// (attacker, defender)
    fn sides_mut(&mut self, attacker: Side) -> (&mut SideState, &mut SideState) {
        match attacker {
            Side::Human => (&mut self.human, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.human),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// In bounds and not yet attacked by `attacker`.
    pub fn can_attack(&self, attacker: Side, location: GridLocation) -> bool {
        let defender = self.side(attacker.opponent());
        defender.grid.in_bounds(location)
            && !self
                .side(attacker)
                .performed_moves
                .contains(location)
                .unwrap_or(true)
    }

    /// Dispatch a [`Move`].
    pub fn perform<R: Rng + ?Sized>(
        &mut self,
        attacker: Side,
        mv: Move,
        rng: &mut R,
    ) -> Result<Resolution, AttackError> {
        match mv {
            Move::Normal(location) => self.attack(attacker, location),
            Move::GuaranteedHit => self.guaranteed_hit(attacker, rng),
            Move::GuaranteedMine => self.try_guaranteed_mine(attacker, rng),
        }
    }

    /// Normal attack at `location`. Mines and sea monsters each add a miss;
    /// the ship check then adds a hit or another miss.
    pub fn attack(
        &mut self,
        attacker: Side,
        location: GridLocation,
    ) -> Result<Resolution, AttackError> {
        if self.winner.is_some() {
            return Err(AttackError::MatchOver);
        }
        let (me, foe) = self.sides_mut(attacker);
        if !foe.grid.in_bounds(location) {
            return Err(AttackError::OutOfBounds(location));
        }
        if me.performed_moves.contains(location)? {
            return Err(AttackError::AlreadyAttacked(location));
        }
        me.performed_moves.insert(location)?;

        let res = combat::resolve_attack(&mut foe.grid, location);
        me.hits += res.hits();
        me.misses += res.misses();
        if let Some(penalty) = res.penalty() {
            me.last_penalty = Some(penalty);
        }
        self.publish(attacker, &res, true);
        Ok(res)
    }

    /// Hit a uniformly chosen unattacked ship segment that has no hazard on
    /// it. Fails with `NoCandidates` when no such cell remains.
    pub fn guaranteed_hit<R: Rng + ?Sized>(
        &mut self,
        attacker: Side,
        rng: &mut R,
    ) -> Result<Resolution, AttackError> {
        if self.winner.is_some() {
            return Err(AttackError::MatchOver);
        }
        let (me, foe) = self.sides_mut(attacker);
        let candidates = combat::guaranteed_hit_candidates(&foe.grid, &me.performed_moves);
        if candidates.is_empty() {
            log::warn!("{:?} has no target left for a guaranteed hit", attacker);
            return Err(AttackError::NoCandidates);
        }
        let location = candidates[rng.random_range(0..candidates.len())];
        me.performed_moves.insert(location)?;

        let res = combat::resolve_guaranteed_hit(&mut foe.grid, location);
        me.hits += res.hits();
        self.publish(attacker, &res, true);
        Ok(res)
    }

    /// Set off a random unattacked mine on the opponent's grid. Returns
    /// `false` without changing anything when the opponent has no mines left
    /// or none of them can still be attacked.
    pub fn guaranteed_mine<R: Rng + ?Sized>(&mut self, attacker: Side, rng: &mut R) -> bool {
        self.try_guaranteed_mine(attacker, rng).is_ok()
    }

    fn try_guaranteed_mine<R: Rng + ?Sized>(
        &mut self,
        attacker: Side,
        rng: &mut R,
    ) -> Result<Resolution, AttackError> {
        if self.winner.is_some() {
            return Err(AttackError::MatchOver);
        }
        let (me, foe) = self.sides_mut(attacker);
        if foe.grid.number_of_mines() == 0 {
            return Err(AttackError::NoCandidates);
        }
        let candidates = combat::guaranteed_mine_candidates(&foe.grid, &me.performed_moves);
        if candidates.is_empty() {
            log::warn!("{:?} has no unattacked mine left to set off", attacker);
            return Err(AttackError::NoCandidates);
        }
        let location = candidates[rng.random_range(0..candidates.len())];
        me.performed_moves.insert(location)?;

        let res =
            combat::detonate_mine(&mut foe.grid, location).ok_or(AttackError::NoCandidates)?;
        me.last_penalty = res.penalty();
        // Hit/miss tallies and the sink notification are left untouched.
        self.publish(attacker, &res, false);
        Ok(res)
    }

    fn publish(&mut self, attacker: Side, res: &Resolution, report_sink: bool) {
        let owner = attacker.opponent();
        for (location, mark) in res.marks() {
            self.events.push_back(GameEvent::CellMarked {
                owner,
                location,
                mark,
            });
        }
        if let Some(penalty) = res.penalty() {
            log::info!("{:?} triggered a penalty: {}", attacker, penalty.penalty_text());
            self.events.push_back(GameEvent::PenaltyTriggered { attacker, penalty });
        }
        if report_sink {
            if let Some(idx) = res.sunk {
                log::info!("{:?} sank a ship at {}", attacker, res.location);
                let cells = self.side(owner).grid.ships()[idx].cells().collect();
                self.events.push_back(GameEvent::ShipSunk {
                    attacker,
                    location: res.location,
                });
                self.events.push_back(GameEvent::CellsRevealed { owner, cells });
            }
        }
        if res.won {
            log::info!("{:?} won the match", attacker);
            self.winner = Some(attacker);
            self.events.push_back(GameEvent::PlayerWon(attacker));
        }
        self.events.push_back(GameEvent::PlayerMoved(attacker));
    }

    /// Statistics for `side` as the scoring formula sees them.
    pub fn game_stats(&self, side: Side) -> GameStats {
        let me = self.side(side);
        let foe = self.side(side.opponent());
        GameStats {
            fleet_size: self.config.fleet_size() as i64,
            enemy_ships_remaining: foe.grid.ships_remaining() as i64,
            own_ships_sunk: me.grid.ships_sunk() as i64,
            hits_on_enemy: me.hits as i64,
            misses: me.misses as i64,
            scoring: self.config.scoring,
        }
    }

    pub fn final_score(&self, side: Side) -> i64 {
        calculate_final_score(&self.game_stats(side))
    }
}
