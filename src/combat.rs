//! Attack resolution against a single grid.
//!
//! Resolution always runs in the same order: mine, sea monster, ship, then
//! the sink check and the win check. The hazard checks and the ship check are
//! independent, so one attack can yield several outcomes and several tally
//! increments.

use alloc::vec::Vec;

use crate::bitboard::MoveGrid;
use crate::common::{CellMark, GridLocation};
use crate::grid::Grid;
use crate::penalty::{Mine, PenaltyCell, SeaMonster};

/// One effect of an attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    /// A mine went off. Counts as a miss.
    MineHit(Mine),
    /// A sea monster was disturbed. Counts as a miss.
    MonsterHit(SeaMonster),
    /// A ship segment was hit. `ship` indexes [`Grid::ships`].
    ShipHit { ship: usize, cell: GridLocation },
    /// No ship segment at the target. Counts as a miss.
    Miss(GridLocation),
}

impl AttackOutcome {
    /// Render mark and the cell it belongs on.
    pub fn mark(&self) -> (GridLocation, CellMark) {
        match self {
            AttackOutcome::MineHit(mine) => (mine.location(), CellMark::MineHit),
            AttackOutcome::MonsterHit(monster) => (monster.location(), CellMark::SeaMonsterHit),
            AttackOutcome::ShipHit { cell, .. } => (*cell, CellMark::ShipHit),
            AttackOutcome::Miss(cell) => (*cell, CellMark::Miss),
        }
    }
}

/// Everything a resolved attack did to the target grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub location: GridLocation,
    /// Outcomes in evaluation order.
    pub outcomes: Vec<AttackOutcome>,
    /// Index of the ship at `location` if it is now sunk.
    pub sunk: Option<usize>,
    /// Every ship on the target grid is sunk.
    pub won: bool,
    /// Whether the outcomes feed the attacker's hit and miss tallies. False
    /// for a guaranteed-mine detonation.
    pub tallied: bool,
}

impl Resolution {
    fn new(location: GridLocation) -> Self {
        Self {
            location,
            outcomes: Vec::new(),
            sunk: None,
            won: false,
            tallied: true,
        }
    }

    fn ship_hits(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, AttackOutcome::ShipHit { .. }))
            .count()
    }

    /// Hit tally contributed by this attack.
    pub fn hits(&self) -> usize {
        if self.tallied {
            self.ship_hits()
        } else {
            0
        }
    }

    /// Miss tally contributed by this attack. A hazard and an empty cell at
    /// the same location each count, so this can be 2 or 3.
    pub fn misses(&self) -> usize {
        if self.tallied {
            self.outcomes.len() - self.ship_hits()
        } else {
            0
        }
    }

    /// A ship segment was hit, whether or not it is tallied.
    pub fn is_ship_hit(&self) -> bool {
        self.ship_hits() > 0
    }

    /// The last hazard triggered by this attack, if any.
    pub fn penalty(&self) -> Option<PenaltyCell> {
        self.outcomes.iter().rev().find_map(|o| match o {
            AttackOutcome::MineHit(mine) => Some(PenaltyCell::Mine(mine.clone())),
            AttackOutcome::MonsterHit(monster) => Some(PenaltyCell::SeaMonster(monster.clone())),
            _ => None,
        })
    }

    /// Render marks in evaluation order.
    pub fn marks(&self) -> impl Iterator<Item = (GridLocation, CellMark)> + '_ {
        self.outcomes.iter().map(AttackOutcome::mark)
    }
}

/// Resolve a normal cannon shot at `location`. The caller has already checked
/// that `location` is in bounds and not yet attacked.
pub fn resolve_attack(grid: &mut Grid, location: GridLocation) -> Resolution {
    let mut res = Resolution::new(location);

    if let Some(mine) = grid.mine_at(location) {
        res.outcomes.push(AttackOutcome::MineHit(mine.clone()));
    }
    if let Some(monster) = grid.seamonster_at(location) {
        res.outcomes.push(AttackOutcome::MonsterHit(monster.clone()));
    }
    match grid.fire_cannon(location) {
        Some(ship) => res.outcomes.push(AttackOutcome::ShipHit {
            ship,
            cell: location,
        }),
        None => res.outcomes.push(AttackOutcome::Miss(location)),
    }

    finish(grid, res)
}

/// Resolve a shot that skips the hazard checks. Used by the guaranteed-hit
/// move, whose target is known to hold a ship segment and no hazard.
pub fn resolve_guaranteed_hit(grid: &mut Grid, location: GridLocation) -> Resolution {
    let mut res = Resolution::new(location);
    if let Some(ship) = grid.fire_cannon(location) {
        res.outcomes.push(AttackOutcome::ShipHit {
            ship,
            cell: location,
        });
    }
    finish(grid, res)
}

/// Set off the mine at `location` and fire the cannon there. Used by the
/// guaranteed-mine move; consumes one of the grid's remaining mines. The
/// result is not tallied.
pub fn detonate_mine(grid: &mut Grid, location: GridLocation) -> Option<Resolution> {
    let mine = grid.mine_at(location)?.clone();
    grid.consume_mine();
    let mut res = Resolution::new(location);
    res.tallied = false;
    res.outcomes.push(AttackOutcome::MineHit(mine));
    if let Some(ship) = grid.fire_cannon(location) {
        res.outcomes.push(AttackOutcome::ShipHit {
            ship,
            cell: location,
        });
    }
    Some(finish(grid, res))
}

fn finish(grid: &Grid, mut res: Resolution) -> Resolution {
    if grid.check_sink(res.location) {
        res.sunk = grid.cell(res.location).and_then(|c| c.ship);
    }
    res.won = grid.check_for_win();
    log::debug!(
        "attack at {} -> {:?} (sunk: {:?}, won: {})",
        res.location,
        res.outcomes,
        res.sunk,
        res.won
    );
    res
}

/// Unattacked, hazard-free cells holding a ship segment.
pub fn guaranteed_hit_candidates(grid: &Grid, performed: &MoveGrid) -> Vec<GridLocation> {
    performed
        .iter_unset()
        .filter(|&loc| {
            grid.cell(loc)
                .map_or(false, |c| c.ship.is_some() && c.is_hazard_free())
        })
        .collect()
}

/// Unattacked cells holding a mine.
pub fn guaranteed_mine_candidates(grid: &Grid, performed: &MoveGrid) -> Vec<GridLocation> {
    performed
        .iter_unset()
        .filter(|&loc| grid.mine_at(loc).is_some())
        .collect()
}
