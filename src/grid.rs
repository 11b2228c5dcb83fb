//! Per-player grid: cell occupancy, placement validation and quotas.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{ConfigError, GridLocation, Orientation, PlacementError};
use crate::config::GameConfig;
use crate::penalty::{Mine, SeaMonster, DEFAULT_MINE_TEXT, DEFAULT_SEAMONSTER_TEXT};
use crate::ship::Ship;

/// One grid cell. The three slots are independent: a cell may be part of a
/// ship and hold a mine and a sea monster at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Index into [`Grid::ships`].
    pub ship: Option<usize>,
    pub mine: Option<Mine>,
    pub seamonster: Option<SeaMonster>,
}

impl Cell {
    /// No mine and no sea monster.
    pub fn is_hazard_free(&self) -> bool {
        self.mine.is_none() && self.seamonster.is_none()
    }
}

/// A player's board. Entities are committed once during setup and never
/// moved; only ship hit state changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    config: GameConfig,
    mines_placed: usize,
    seamonsters_placed: usize,
    remaining_mines: usize,
}

impl Grid {
    /// Create an empty grid sized and constrained by `config`.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Grid {
            width: config.width,
            height: config.height,
            cells: alloc::vec![Cell::default(); config.width * config.height],
            ships: Vec::new(),
            config: config.clone(),
            mines_placed: 0,
            seamonsters_placed: 0,
            remaining_mines: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, loc: GridLocation) -> bool {
        loc.x >= 0 && loc.y >= 0 && (loc.x as usize) < self.width && (loc.y as usize) < self.height
    }

    fn index(&self, loc: GridLocation) -> Option<usize> {
        if self.in_bounds(loc) {
            Some(loc.y as usize * self.width + loc.x as usize)
        } else {
            None
        }
    }

    /// The cell at `loc`, or `None` when out of bounds.
    pub fn cell(&self, loc: GridLocation) -> Option<&Cell> {
        self.index(loc).map(|i| &self.cells[i])
    }

    /// Every in-bounds location, row by row.
    pub fn locations(&self) -> impl Iterator<Item = GridLocation> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| GridLocation::new(x, y)))
    }

    /// Committed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_at(&self, loc: GridLocation) -> Option<&Ship> {
        self.cell(loc)
            .and_then(|c| c.ship)
            .map(|idx| &self.ships[idx])
    }

    pub fn mine_at(&self, loc: GridLocation) -> Option<&Mine> {
        self.cell(loc).and_then(|c| c.mine.as_ref())
    }

    pub fn seamonster_at(&self, loc: GridLocation) -> Option<&SeaMonster> {
        self.cell(loc).and_then(|c| c.seamonster.as_ref())
    }

    /// Commit `ship` if every cell is in bounds and free of other ships and
    /// the quota for its length is not yet filled. Nothing changes on error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let mut indices = Vec::with_capacity(ship.length());
        for loc in ship.cells() {
            let idx = self.index(loc).ok_or(PlacementError::OutOfBounds(loc))?;
            if self.cells[idx].ship.is_some() {
                return Err(PlacementError::ShipOverlaps(loc));
            }
            indices.push(idx);
        }
        if self.ships_of_length(ship.length()) >= self.config.required_ships_of_length(ship.length()) {
            return Err(PlacementError::QuotaExceeded);
        }

        let ship_idx = self.ships.len();
        for idx in indices {
            self.cells[idx].ship = Some(ship_idx);
        }
        log::debug!("ship of length {} placed at {}", ship.length(), ship.location());
        self.ships.push(ship);
        Ok(())
    }

    /// Commit `mine` unless its cell is out of bounds, already mined, or the
    /// mine quota is filled. Mines may share a cell with a ship.
    pub fn add_mine(&mut self, mine: Mine) -> Result<(), PlacementError> {
        let loc = mine.location();
        let idx = self.index(loc).ok_or(PlacementError::OutOfBounds(loc))?;
        if self.cells[idx].mine.is_some() {
            return Err(PlacementError::MineOverlaps(loc));
        }
        if self.mines_placed >= self.config.required_mines {
            return Err(PlacementError::QuotaExceeded);
        }
        self.cells[idx].mine = Some(mine);
        self.mines_placed += 1;
        self.remaining_mines += 1;
        log::debug!("mine placed at {}", loc);
        Ok(())
    }

    /// Commit `monster` unless its cell is out of bounds, already holds a sea
    /// monster, or the sea monster quota is filled.
    pub fn add_seamonster(&mut self, monster: SeaMonster) -> Result<(), PlacementError> {
        let loc = monster.location();
        let idx = self.index(loc).ok_or(PlacementError::OutOfBounds(loc))?;
        if self.cells[idx].seamonster.is_some() {
            return Err(PlacementError::SeaMonsterOverlaps(loc));
        }
        if self.seamonsters_placed >= self.config.required_seamonsters {
            return Err(PlacementError::QuotaExceeded);
        }
        self.cells[idx].seamonster = Some(monster);
        self.seamonsters_placed += 1;
        log::debug!("sea monster placed at {}", loc);
        Ok(())
    }

    fn ships_of_length(&self, length: usize) -> usize {
        self.ships.iter().filter(|s| s.length() == length).count()
    }

    /// Every ship quota is exactly met.
    pub fn has_required_ships(&self) -> bool {
        self.ships.len() == self.config.fleet_size()
            && self.config.required_ships.iter().all(|q| {
                self.ships_of_length(q.length) == self.config.required_ships_of_length(q.length)
            })
    }

    pub fn has_required_mines(&self) -> bool {
        self.mines_placed == self.config.required_mines
    }

    pub fn has_required_seamonsters(&self) -> bool {
        self.seamonsters_placed == self.config.required_seamonsters
    }

    /// Ships are always checked; hazards only when asked to.
    pub fn ready_to_play(&self, check_mines: bool, check_monsters: bool) -> bool {
        let mines_ready = !check_mines || self.has_required_mines();
        let monsters_ready = !check_monsters || self.has_required_seamonsters();
        self.has_required_ships() && mines_ready && monsters_ready
    }

    /// Mines still available to a guaranteed-mine move.
    pub fn number_of_mines(&self) -> usize {
        self.remaining_mines
    }

    pub fn number_of_seamonsters(&self) -> usize {
        self.seamonsters_placed
    }

    pub(crate) fn consume_mine(&mut self) {
        self.remaining_mines = self.remaining_mines.saturating_sub(1);
    }

    /// Fire at `loc`: a ship segment there is marked hit. Returns the index of
    /// the ship that was hit, if any.
    pub fn fire_cannon(&mut self, loc: GridLocation) -> Option<usize> {
        let ship_idx = self.cell(loc)?.ship?;
        self.ships[ship_idx].register_hit(loc);
        Some(ship_idx)
    }

    /// Whether the ship covering `loc` (if any) is sunk.
    pub fn check_sink(&self, loc: GridLocation) -> bool {
        self.ship_at(loc).map_or(false, Ship::is_sunk)
    }

    /// All committed ships are sunk.
    pub fn check_for_win(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// All anchor/orientation pairs where a ship of `length` could be added
    /// right now.
    pub fn valid_ship_placements(&self, length: usize) -> Vec<(GridLocation, Orientation)> {
        let mut out = Vec::new();
        for anchor in self.locations() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let fits = (0..length as i32).all(|i| {
                    self.cell(anchor.offset(orientation, i))
                        .map_or(false, |c| c.ship.is_none())
                });
                if fits {
                    out.push((anchor, orientation));
                }
            }
        }
        out
    }

    /// Add a ship of `length` at a placement chosen uniformly from the valid
    /// ones.
    pub fn place_random_ship<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<(), PlacementError> {
        let candidates = self.valid_ship_placements(length);
        if candidates.is_empty() {
            log::warn!("no room left for a ship of length {}", length);
            return Err(PlacementError::UnableToPlace);
        }
        let (anchor, orientation) = candidates[rng.random_range(0..candidates.len())];
        self.add_ship(Ship::new(length, anchor, orientation)?)
    }

    /// Add a mine on a uniformly chosen cell that has none.
    pub fn place_random_mine<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        let candidates: Vec<GridLocation> = self
            .locations()
            .filter(|&loc| self.mine_at(loc).is_none())
            .collect();
        if candidates.is_empty() {
            return Err(PlacementError::UnableToPlace);
        }
        let loc = candidates[rng.random_range(0..candidates.len())];
        self.add_mine(Mine::new(loc, DEFAULT_MINE_TEXT))
    }

    /// Add a sea monster on a uniformly chosen cell that has none.
    pub fn place_random_seamonster<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let candidates: Vec<GridLocation> = self
            .locations()
            .filter(|&loc| self.seamonster_at(loc).is_none())
            .collect();
        if candidates.is_empty() {
            return Err(PlacementError::UnableToPlace);
        }
        let loc = candidates[rng.random_range(0..candidates.len())];
        self.add_seamonster(SeaMonster::new(loc, DEFAULT_SEAMONSTER_TEXT))
    }

    /// Fill every ship quota, longest ships first, then add `mines` mines and
    /// `seamonsters` sea monsters at random.
    pub fn place_random_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mines: usize,
        seamonsters: usize,
    ) -> Result<(), PlacementError> {
        for length in self.config.fleet_lengths() {
            // Skip ships of this length that were placed by hand.
            if self.ships_of_length(length) < self.config.required_ships_of_length(length) {
                self.place_random_ship(rng, length)?;
            }
        }
        for _ in 0..mines {
            self.place_random_mine(rng)?;
        }
        for _ in 0..seamonsters {
            self.place_random_seamonster(rng)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.width, self.height)?;
        for y in 0..self.height as i32 {
            write!(f, "  ")?;
            for x in 0..self.width as i32 {
                let loc = GridLocation::new(x, y);
                let ch = match self.cell(loc) {
                    Some(c) if c.mine.is_some() => 'M',
                    Some(c) if c.seamonster.is_some() => 'N',
                    Some(c) if c.ship.is_some() => 'S',
                    _ => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
