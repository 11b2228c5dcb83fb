//! Common types for Pirate Fleet: grid locations, render marks and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A cell coordinate on a player's grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLocation {
    pub x: i32,
    pub y: i32,
}

impl GridLocation {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The location `steps` cells further along `orientation`, clamped to
    /// the `i32` range.
    pub fn offset(self, orientation: Orientation, steps: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.x.saturating_add(steps), self.y),
            Orientation::Vertical => Self::new(self.x, self.y.saturating_add(steps)),
        }
    }

    /// Like [`offset`](Self::offset), but `None` when the coordinate would
    /// overflow.
    pub fn checked_offset(self, orientation: Orientation, steps: i32) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => Some(Self::new(self.x.checked_add(steps)?, self.y)),
            Orientation::Vertical => Some(Self::new(self.x, self.y.checked_add(steps)?)),
        }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// What the rendering sink should draw on an attacked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMark {
    Miss,
    ShipHit,
    MineHit,
    SeaMonsterHit,
}

/// Errors returned while committing entities to a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one cell lies outside the grid.
    OutOfBounds(GridLocation),
    /// A cell is already part of another ship.
    ShipOverlaps(GridLocation),
    /// A mine already sits at this location.
    MineOverlaps(GridLocation),
    /// A sea monster already sits at this location.
    SeaMonsterOverlaps(GridLocation),
    /// The quota for this entity kind is already filled.
    QuotaExceeded,
    /// Ship length outside 2..=5.
    InvalidLength(usize),
    /// No valid placement remains for a random placement request.
    UnableToPlace,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds(loc) => write!(f, "Location {} is out of bounds", loc),
            PlacementError::ShipOverlaps(loc) => {
                write!(f, "Ship placement overlaps another ship at {}", loc)
            }
            PlacementError::MineOverlaps(loc) => write!(f, "A mine is already placed at {}", loc),
            PlacementError::SeaMonsterOverlaps(loc) => {
                write!(f, "A sea monster is already placed at {}", loc)
            }
            PlacementError::QuotaExceeded => write!(f, "Quota for this entity is already filled"),
            PlacementError::InvalidLength(len) => write!(f, "Invalid ship length {}", len),
            PlacementError::UnableToPlace => write!(f, "No valid placement remains"),
        }
    }
}

/// Errors returned when an attack request is rejected. Nothing is mutated
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// Target location outside the grid.
    OutOfBounds(GridLocation),
    /// The attacker already fired at this location.
    AlreadyAttacked(GridLocation),
    /// A special move found no eligible cell.
    NoCandidates,
    /// One side has already won.
    MatchOver,
    /// A grid is missing required ships or hazards.
    NotReady,
    /// Underlying bit grid error.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for AttackError {
    fn from(err: BitBoardError) -> Self {
        AttackError::BitBoardError(err)
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds(loc) => write!(f, "Attack at {} is out of bounds", loc),
            AttackError::AlreadyAttacked(loc) => write!(f, "Location {} was already attacked", loc),
            AttackError::NoCandidates => write!(f, "No eligible cell remains for this move"),
            AttackError::MatchOver => write!(f, "The match is already over"),
            AttackError::NotReady => write!(f, "A grid is missing required ships or hazards"),
            AttackError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

/// Errors from validating or loading a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGrid,
    /// The grid has more cells than the move tracker can hold.
    GridTooLarge { cells: usize, capacity: usize },
    /// A ship quota names a length outside 2..=5.
    InvalidShipLength(usize),
    /// The configuration text could not be parsed.
    Parse(alloc::string::String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "Grid width and height must be positive"),
            ConfigError::GridTooLarge { cells, capacity } => {
                write!(f, "Grid has {} cells, at most {} are supported", cells, capacity)
            }
            ConfigError::InvalidShipLength(len) => write!(f, "Invalid ship length {} in quota", len),
            ConfigError::Parse(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for AttackError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
