//! Game configuration: grid size, entity quotas and scoring constants.

use alloc::vec::Vec;

use crate::bitboard::MoveGrid;
use crate::common::ConfigError;
use crate::ship::{MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};

pub const DEFAULT_GRID_WIDTH: usize = 8;
pub const DEFAULT_GRID_HEIGHT: usize = 8;
pub const DEFAULT_REQUIRED_MINES: usize = 2;
pub const DEFAULT_REQUIRED_SEAMONSTERS: usize = 2;

/// Required number of ships of one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipQuota {
    pub length: usize,
    pub count: usize,
}

impl ShipQuota {
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }
}

/// Standard fleet: one small, two medium, one large, one extra large.
pub const STANDARD_FLEET: [ShipQuota; 4] = [
    ShipQuota::new(2, 1),
    ShipQuota::new(3, 2),
    ShipQuota::new(4, 1),
    ShipQuota::new(5, 1),
];

/// Constants for the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct ScoringConfig {
    pub sink_bonus: i64,
    pub ship_bonus: i64,
    pub guess_penalty: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sink_bonus: 100,
            ship_bonus: 50,
            guess_penalty: 2,
        }
    }
}

/// Read-only settings shared by both sides of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub required_ships: Vec<ShipQuota>,
    pub required_mines: usize,
    pub required_seamonsters: usize,
    pub scoring: ScoringConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            required_ships: STANDARD_FLEET.to_vec(),
            required_mines: DEFAULT_REQUIRED_MINES,
            required_seamonsters: DEFAULT_REQUIRED_SEAMONSTERS,
            scoring: ScoringConfig::default(),
        }
    }
}

impl GameConfig {
    /// Check dimensions against the move tracker and ship lengths against the
    /// supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let capacity = MoveGrid::capacity();
        let cells = self
            .width
            .checked_mul(self.height)
            .ok_or(ConfigError::GridTooLarge {
                cells: usize::MAX,
                capacity,
            })?;
        if cells > capacity {
            return Err(ConfigError::GridTooLarge { cells, capacity });
        }
        for quota in &self.required_ships {
            if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&quota.length) {
                return Err(ConfigError::InvalidShipLength(quota.length));
            }
        }
        Ok(())
    }

    /// Required number of ships of `length` (zero when absent).
    pub fn required_ships_of_length(&self, length: usize) -> usize {
        self.required_ships
            .iter()
            .filter(|q| q.length == length)
            .map(|q| q.count)
            .sum()
    }

    /// Total number of ships in a complete fleet.
    pub fn fleet_size(&self) -> usize {
        self.required_ships.iter().map(|q| q.count).sum()
    }

    /// Ship lengths in placement order, longest first.
    pub fn fleet_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .required_ships
            .iter()
            .flat_map(|q| core::iter::repeat(q.length).take(q.count))
            .collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }

    /// Parse a JSON document; absent fields keep their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    #[cfg(feature = "std")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }
}
