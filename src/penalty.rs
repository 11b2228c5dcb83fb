//! Penalty cells: mines and sea monsters hidden on a grid.

use alloc::string::{String, ToString};

use crate::common::GridLocation;

/// Text shown when a mine without custom text goes off.
pub const DEFAULT_MINE_TEXT: &str = "Ka-Boom!!";
/// Text shown when a sea monster without custom text is disturbed.
pub const DEFAULT_SEAMONSTER_TEXT: &str = "Whoa Nessie!";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Mine {
    location: GridLocation,
    guarantees_hit: bool,
    penalty_text: String,
}

impl Mine {
    pub fn new(location: GridLocation, penalty_text: &str) -> Self {
        Self {
            location,
            guarantees_hit: false,
            penalty_text: penalty_text.to_string(),
        }
    }

    /// A mine flagged as guaranteeing a hit. The flag is reported to the
    /// caller with the penalty; it never damages a ship by itself.
    pub fn with_guaranteed_hit(location: GridLocation, penalty_text: &str) -> Self {
        Self {
            guarantees_hit: true,
            ..Self::new(location, penalty_text)
        }
    }

    pub fn location(&self) -> GridLocation {
        self.location
    }

    pub fn guarantees_hit(&self) -> bool {
        self.guarantees_hit
    }

    pub fn penalty_text(&self) -> &str {
        &self.penalty_text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaMonster {
    location: GridLocation,
    penalty_text: String,
}

impl SeaMonster {
    pub fn new(location: GridLocation, penalty_text: &str) -> Self {
        Self {
            location,
            penalty_text: penalty_text.to_string(),
        }
    }

    pub fn location(&self) -> GridLocation {
        self.location
    }

    pub fn penalty_text(&self) -> &str {
        &self.penalty_text
    }
}

/// A triggered hazard, as remembered by the side that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PenaltyCell {
    Mine(Mine),
    SeaMonster(SeaMonster),
}

impl PenaltyCell {
    pub fn location(&self) -> GridLocation {
        match self {
            PenaltyCell::Mine(mine) => mine.location(),
            PenaltyCell::SeaMonster(monster) => monster.location(),
        }
    }

    pub fn penalty_text(&self) -> &str {
        match self {
            PenaltyCell::Mine(mine) => mine.penalty_text(),
            PenaltyCell::SeaMonster(monster) => monster.penalty_text(),
        }
    }

    /// Sea monsters never guarantee a hit.
    pub fn guarantees_hit(&self) -> bool {
        match self {
            PenaltyCell::Mine(mine) => mine.guarantees_hit(),
            PenaltyCell::SeaMonster(_) => false,
        }
    }
}

impl From<Mine> for PenaltyCell {
    fn from(mine: Mine) -> Self {
        PenaltyCell::Mine(mine)
    }
}

impl From<SeaMonster> for PenaltyCell {
    fn from(monster: SeaMonster) -> Self {
        PenaltyCell::SeaMonster(monster)
    }
}
