//! Ships and their per-cell hit tracking.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::common::{GridLocation, Orientation, PlacementError};

/// Shortest ship the game knows about.
pub const MIN_SHIP_LENGTH: usize = 2;
/// Longest ship the game knows about.
pub const MAX_SHIP_LENGTH: usize = 5;

/// Records which cells of a ship have been hit. Locations that were never
/// recorded read as not hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitTracker {
    cells_hit: BTreeMap<GridLocation, bool>,
}

impl HitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `loc` has been hit. Missing entries default to `false`.
    pub fn is_hit(&self, loc: GridLocation) -> bool {
        self.cells_hit.get(&loc).copied().unwrap_or(false)
    }

    pub fn mark_hit(&mut self, loc: GridLocation) {
        self.cells_hit.insert(loc, true);
    }

    /// Number of recorded hits.
    pub fn hit_count(&self) -> usize {
        self.cells_hit.values().filter(|&&hit| hit).count()
    }
}

/// A ship anchored at `location` and extending `length` cells along its
/// orientation.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    location: GridLocation,
    orientation: Orientation,
    wooden: bool,
    hit_tracker: HitTracker,
}

impl Ship {
    /// Build a standard ship. Fails if `length` is outside 2..=5 or the last
    /// cell cannot be represented.
    pub fn new(
        length: usize,
        location: GridLocation,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(PlacementError::InvalidLength(length));
        }
        location
            .checked_offset(orientation, length as i32 - 1)
            .ok_or(PlacementError::OutOfBounds(location))?;
        Ok(Ship {
            length,
            location,
            orientation,
            wooden: false,
            hit_tracker: HitTracker::new(),
        })
    }

    /// Build a wooden ship. Wooden ships only differ in how they are drawn.
    pub fn wooden(
        length: usize,
        location: GridLocation,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        let mut ship = Self::new(length, location, orientation)?;
        ship.wooden = true;
        Ok(ship)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Anchor cell.
    pub fn location(&self) -> GridLocation {
        self.location
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    pub fn is_wooden(&self) -> bool {
        self.wooden
    }

    pub fn hit_tracker(&self) -> &HitTracker {
        &self.hit_tracker
    }

    /// The `length` cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = GridLocation> + '_ {
        (0..self.length as i32).map(move |i| self.location.offset(self.orientation, i))
    }

    /// Last cell covered by the ship.
    pub fn end_location(&self) -> GridLocation {
        self.location.offset(self.orientation, self.length as i32 - 1)
    }

    /// Whether the ship covers `loc`.
    pub fn contains(&self, loc: GridLocation) -> bool {
        let end = self.end_location();
        loc.x >= self.location.x && loc.x <= end.x && loc.y >= self.location.y && loc.y <= end.y
    }

    /// Record a hit at `loc`. Returns `true` if the ship covers `loc`.
    pub fn register_hit(&mut self, loc: GridLocation) -> bool {
        if self.contains(loc) {
            self.hit_tracker.mark_hit(loc);
            true
        } else {
            false
        }
    }

    /// A ship is sunk once every covered cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.cells().all(|cell| self.hit_tracker.is_hit(cell))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: {}, orientation: {:?}, wooden: {}, hits: {} }}",
            self.length,
            self.location,
            self.orientation,
            self.wooden,
            self.hit_tracker.hit_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_cells_run_along_x() {
        let ship = Ship::new(3, GridLocation::new(0, 0), Orientation::Horizontal).unwrap();
        let cells: alloc::vec::Vec<_> = ship.cells().collect();
        assert_eq!(
            cells,
            [
                GridLocation::new(0, 0),
                GridLocation::new(1, 0),
                GridLocation::new(2, 0)
            ]
        );
        assert_eq!(ship.end_location(), GridLocation::new(2, 0));
    }

    #[test]
    fn rejects_unknown_length() {
        assert_eq!(
            Ship::new(6, GridLocation::new(0, 0), Orientation::Vertical).unwrap_err(),
            PlacementError::InvalidLength(6)
        );
        assert!(Ship::new(1, GridLocation::new(0, 0), Orientation::Vertical).is_err());
    }

    #[test]
    fn untouched_tracker_reads_false() {
        let tracker = HitTracker::new();
        assert!(!tracker.is_hit(GridLocation::new(-1, 40)));
        assert_eq!(tracker.hit_count(), 0);
    }
}
