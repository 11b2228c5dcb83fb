//! The stock hand-placed layout for the human side.

use crate::common::{GridLocation, Orientation, PlacementError};
use crate::grid::Grid;
use crate::penalty::{Mine, SeaMonster, DEFAULT_MINE_TEXT, DEFAULT_SEAMONSTER_TEXT};
use crate::ship::Ship;

/// Place the stock fleet, two mines and two sea monsters. Fits the default
/// 8×8 configuration exactly.
pub fn pirate_fleet_layout(grid: &mut Grid) -> Result<(), PlacementError> {
    let loc = GridLocation::new;

    grid.add_ship(Ship::wooden(2, loc(3, 4), Orientation::Vertical)?)?;
    grid.add_ship(Ship::new(3, loc(0, 0), Orientation::Horizontal)?)?;
    grid.add_ship(Ship::new(3, loc(3, 1), Orientation::Horizontal)?)?;
    grid.add_ship(Ship::new(4, loc(6, 3), Orientation::Vertical)?)?;
    grid.add_ship(Ship::new(5, loc(7, 2), Orientation::Vertical)?)?;

    grid.add_mine(Mine::new(loc(6, 0), DEFAULT_MINE_TEXT))?;
    grid.add_mine(Mine::with_guaranteed_hit(loc(3, 3), DEFAULT_MINE_TEXT))?;

    grid.add_seamonster(SeaMonster::new(loc(5, 6), DEFAULT_SEAMONSTER_TEXT))?;
    grid.add_seamonster(SeaMonster::new(loc(2, 2), DEFAULT_SEAMONSTER_TEXT))?;
    Ok(())
}
