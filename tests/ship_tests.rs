use pirate_fleet::{GridLocation, HitTracker, Orientation, PlacementError, Ship};

#[test]
fn test_vertical_small_ship_cells() -> Result<(), PlacementError> {
    let ship = Ship::wooden(2, GridLocation::new(3, 4), Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![GridLocation::new(3, 4), GridLocation::new(3, 5)]);
    assert!(ship.is_wooden());
    assert!(ship.is_vertical());
    Ok(())
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), PlacementError> {
    let mut ship = Ship::new(2, GridLocation::new(3, 4), Orientation::Vertical)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(GridLocation::new(3, 4)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(GridLocation::new(3, 5)));
    assert!(ship.is_sunk());
    // miss
    assert!(!ship.register_hit(GridLocation::new(4, 4)));
    Ok(())
}

#[test]
fn test_contains_and_end() -> Result<(), PlacementError> {
    let ship = Ship::new(4, GridLocation::new(1, 2), Orientation::Horizontal)?;
    assert_eq!(ship.end_location(), GridLocation::new(4, 2));
    for x in 1..=4 {
        assert!(ship.contains(GridLocation::new(x, 2)));
    }
    assert!(!ship.contains(GridLocation::new(5, 2)));
    assert!(!ship.contains(GridLocation::new(1, 3)));
    Ok(())
}

#[test]
fn test_hit_tracker_defaults_to_not_hit() {
    let mut tracker = HitTracker::new();
    let loc = GridLocation::new(2, 2);
    assert!(!tracker.is_hit(loc));
    tracker.mark_hit(loc);
    tracker.mark_hit(loc);
    assert!(tracker.is_hit(loc));
    assert_eq!(tracker.hit_count(), 1);
}

#[test]
fn test_anchor_at_coordinate_limit() -> Result<(), PlacementError> {
    let edge = GridLocation::new(i32::MAX - 1, 0);
    assert_eq!(
        Ship::new(5, edge, Orientation::Horizontal).unwrap_err(),
        PlacementError::OutOfBounds(edge)
    );
    let ship = Ship::new(2, edge, Orientation::Horizontal)?;
    assert_eq!(ship.end_location(), GridLocation::new(i32::MAX, 0));
    assert!(ship.contains(GridLocation::new(i32::MAX, 0)));
    assert!(!ship.contains(GridLocation::new(0, 0)));

    let low = GridLocation::new(0, i32::MAX - 3);
    let ship = Ship::new(4, low, Orientation::Vertical)?;
    assert!(ship.contains(GridLocation::new(0, i32::MAX)));
    Ok(())
}
