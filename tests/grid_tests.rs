use pirate_fleet::{
    pirate_fleet_layout, GameConfig, Grid, GridLocation, Mine, Orientation, PlacementError,
    SeaMonster, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn loc(x: i32, y: i32) -> GridLocation {
    GridLocation::new(x, y)
}

fn empty_grid() -> Grid {
    Grid::new(&GameConfig::default()).unwrap()
}

#[test]
fn test_add_ship_commits_every_cell() {
    let mut grid = empty_grid();
    let ship = Ship::new(3, loc(0, 0), Orientation::Horizontal).unwrap();
    grid.add_ship(ship).unwrap();
    for x in 0..3 {
        assert!(grid.ship_at(loc(x, 0)).is_some());
    }
    assert!(grid.ship_at(loc(3, 0)).is_none());
    assert_eq!(grid.ships().len(), 1);
}

#[test]
fn test_add_ship_out_of_bounds_leaves_grid_unchanged() {
    let mut grid = empty_grid();
    let before = grid.clone();
    let ship = Ship::new(5, loc(6, 0), Orientation::Horizontal).unwrap();
    assert_eq!(
        grid.add_ship(ship).unwrap_err(),
        PlacementError::OutOfBounds(loc(8, 0))
    );
    assert_eq!(grid, before);

    let ship = Ship::new(2, loc(-1, 3), Orientation::Vertical).unwrap();
    assert!(matches!(
        grid.add_ship(ship),
        Err(PlacementError::OutOfBounds(_))
    ));
    assert_eq!(grid, before);
}

#[test]
fn test_add_ship_overlap_is_rejected() {
    let mut grid = empty_grid();
    grid.add_ship(Ship::new(4, loc(2, 0), Orientation::Vertical).unwrap())
        .unwrap();
    let before = grid.clone();
    let crossing = Ship::new(3, loc(1, 2), Orientation::Horizontal).unwrap();
    assert_eq!(
        grid.add_ship(crossing).unwrap_err(),
        PlacementError::ShipOverlaps(loc(2, 2))
    );
    assert_eq!(grid, before);
}

#[test]
fn test_ship_quota_is_enforced() {
    let mut grid = empty_grid();
    grid.add_ship(Ship::new(2, loc(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    assert_eq!(
        grid.add_ship(Ship::new(2, loc(0, 2), Orientation::Horizontal).unwrap())
            .unwrap_err(),
        PlacementError::QuotaExceeded
    );
    assert_eq!(grid.ships().len(), 1);
}

#[test]
fn test_hazards_may_share_cells_with_ships() {
    let mut grid = empty_grid();
    grid.add_ship(Ship::new(3, loc(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    grid.add_mine(Mine::new(loc(1, 0), "boom")).unwrap();
    grid.add_seamonster(SeaMonster::new(loc(1, 0), "splash"))
        .unwrap();
    let cell = grid.cell(loc(1, 0)).unwrap();
    assert!(cell.ship.is_some());
    assert!(cell.mine.is_some());
    assert!(cell.seamonster.is_some());
    assert!(!cell.is_hazard_free());
}

#[test]
fn test_duplicate_hazards_are_rejected() {
    let mut grid = empty_grid();
    grid.add_mine(Mine::new(loc(4, 4), "boom")).unwrap();
    assert_eq!(
        grid.add_mine(Mine::new(loc(4, 4), "boom")).unwrap_err(),
        PlacementError::MineOverlaps(loc(4, 4))
    );
    grid.add_seamonster(SeaMonster::new(loc(4, 4), "splash"))
        .unwrap();
    assert_eq!(
        grid.add_seamonster(SeaMonster::new(loc(4, 4), "splash"))
            .unwrap_err(),
        PlacementError::SeaMonsterOverlaps(loc(4, 4))
    );
    assert_eq!(
        grid.add_mine(Mine::new(loc(8, 0), "boom")).unwrap_err(),
        PlacementError::OutOfBounds(loc(8, 0))
    );
    assert_eq!(grid.number_of_mines(), 1);
    assert_eq!(grid.number_of_seamonsters(), 1);
}

#[test]
fn test_mine_quota_is_enforced() {
    let mut grid = empty_grid();
    grid.add_mine(Mine::new(loc(0, 0), "boom")).unwrap();
    grid.add_mine(Mine::new(loc(1, 0), "boom")).unwrap();
    assert_eq!(
        grid.add_mine(Mine::new(loc(2, 0), "boom")).unwrap_err(),
        PlacementError::QuotaExceeded
    );
    assert!(grid.has_required_mines());
}

#[test]
fn test_stock_layout_is_ready_to_play() {
    let mut grid = empty_grid();
    assert!(!grid.ready_to_play(false, false));
    pirate_fleet_layout(&mut grid).unwrap();
    assert!(grid.has_required_ships());
    assert!(grid.has_required_mines());
    assert!(grid.has_required_seamonsters());
    assert!(grid.ready_to_play(true, true));
    assert!(grid.ship_at(loc(3, 4)).unwrap().is_wooden());
    assert!(grid.mine_at(loc(3, 3)).unwrap().guarantees_hit());
    assert!(!grid.mine_at(loc(6, 0)).unwrap().guarantees_hit());
    assert_eq!(grid.seamonster_at(loc(5, 6)).unwrap().penalty_text(), "Whoa Nessie!");
}

#[test]
fn test_ready_to_play_can_skip_hazards() {
    let mut grid = empty_grid();
    let mut rng = SmallRng::seed_from_u64(3);
    grid.place_random_fleet(&mut rng, 0, 0).unwrap();
    assert!(grid.ready_to_play(false, false));
    assert!(!grid.ready_to_play(true, false));
    assert!(!grid.ready_to_play(false, true));
}

#[test]
fn test_random_fleet_has_no_overlap() {
    let config = GameConfig::default();
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(&config).unwrap();
        grid.place_random_fleet(&mut rng, 2, 2).unwrap();
        let occupied = grid
            .locations()
            .filter(|&l| grid.ship_at(l).is_some())
            .count();
        assert_eq!(occupied, 2 + 3 + 3 + 4 + 5, "seed {}", seed);
        assert!(grid.ready_to_play(true, true));
    }
}

#[test]
fn test_random_placement_fails_when_full() {
    let config = GameConfig {
        width: 2,
        height: 2,
        ..GameConfig::default()
    };
    let mut grid = Grid::new(&config).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        grid.place_random_ship(&mut rng, 5).unwrap_err(),
        PlacementError::UnableToPlace
    );
    assert!(grid.ships().is_empty());
}

#[test]
fn test_win_and_sink_checks() {
    let mut grid = empty_grid();
    grid.add_ship(Ship::new(2, loc(3, 4), Orientation::Vertical).unwrap())
        .unwrap();
    grid.add_ship(Ship::new(3, loc(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    assert_eq!(grid.fire_cannon(loc(3, 4)), Some(0));
    assert!(!grid.check_sink(loc(3, 4)));
    assert_eq!(grid.fire_cannon(loc(3, 5)), Some(0));
    assert!(grid.check_sink(loc(3, 4)));
    assert!(!grid.check_for_win());
    assert_eq!(grid.fire_cannon(loc(7, 7)), None);
    for x in 0..3 {
        grid.fire_cannon(loc(x, 0));
    }
    assert!(grid.check_for_win());
    assert_eq!(grid.ships_sunk(), 2);
    assert_eq!(grid.ships_remaining(), 0);
}

#[test]
fn test_random_fleet_fills_only_open_quotas() {
    let mut grid = empty_grid();
    grid.add_ship(Ship::new(5, loc(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    grid.add_ship(Ship::new(3, loc(0, 1), Orientation::Horizontal).unwrap())
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    grid.place_random_fleet(&mut rng, 2, 2).unwrap();
    assert!(grid.ready_to_play(true, true));
    let mut lengths: Vec<_> = grid.ships().iter().map(|s| s.length()).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![2, 3, 3, 4, 5]);
    assert_eq!(grid.ships()[0].location(), loc(0, 0));
}
