use pirate_fleet::{GridLocation, Orientation, Ship};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn cells_are_collinear_and_increasing(
        x in 0..8i32,
        y in 0..8i32,
        length in 2..=5usize,
        orient in orientation(),
    ) {
        let ship = Ship::new(length, GridLocation::new(x, y), orient).unwrap();
        let cells: Vec<_> = ship.cells().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], GridLocation::new(x, y));
        for pair in cells.windows(2) {
            match orient {
                Orientation::Horizontal => {
                    prop_assert_eq!(pair[1].y, pair[0].y);
                    prop_assert_eq!(pair[1].x, pair[0].x + 1);
                }
                Orientation::Vertical => {
                    prop_assert_eq!(pair[1].x, pair[0].x);
                    prop_assert_eq!(pair[1].y, pair[0].y + 1);
                }
            }
        }
    }

    #[test]
    fn sunk_iff_every_cell_hit(
        length in 2..=5usize,
        orient in orientation(),
        mask in any::<u8>(),
    ) {
        let mut ship = Ship::new(length, GridLocation::new(1, 1), orient).unwrap();
        let cells: Vec<_> = ship.cells().collect();
        let mut all_hit = true;
        for (i, cell) in cells.iter().enumerate() {
            if mask & (1 << i) != 0 {
                ship.register_hit(*cell);
            } else {
                all_hit = false;
            }
        }
        prop_assert_eq!(ship.is_sunk(), all_hit);
    }
}
