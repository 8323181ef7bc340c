use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    Coordinate, GameConfig, Grid, GridError, Orientation, RandomLayoutGenerator, Ship,
    ShotOutcome,
};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    RandomLayoutGenerator::from_config(&GameConfig::default()).unwrap().generate(&mut rng)
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn chebyshev(a: Coordinate, b: Coordinate) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn occupied_cells_are_distinct_and_collinear(
        row in -10i32..10,
        col in -10i32..10,
        length in 1usize..8,
        orient in orientation(),
    ) {
        let ship = Ship::new(Coordinate::new(row, col), length, orient);
        let cells: Vec<_> = ship.occupied_coordinates().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coordinate::new(row, col));
        for (i, c) in cells.iter().enumerate() {
            match orient {
                Orientation::Horizontal => {
                    prop_assert_eq!(c.row, row);
                    prop_assert_eq!(c.col, col + i as i32);
                }
                Orientation::Vertical => {
                    prop_assert_eq!(c.col, col);
                    prop_assert_eq!(c.row, row + i as i32);
                }
            }
        }
    }

    #[test]
    fn placement_respects_gap(
        a_row in 0i32..8, a_col in 0i32..8, a_len in 1usize..4, a_orient in orientation(),
        b_row in 0i32..8, b_col in 0i32..8, b_len in 1usize..4, b_orient in orientation(),
    ) {
        let mut grid = Grid::new(8);
        let first = Ship::new(Coordinate::new(a_row, a_col), a_len, a_orient);
        let second = Ship::new(Coordinate::new(b_row, b_col), b_len, b_orient);
        prop_assume!(grid.place_ship(first).is_ok());
        prop_assume!(second.occupied_coordinates().all(|c| !grid.is_out_of_bounds(c)));

        let distance = first
            .occupied_coordinates()
            .flat_map(|a| second.occupied_coordinates().map(move |b| chebyshev(a, b)))
            .min()
            .unwrap();
        let result = grid.place_ship(second);
        if distance >= 2 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(GridError::Overlap(_))));
        }
    }

    #[test]
    fn second_shot_always_rejected(seed in any::<u64>(), row in 0i32..6, col in 0i32..6) {
        let mut grid = random_grid(seed);
        let coord = Coordinate::new(row, col);
        prop_assume!(grid.can_target(coord));
        grid.resolve_shot(coord).unwrap();
        prop_assert_eq!(grid.resolve_shot(coord), Err(GridError::AlreadyStruck(coord)));
    }

    #[test]
    fn sinking_counts_match_ships(seed in any::<u64>()) {
        let mut grid = random_grid(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let ships = grid.ships().to_vec();
        let mut cells: Vec<Coordinate> = ships.iter().flat_map(|s| s.occupied_coordinates()).collect();
        // shuffle by repeated random swaps
        for i in (1..cells.len()).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }

        let mut destroyed = 0;
        for (n, coord) in cells.iter().enumerate() {
            prop_assert!(!grid.is_defeated());
            let outcome = grid.resolve_shot(*coord).unwrap();
            if outcome == ShotOutcome::Destroyed {
                destroyed += 1;
            }
            prop_assert_eq!(grid.destroyed_ship_count(), destroyed);
            let sunk = grid.ships().iter().filter(|s| s.remaining_segments() == 0).count();
            prop_assert_eq!(sunk, destroyed);
            if n + 1 < cells.len() {
                prop_assert_ne!(sunk, ships.len());
            }
        }
        prop_assert_eq!(destroyed, ships.len());
        prop_assert!(grid.is_defeated());
    }
}
