use sea_battle::{Coordinate, GridError, Orientation, Ship};

#[test]
fn test_horizontal_ship_extends_along_row() {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_coordinates().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
}

#[test]
fn test_vertical_ship_extends_down_column() {
    let ship = Ship::new(Coordinate::new(0, 4), 2, Orientation::Vertical);
    let cells: Vec<_> = ship.occupied_coordinates().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 4), Coordinate::new(1, 4)]);
}

#[test]
fn test_cells_do_not_depend_on_bounds() {
    let ship = Ship::new(Coordinate::new(-1, 5), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_coordinates().collect();
    assert_eq!(cells.last(), Some(&Coordinate::new(-1, 7)));
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coordinate::new(1, 1), 2, Orientation::Vertical);
    assert!(ship.is_hit_by(Coordinate::new(1, 1)));
    assert!(ship.is_hit_by(Coordinate::new(2, 1)));
    assert!(!ship.is_hit_by(Coordinate::new(3, 1)));
    assert!(!ship.is_hit_by(Coordinate::new(1, 2)));
}

#[test]
fn test_register_hit_until_destroyed() -> Result<(), GridError> {
    let mut ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
    assert_eq!(ship.remaining_segments(), 2);
    ship.register_hit()?;
    assert!(!ship.is_destroyed());
    ship.register_hit()?;
    assert!(ship.is_destroyed());
    assert_eq!(ship.register_hit(), Err(GridError::InvalidState));
    assert_eq!(ship.remaining_segments(), 0);
    Ok(())
}
