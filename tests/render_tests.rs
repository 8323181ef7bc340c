use sea_battle::ui::{outcome_message, result_message, side_by_side};
use sea_battle::{Coordinate, Grid, GridError, MatchStatus, Orientation, Ship, ShotOutcome};

fn sample_grid() -> Result<Grid, GridError> {
    let mut grid = Grid::new(6);
    grid.place_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal))?;
    grid.place_ship(Ship::new(Coordinate::new(5, 5), 1, Orientation::Horizontal))?;
    grid.reset_transient_state();
    Ok(grid)
}

#[test]
fn test_render_header_and_rows() -> Result<(), GridError> {
    let grid = sample_grid()?;
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 | 6 |");
    assert_eq!(lines[1], "1 | ■ | ■ | O | O | O | O |");
    assert_eq!(lines[6], "6 | O | O | O | O | O | ■ |");
    Ok(())
}

#[test]
fn test_render_hidden_grid() -> Result<(), GridError> {
    let mut grid = sample_grid()?;
    grid.set_hidden(true);
    grid.resolve_shot(Coordinate::new(0, 0))?;
    grid.resolve_shot(Coordinate::new(3, 3))?;
    grid.resolve_shot(Coordinate::new(5, 5))?;
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "1 | X | O | O | O | O | O |");
    assert_eq!(lines[4], "4 | O | O | O | T | O | O |");
    assert_eq!(lines[5], "5 | O | O | O | O | . | . |");
    assert_eq!(lines[6], "6 | O | O | O | O | . | X |");
    assert!(!text.contains('■'));
    Ok(())
}

#[test]
fn test_render_other_sizes() {
    let grid = Grid::new(3);
    assert_eq!(grid.to_string().lines().next(), Some("  | 1 | 2 | 3 |"));
}

#[test]
fn test_render_two_digit_labels_aligned() -> Result<(), GridError> {
    let mut grid = Grid::new(10);
    grid.place_ship(Ship::new(Coordinate::new(9, 8), 2, Orientation::Horizontal))?;
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("   |  1 |  2 |"));
    assert!(lines[0].ends_with("|  9 | 10 |"));
    assert!(lines[1].starts_with(" 1 |  O |"));
    assert!(lines[10].starts_with("10 |  O |"));
    assert!(lines[10].ends_with("|  ■ |  ■ |"));
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|l| l.chars().count() == width));
    Ok(())
}

#[test]
fn test_side_by_side() -> Result<(), GridError> {
    let grid = sample_grid()?;
    let mut hidden = sample_grid()?;
    hidden.set_hidden(true);
    let text = side_by_side(&grid, &hidden);
    let first = text.lines().nth(1).unwrap();
    assert_eq!(first, "1 | ■ | ■ | O | O | O | O |   1 | O | O | O | O | O | O |");
    Ok(())
}

#[test]
fn test_messages() {
    assert_eq!(outcome_message(ShotOutcome::Miss), "Miss!");
    assert_eq!(outcome_message(ShotOutcome::Destroyed), "Ship destroyed!");
    assert_eq!(result_message(MatchStatus::WonByA), Some("Player wins!"));
    assert_eq!(result_message(MatchStatus::WonByB), Some("Computer wins!"));
    assert_eq!(result_message(MatchStatus::InProgress), None);
}
