//! Text rendering of grids and console announcements.

use core::fmt;

use crate::engine::{Cell, Grid, ShotOutcome};
use crate::game::{MatchStatus, Side};

/// Renders the grid as a numbered table, e.g. for size 6:
///
/// ```text
///   | 1 | 2 | 3 | 4 | 5 | 6 |
/// 1 | O | O | ■ | O | O | O |
/// ```
///
/// Hidden grids draw ships as empty water; hits, misses and revealed cells
/// stay visible. Labels and cells are padded to the width of the largest
/// index, so every line has the same length on grids of 10 or more.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = label_width(self.size());
        write!(f, "{:w$} |", "")?;
        for c in 1..=self.size() {
            write!(f, " {:>w$} |", c)?;
        }
        for (r, row) in self.rows().enumerate() {
            write!(f, "\n{:>w$} |", r + 1)?;
            for &cell in row {
                let cell = if self.is_hidden() && cell == Cell::Ship {
                    Cell::Empty
                } else {
                    cell
                };
                write!(f, " {:>w$} |", cell.glyph())?;
            }
        }
        Ok(())
    }
}

/// Digits in the largest row or column number.
fn label_width(size: usize) -> usize {
    let mut width = 1;
    let mut n = size;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Label used for a side in console messages.
pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::A => "Player",
        Side::B => "Computer",
    }
}

/// Message announcing a shot outcome.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}

/// Final message for a finished match.
pub fn result_message(status: MatchStatus) -> Option<&'static str> {
    match status.winner()? {
        Side::A => Some("Player wins!"),
        Side::B => Some("Computer wins!"),
    }
}

/// Two grids rendered next to each other, line by line.
#[cfg(feature = "std")]
pub fn side_by_side(left: &Grid, right: &Grid) -> std::string::String {
    use std::string::ToString;

    let left = left.to_string();
    let right = right.to_string();
    left.lines()
        .zip(right.lines())
        .map(|(l, r)| std::format!("{}   {}", l, r))
        .collect::<std::vec::Vec<_>>()
        .join("\n")
}

/// Print both players' grids with their headers.
#[cfg(feature = "std")]
pub fn print_boards(player: &Grid, computer: &Grid) {
    std::println!("{}", "-".repeat(57));
    std::println!("  Player board:          Computer board:");
    std::println!("{}", side_by_side(player, computer));
    std::println!("{}", "-".repeat(57));
}

#[cfg(feature = "std")]
pub fn print_greeting() {
    std::println!("     Welcome to     ");
    std::println!("     Sea Battle     ");
    std::println!("--------------------");
    std::println!(" Input format: x y  ");
    std::println!(" x - row number     ");
    std::println!(" y - column number  ");
}
