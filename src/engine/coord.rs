//! Grid coordinates.

use core::fmt;

/// Offsets of a cell's 3×3 neighborhood, the cell itself included.
static NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-indexed cell position. Signed so that positions just outside the grid
/// (neighbors of edge cells, `0 0` typed by a human) remain representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by the given row and column deltas.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The cell itself plus its eight neighbors, bounds unchecked.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBORHOOD.iter().map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Displays the 1-indexed `row col` pair players type and read.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
