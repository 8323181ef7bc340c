//! Ship geometry and damage tracking.

use core::fmt;

use crate::engine::common::GridError;
use crate::engine::coord::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along its row: each segment one column right of the previous.
    Horizontal,
    /// Extends down its column: each segment one row below the previous.
    Vertical,
}

impl Orientation {
    /// Row and column step between consecutive segments.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of cells starting at its bow.
///
/// Occupied cells are derived from `bow`, `length` and `orientation` on every
/// call and are never stored.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Create an undamaged ship.
    pub const fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of segments not yet hit.
    pub fn remaining_segments(&self) -> usize {
        self.remaining
    }

    /// Check if the ship is destroyed (all segments hit).
    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }

    /// The `length` cells covered by the ship, bow first.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Returns `true` if `coord` is one of the ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.occupied_coordinates().any(|c| c == coord)
    }

    /// Record damage to one segment.
    pub fn register_hit(&mut self) -> Result<(), GridError> {
        if self.remaining == 0 {
            return Err(GridError::InvalidState);
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.remaining,
        )
    }
}
