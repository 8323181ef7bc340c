//! Common types for the engine: grid errors and shot outcomes.

use crate::engine::coord::Coordinate;

/// Result of resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship that still has undamaged segments.
    Hit,
    /// Shot removed the last undamaged segment of a ship.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Grid and Ship operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// Coordinate was already fired upon or revealed.
    AlreadyStruck(Coordinate),
    /// Ship would overlap or touch a ship already on the grid.
    Overlap(Coordinate),
    /// Ship with no segments, anchored at the given bow.
    EmptyShip(Coordinate),
    /// A ship with no remaining segments was hit again.
    InvalidState,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds(c) => write!(f, "Cell {} is outside the board", c),
            GridError::AlreadyStruck(c) => write!(f, "Cell {} has already been fired upon", c),
            GridError::Overlap(c) => write!(f, "Cell {} is occupied or next to another ship", c),
            GridError::EmptyShip(c) => write!(f, "Ship at {} has no segments", c),
            GridError::InvalidState => write!(f, "Ship has no segments left to hit"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
