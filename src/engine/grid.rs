//! A player's grid: ship placement, adjacency bookkeeping and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::common::{GridError, ShotOutcome};
use crate::engine::coord::Coordinate;
use crate::engine::ship::Ship;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Revealed perimeter of a destroyed ship.
    Blocked,
}

impl Cell {
    /// Character drawn for this cell on a revealed grid.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Blocked => '.',
        }
    }
}

/// One player's square board together with the fleet placed on it.
pub struct Grid {
    size: usize,
    hidden: bool,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    /// Ship cells and their one-cell gap, used while placing.
    blocked: Vec<bool>,
    struck: BTreeSet<Coordinate>,
    destroyed: usize,
}

impl Grid {
    /// Create an empty, visible `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hidden: false,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            blocked: vec![false; size * size],
            struck: BTreeSet::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether ships are concealed when the grid is rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn destroyed_ship_count(&self) -> usize {
        self.destroyed
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns `true` if a shot has already been resolved at `coord`.
    pub fn is_struck(&self, coord: Coordinate) -> bool {
        self.struck.contains(&coord)
    }

    /// Number of shots resolved against this grid.
    pub fn struck_count(&self) -> usize {
        self.struck.len()
    }

    /// Returns `true` if a shot at `coord` would be accepted.
    pub fn can_target(&self, coord: Coordinate) -> bool {
        match self.index(coord) {
            Some(i) => !self.struck.contains(&coord) && self.cells[i] != Cell::Blocked,
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_none()
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let n = self.size as i32;
        if (0..n).contains(&coord.row) && (0..n).contains(&coord.col) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    /// Reserve the ship's cells and all eight neighbors of each. With `paint`
    /// set, untouched water around the ship is revealed as [`Cell::Blocked`].
    fn mark_adjacency_blocked(&mut self, ship: &Ship, paint: bool) {
        for segment in ship.occupied_coordinates() {
            for near in segment.neighborhood() {
                let Some(i) = self.index(near) else {
                    continue;
                };
                self.blocked[i] = true;
                if paint && self.cells[i] == Cell::Empty {
                    self.cells[i] = Cell::Blocked;
                }
            }
        }
    }

    /// Place a ship, enforcing bounds and a one-cell gap to every other ship.
    /// Zero-length ships are rejected, since they could never be destroyed.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), GridError> {
        if ship.length() == 0 {
            return Err(GridError::EmptyShip(ship.bow()));
        }
        for coord in ship.occupied_coordinates() {
            match self.index(coord) {
                None => return Err(GridError::OutOfBounds(coord)),
                Some(i) if self.blocked[i] => return Err(GridError::Overlap(coord)),
                Some(_) => {}
            }
        }
        for coord in ship.occupied_coordinates() {
            if let Some(i) = self.index(coord) {
                self.cells[i] = Cell::Ship;
                self.blocked[i] = true;
            }
        }
        self.ships.push(ship);
        self.mark_adjacency_blocked(&ship, false);
        Ok(())
    }

    /// Fire at `coord`, reporting what was struck.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, GridError> {
        let i = self.index(coord).ok_or(GridError::OutOfBounds(coord))?;
        if !self.can_target(coord) {
            return Err(GridError::AlreadyStruck(coord));
        }
        self.struck.insert(coord);

        let Some(pos) = self.ships.iter().position(|s| s.is_hit_by(coord)) else {
            self.cells[i] = Cell::Miss;
            log::trace!("shot at {:?} missed", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[i] = Cell::Hit;
        let ship = &mut self.ships[pos];
        ship.register_hit()?;
        if ship.is_destroyed() {
            let ship = *ship;
            self.destroyed += 1;
            self.mark_adjacency_blocked(&ship, true);
            log::info!(
                "ship of length {} at {:?} destroyed ({}/{})",
                ship.length(),
                ship.bow(),
                self.destroyed,
                self.ships.len()
            );
            Ok(ShotOutcome::Destroyed)
        } else {
            log::trace!("shot at {:?} hit", coord);
            Ok(ShotOutcome::Hit)
        }
    }

    /// Returns `true` when every ship on the grid is destroyed.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Drop placement bookkeeping so the grid starts play with no struck or
    /// reserved cells.
    pub fn reset_transient_state(&mut self) {
        self.struck.clear();
        self.blocked.iter_mut().for_each(|b| *b = false);
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("hidden", &self.hidden)
            .field("ships", &self.ships)
            .field("struck", &self.struck.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
