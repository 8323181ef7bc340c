//! Random fleet layout with retry on conflicting placements.

use alloc::vec::Vec;

use rand::Rng;

use crate::engine::config::{validate_layout, ConfigError, GameConfig};
use crate::engine::coord::Coordinate;
use crate::engine::grid::Grid;
use crate::engine::ship::{Orientation, Ship};

/// Produces grids holding a randomly placed fleet.
#[derive(Debug, Clone)]
pub struct RandomLayoutGenerator {
    size: usize,
    fleet: Vec<usize>,
    max_attempts: usize,
}

impl RandomLayoutGenerator {
    /// Generator for `fleet` on a `size`×`size` grid, refusing fleets that
    /// could never be laid out.
    pub fn new(size: usize, fleet: &[usize], max_attempts: usize) -> Result<Self, ConfigError> {
        validate_layout(size, fleet, max_attempts)?;
        let mut fleet = fleet.to_vec();
        // Largest ships first leaves the most room for the rest.
        fleet.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self {
            size,
            fleet,
            max_attempts,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(config.size, &config.fleet, config.max_placement_attempts)
    }

    /// Fleet lengths in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Draw a ship of `length` at a random in-bounds bow and orientation.
    fn random_ship<R: Rng>(&self, rng: &mut R, length: usize) -> Ship {
        let n = self.size as i32;
        let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(bow, length, orientation)
    }

    /// Make one attempt at a full layout. Returns `None` once more than
    /// `max_attempts` placements have been tried, in which case the partial
    /// layout must be discarded.
    pub fn try_layout<R: Rng>(&self, rng: &mut R) -> Option<Grid> {
        let mut grid = Grid::new(self.size);
        let mut attempts = 0usize;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    log::debug!(
                        "layout abandoned after {} attempts with {} ships placed",
                        self.max_attempts,
                        grid.ships().len()
                    );
                    return None;
                }
                match grid.place_ship(self.random_ship(rng, length)) {
                    Ok(()) => break,
                    Err(e) => log::trace!("placement rejected: {}", e),
                }
            }
        }
        grid.reset_transient_state();
        Some(grid)
    }

    /// Generate layouts until one succeeds.
    ///
    /// Terminates with probability one for any fleet that fits the grid; see
    /// [`validate_layout`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut restarts = 0usize;
        loop {
            if let Some(grid) = self.try_layout(rng) {
                log::debug!("layout generated after {} restarts", restarts);
                return grid;
            }
            restarts += 1;
        }
    }
}
