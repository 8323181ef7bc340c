use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

/// Side length of the standard square grid.
pub const DEFAULT_SIZE: usize = 6;
/// Lengths of the standard fleet, largest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;
/// Failed placements tolerated within one layout before it is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Pause before the automated player reveals its target.
pub const DEFAULT_AI_DELAY: Duration = Duration::from_secs(3);

/// Reasons a [`GameConfig`] cannot produce a playable layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize,
    EmptyFleet,
    ZeroPlacementAttempts,
    ZeroLengthShip,
    ShipTooLong { length: usize, size: usize },
    FleetTooLarge { required: usize, available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "Grid size must be at least 1"),
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ZeroPlacementAttempts => {
                write!(f, "At least one placement attempt per layout is required")
            }
            ConfigError::ZeroLengthShip => write!(f, "Ship lengths must be at least 1"),
            ConfigError::ShipTooLong { length, size } => {
                write!(f, "Ship of length {} does not fit a {}x{} grid", length, size, size)
            }
            ConfigError::FleetTooLarge {
                required,
                available,
            } => write!(
                f,
                "Fleet needs {} cells including gaps but only {} are available",
                required, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Parameters of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
    pub ai_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            ai_delay: DEFAULT_AI_DELAY,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a grid of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Total number of ship segments in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Reject configurations for which random layout could never finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_layout(self.size, &self.fleet, self.max_placement_attempts)
    }
}

/// Check that `fleet` can be laid out on a `size`×`size` grid.
///
/// Every ship together with its one-cell gap covers a `2 × (len + 1)` block
/// of the grid extended by one row and one column, so the blocks must fit
/// in `(size + 1)²` cells. The bound is necessary, not sufficient.
pub fn validate_layout(
    size: usize,
    fleet: &[usize],
    max_attempts: usize,
) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::ZeroSize);
    }
    if fleet.is_empty() {
        return Err(ConfigError::EmptyFleet);
    }
    if max_attempts == 0 {
        return Err(ConfigError::ZeroPlacementAttempts);
    }
    for &length in fleet {
        if length == 0 {
            return Err(ConfigError::ZeroLengthShip);
        }
        if length > size {
            return Err(ConfigError::ShipTooLong { length, size });
        }
    }
    let required: usize = fleet.iter().map(|len| 2 * (len + 1)).sum();
    let available = (size + 1) * (size + 1);
    if required > available {
        return Err(ConfigError::FleetTooLarge {
            required,
            available,
        });
    }
    Ok(())
}
