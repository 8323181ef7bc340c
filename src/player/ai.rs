use core::time::Duration;

use crate::engine::{Coordinate, Grid};
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Combatant, TargetError};

/// Automated player firing at uniformly random cells that still accept a shot.
///
/// Keeps no memory between turns; a hit does not steer the next shot.
pub struct AutomatedCombatant {
    delay: Duration,
}

impl AutomatedCombatant {
    /// Automated player pausing for `delay` before each shot.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Automated player that fires immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn pause(&self) {
        #[cfg(feature = "std")]
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl Combatant for AutomatedCombatant {
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Grid,
    ) -> Result<Coordinate, TargetError> {
        let n = target.size() as i32;
        let open = (0..n).any(|r| (0..n).any(|c| target.can_target(Coordinate::new(r, c))));
        if !open {
            return Err(TargetError::Exhausted);
        }
        self.pause();
        loop {
            let coord = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            if target.can_target(coord) {
                log::debug!("automated player fires at {:?}", coord);
                return Ok(coord);
            }
        }
    }
}
