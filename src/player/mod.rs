//! Combatant trait and implementations
//!
//! - AutomatedCombatant: uniform random targeting of cells not yet resolved
//! - HumanCombatant: interactive console player reading `row col` lines

use alloc::string::String;
use core::fmt;

use crate::engine::{Coordinate, Grid, GridError, ShotOutcome};
use rand::rngs::SmallRng;

/// Reasons a combatant could not produce a target at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The input stream ended before a target was entered.
    InputClosed,
    /// Reading input or writing a prompt failed.
    Io(String),
    /// The opposing grid has no cell left that accepts a shot.
    Exhausted,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::InputClosed => write!(f, "Input closed before a target was chosen"),
            TargetError::Io(e) => write!(f, "I/O error while choosing a target: {}", e),
            TargetError::Exhausted => write!(f, "No cells left to fire at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for TargetError {
    fn from(err: std::io::Error) -> Self {
        TargetError::Io(std::string::ToString::to_string(&err))
    }
}

/// A target together with what the opposing grid made of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub result: Result<ShotOutcome, GridError>,
}

/// Something that picks where to fire each turn.
pub trait Combatant {
    /// Choose the next coordinate to fire at on `target`.
    fn choose_target(&mut self, rng: &mut SmallRng, target: &Grid)
        -> Result<Coordinate, TargetError>;

    /// Choose a target and fire it at `target`. Grid rejections are returned
    /// in [`Shot::result`] for the caller to re-solicit.
    fn take_turn(&mut self, rng: &mut SmallRng, target: &mut Grid) -> Result<Shot, TargetError> {
        let coord = self.choose_target(rng, target)?;
        Ok(Shot {
            target: coord,
            result: target.resolve_shot(coord),
        })
    }

    /// Inform the combatant that its target was rejected by the grid.
    fn handle_rejected_target(&mut self, _coord: Coordinate, _err: GridError) {}

    /// Inform the combatant of the outcome of an accepted shot.
    fn handle_shot_result(&mut self, _coord: Coordinate, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AutomatedCombatant;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, HumanCombatant, InputError};
