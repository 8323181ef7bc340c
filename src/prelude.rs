//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutomatedCombatant, Combatant, Coordinate, GameConfig, Grid, GridError, Match, MatchStatus,
    Orientation, RandomLayoutGenerator, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HumanCombatant};
