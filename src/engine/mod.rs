//! Core sea battle engine (no_std compatible)
//!
//! Grid representation, ship placement with the mandatory one-cell gap, shot
//! resolution and random fleet layout. Needs only `alloc`, so it can be built
//! without the console front end.

pub mod common;
pub mod config;
pub mod coord;
pub mod grid;
pub mod layout;
pub mod ship;

pub use common::{GridError, ShotOutcome};
pub use config::*;
pub use coord::Coordinate;
pub use grid::{Cell, Grid};
pub use layout::RandomLayoutGenerator;
pub use ship::{Orientation, Ship};
