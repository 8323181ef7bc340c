#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod ui;

pub use engine::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
