#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use crate::engine::{Coordinate, Grid, GridError};
use rand::rngs::SmallRng;

use super::{Combatant, TargetError};

/// Why a line typed by the human was not accepted as a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not contain exactly two tokens.
    WrongTokenCount(usize),
    /// A token was not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(_) => {
                write!(f, "Enter 2 coordinates separated by a space!")
            }
            InputError::NotANumber(_) => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a 1-indexed `row col` line into a 0-indexed [`Coordinate`].
///
/// Only the shape of the input is checked here; bounds are the grid's job.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount(tokens.len()));
    }
    let parse = |token: &str| -> Result<i32, InputError> {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(InputError::NotANumber(token.to_string()));
        }
        token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    let row = parse(tokens[0])?;
    let col = parse(tokens[1])?;
    Ok(Coordinate::new(row - 1, col - 1))
}

/// Console player: prompts on `output`, reads targets from `input`.
pub struct HumanCombatant<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl HumanCombatant<StdinLock<'static>, Stdout> {
    /// Human playing on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanCombatant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a line parses as a target.
    fn read_target(&mut self) -> Result<Coordinate, TargetError> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                writeln!(self.output)?;
                return Err(TargetError::InputClosed);
            }
            match parse_target(&self.buf) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Combatant for HumanCombatant<R, W> {
    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _target: &Grid,
    ) -> Result<Coordinate, TargetError> {
        self.read_target()
    }

    fn handle_rejected_target(&mut self, coord: Coordinate, err: GridError) {
        if let Err(e) = writeln!(self.output, "{}", err) {
            log::warn!("could not report rejected target {}: {}", coord, e);
        }
    }
}
