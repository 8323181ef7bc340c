//! Turn loop driving two combatants against each other's grids.

use alloc::boxed::Box;

use crate::engine::{
    ConfigError, Coordinate, GameConfig, Grid, RandomLayoutGenerator, ShotOutcome,
};
use crate::player::{Combatant, TargetError};
use rand::rngs::SmallRng;

/// One of the two sides of a match. Side `A` is the human side and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    WonByA,
    WonByB,
}

impl MatchStatus {
    fn won_by(side: Side) -> Self {
        match side {
            Side::A => MatchStatus::WonByA,
            Side::B => MatchStatus::WonByB,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::WonByA => Some(Side::A),
            MatchStatus::WonByB => Some(Side::B),
        }
    }

    pub fn is_over(self) -> bool {
        self != MatchStatus::InProgress
    }
}

/// What happened during one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Side that fired.
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Status after the shot was resolved.
    pub status: MatchStatus,
    /// Rejected targets before this one was accepted.
    pub rejected: usize,
}

/// A match between two combatants, each firing at the other's grid.
pub struct Match {
    grids: [Grid; 2],
    combatants: [Box<dyn Combatant>; 2],
    turn_owner: Side,
    status: MatchStatus,
    rng: SmallRng,
    shots: usize,
}

impl Match {
    /// Start a match. `grid_a` belongs to `combatant_a` and is fired upon by
    /// `combatant_b`, and vice versa.
    pub fn new(
        grid_a: Grid,
        combatant_a: Box<dyn Combatant>,
        grid_b: Grid,
        combatant_b: Box<dyn Combatant>,
        rng: SmallRng,
    ) -> Self {
        Self {
            grids: [grid_a, grid_b],
            combatants: [combatant_a, combatant_b],
            turn_owner: Side::A,
            status: MatchStatus::InProgress,
            rng,
            shots: 0,
        }
    }

    /// Start a match on two freshly generated random layouts.
    pub fn with_random_layouts(
        config: &GameConfig,
        combatant_a: Box<dyn Combatant>,
        combatant_b: Box<dyn Combatant>,
        mut rng: SmallRng,
    ) -> Result<Self, ConfigError> {
        let generator = RandomLayoutGenerator::from_config(config)?;
        let grid_a = generator.generate(&mut rng);
        let grid_b = generator.generate(&mut rng);
        Ok(Self::new(grid_a, combatant_a, grid_b, combatant_b, rng))
    }

    /// Grid owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn grid_mut(&mut self, side: Side) -> &mut Grid {
        &mut self.grids[side.index()]
    }

    /// Side that fires next.
    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Accepted shots so far, both sides combined.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Play one accepted shot for the turn owner, re-soliciting a target for
    /// as long as the opposing grid rejects it. Returns `None` once the match
    /// is over.
    pub fn play_turn(&mut self) -> Result<Option<TurnReport>, TargetError> {
        if self.status.is_over() {
            return Ok(None);
        }
        let side = self.turn_owner;
        let (shooter, target) = (side.index(), side.opponent().index());

        let mut rejected = 0usize;
        let (coord, outcome) = loop {
            let shot =
                self.combatants[shooter].take_turn(&mut self.rng, &mut self.grids[target])?;
            match shot.result {
                Ok(outcome) => break (shot.target, outcome),
                Err(e) => {
                    log::debug!("{:?} target rejected: {}", side, e);
                    rejected += 1;
                    self.combatants[shooter].handle_rejected_target(shot.target, e);
                }
            }
        };
        self.shots += 1;
        self.combatants[shooter].handle_shot_result(coord, outcome);

        if self.grids[target].is_defeated() {
            self.status = MatchStatus::won_by(side);
        } else if self.grids[shooter].is_defeated() {
            self.status = MatchStatus::won_by(side.opponent());
        } else if !outcome.grants_extra_turn() {
            self.turn_owner = side.opponent();
        }
        if let Some(winner) = self.status.winner() {
            log::info!("{:?} wins after {} shots", winner, self.shots);
        }

        Ok(Some(TurnReport {
            side,
            target: coord,
            outcome,
            status: self.status,
            rejected,
        }))
    }

    /// Play until one side's fleet is destroyed, calling `before_turn` ahead of
    /// each turn and `after_turn` with each report.
    pub fn run<B, A>(
        &mut self,
        mut before_turn: B,
        mut after_turn: A,
    ) -> Result<MatchStatus, TargetError>
    where
        B: FnMut(&Match),
        A: FnMut(&Match, &TurnReport),
    {
        while !self.status.is_over() {
            before_turn(&*self);
            if let Some(report) = self.play_turn()? {
                after_turn(&*self, &report);
            }
        }
        Ok(self.status)
    }
}
