//! Game state value type.
//!
//! `GameState` is a plain `Copy` value. Transition functions take a state
//! and return the next one; only the inning and game engines hold a
//! mutable binding to it.

use crate::bases::{Advance, BaseOccupancy};
use crate::lineup::LINEUP_SIZE;
use serde::{Deserialize, Serialize};

/// Outs that end a half-inning.
pub const OUTS_PER_INNING: u8 = 3;

/// Score, outs, lineup pointer and base occupancy of one game in progress.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{Advance, BaseOccupancy, GameState};
///
/// let state = GameState::new()
///     .apply(Advance::new(BaseOccupancy::Second, 1))
///     .record_out();
///
/// assert_eq!(state.score, 1);
/// assert_eq!(state.outs, 1);
/// assert_eq!(state.bases, BaseOccupancy::Second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Runs scored so far in the game.
    pub score: u32,
    /// Outs recorded in the current inning, in `0..=3`.
    pub outs: u8,
    /// Lineup slot of the batter due up, in `0..9`.
    pub batting_index: usize,
    /// Current inning, 1-based.
    pub inning: u32,
    pub bases: BaseOccupancy,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// State at the first pitch of a game.
    pub fn new() -> Self {
        Self {
            score: 0,
            outs: 0,
            batting_index: 0,
            inning: 1,
            bases: BaseOccupancy::Empty,
        }
    }

    /// Clear the bases and the out count. Score and lineup pointer carry
    /// over from the previous inning.
    #[must_use]
    pub fn start_inning(self) -> Self {
        Self {
            outs: 0,
            bases: BaseOccupancy::Empty,
            ..self
        }
    }

    /// Move the inning counter forward once an inning is complete.
    #[must_use]
    pub fn end_inning(self) -> Self {
        Self {
            inning: self.inning + 1,
            ..self
        }
    }

    #[must_use]
    pub fn next_batter(self) -> Self {
        Self {
            batting_index: (self.batting_index + 1) % LINEUP_SIZE,
            ..self
        }
    }

    /// Record one out, saturating at three.
    #[must_use]
    pub fn record_out(self) -> Self {
        Self {
            outs: (self.outs + 1).min(OUTS_PER_INNING),
            ..self
        }
    }

    #[must_use]
    pub fn score_runs(self, runs: u32) -> Self {
        Self {
            score: self.score + runs,
            ..self
        }
    }

    #[must_use]
    pub fn with_bases(self, bases: BaseOccupancy) -> Self {
        Self { bases, ..self }
    }

    /// Replace the bases and add the runs of `advance`.
    #[must_use]
    pub fn apply(self, advance: Advance) -> Self {
        self.with_bases(advance.bases).score_runs(advance.runs)
    }

    pub fn inning_over(&self) -> bool {
        self.outs >= OUTS_PER_INNING
    }
}
