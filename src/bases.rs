//! Base occupancy and the deterministic transition tables.
//!
//! The three bases are modeled as an 8-valued enumeration so that every
//! transition table is an exhaustive `match`. Tables that involve no
//! randomness (walk, triple, home run, sacrifice advancement and double
//! play) live here; the randomized ones are in [`crate::transition`].

use serde::{Deserialize, Serialize};

/// One of the three bases a runner can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    First,
    Second,
    Third,
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Base::First => "1st",
            Base::Second => "2nd",
            Base::Third => "3rd",
        })
    }
}

/// Which bases are occupied by a runner.
///
/// # Examples
///
/// ```rust
/// use lineupsim::BaseOccupancy;
///
/// let bases = BaseOccupancy::from_runners(true, false, true);
/// assert_eq!(bases, BaseOccupancy::FirstThird);
/// assert_eq!(bases.runners(), 2);
///
/// let after = bases.walk();
/// assert_eq!(after.bases, BaseOccupancy::Loaded);
/// assert_eq!(after.runs, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseOccupancy {
    #[default]
    Empty,
    First,
    Second,
    Third,
    FirstSecond,
    FirstThird,
    SecondThird,
    Loaded,
}

/// Bases and runs resulting from a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Occupancy after the play.
    pub bases: BaseOccupancy,
    /// Runs that crossed home plate on the play.
    pub runs: u32,
}

impl Advance {
    pub fn new(bases: BaseOccupancy, runs: u32) -> Self {
        Self { bases, runs }
    }
}

/// Result of a double play on an occupied base configuration.
///
/// `run_on_play` counts the runner that crosses home while the second out
/// is made. It only scores when that out does not end the inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoublePlay {
    pub bases: BaseOccupancy,
    pub run_on_play: u32,
}

impl BaseOccupancy {
    /// All eight configurations.
    pub const ALL: [BaseOccupancy; 8] = [
        BaseOccupancy::Empty,
        BaseOccupancy::First,
        BaseOccupancy::Second,
        BaseOccupancy::Third,
        BaseOccupancy::FirstSecond,
        BaseOccupancy::FirstThird,
        BaseOccupancy::SecondThird,
        BaseOccupancy::Loaded,
    ];

    /// Build a configuration from three occupancy flags.
    pub fn from_runners(first: bool, second: bool, third: bool) -> Self {
        match (first, second, third) {
            (false, false, false) => BaseOccupancy::Empty,
            (true, false, false) => BaseOccupancy::First,
            (false, true, false) => BaseOccupancy::Second,
            (false, false, true) => BaseOccupancy::Third,
            (true, true, false) => BaseOccupancy::FirstSecond,
            (true, false, true) => BaseOccupancy::FirstThird,
            (false, true, true) => BaseOccupancy::SecondThird,
            (true, true, true) => BaseOccupancy::Loaded,
        }
    }

    /// Occupancy flags as `(first, second, third)`.
    pub fn runners_on(self) -> (bool, bool, bool) {
        match self {
            BaseOccupancy::Empty => (false, false, false),
            BaseOccupancy::First => (true, false, false),
            BaseOccupancy::Second => (false, true, false),
            BaseOccupancy::Third => (false, false, true),
            BaseOccupancy::FirstSecond => (true, true, false),
            BaseOccupancy::FirstThird => (true, false, true),
            BaseOccupancy::SecondThird => (false, true, true),
            BaseOccupancy::Loaded => (true, true, true),
        }
    }

    pub fn is_occupied(self, base: Base) -> bool {
        let (first, second, third) = self.runners_on();
        match base {
            Base::First => first,
            Base::Second => second,
            Base::Third => third,
        }
    }

    /// Number of runners on base.
    pub fn runners(self) -> u32 {
        let (first, second, third) = self.runners_on();
        first as u32 + second as u32 + third as u32
    }

    pub fn is_empty(self) -> bool {
        self == BaseOccupancy::Empty
    }

    /// Walk: runners move only when forced, a run scores only with the
    /// bases loaded.
    pub fn walk(self) -> Advance {
        match self {
            BaseOccupancy::Empty => Advance::new(BaseOccupancy::First, 0),
            BaseOccupancy::First => Advance::new(BaseOccupancy::FirstSecond, 0),
            BaseOccupancy::Second => Advance::new(BaseOccupancy::FirstSecond, 0),
            BaseOccupancy::Third => Advance::new(BaseOccupancy::FirstThird, 0),
            BaseOccupancy::FirstSecond => Advance::new(BaseOccupancy::Loaded, 0),
            BaseOccupancy::FirstThird => Advance::new(BaseOccupancy::Loaded, 0),
            BaseOccupancy::SecondThird => Advance::new(BaseOccupancy::Loaded, 0),
            BaseOccupancy::Loaded => Advance::new(BaseOccupancy::Loaded, 1),
        }
    }

    /// Triple: every runner scores, the batter stands on third.
    pub fn triple(self) -> Advance {
        Advance::new(BaseOccupancy::Third, self.runners())
    }

    /// Home run: the batter and every runner score.
    pub fn home_run(self) -> Advance {
        Advance::new(BaseOccupancy::Empty, 1 + self.runners())
    }

    /// Sacrifice fly or bunt: every runner moves up one base, a runner on
    /// third scores.
    pub fn sacrifice_advance(self) -> Advance {
        match self {
            BaseOccupancy::Empty => Advance::new(BaseOccupancy::Empty, 0),
            BaseOccupancy::First => Advance::new(BaseOccupancy::Second, 0),
            BaseOccupancy::Second => Advance::new(BaseOccupancy::Third, 0),
            BaseOccupancy::Third => Advance::new(BaseOccupancy::Empty, 1),
            BaseOccupancy::FirstSecond => Advance::new(BaseOccupancy::SecondThird, 0),
            BaseOccupancy::FirstThird => Advance::new(BaseOccupancy::Second, 1),
            BaseOccupancy::SecondThird => Advance::new(BaseOccupancy::Third, 1),
            BaseOccupancy::Loaded => Advance::new(BaseOccupancy::SecondThird, 1),
        }
    }

    /// Double play: one runner is retired along with the batter.
    ///
    /// Returns `None` with the bases empty, where a double play cannot
    /// happen.
    pub fn double_play(self) -> Option<DoublePlay> {
        let (bases, run_on_play) = match self {
            BaseOccupancy::Empty => return None,
            // force at home, batter out at first
            BaseOccupancy::Loaded => (BaseOccupancy::SecondThird, 0),
            // 6-4-3 behind the lead runner, who takes third
            BaseOccupancy::FirstSecond => (BaseOccupancy::Third, 0),
            // runner from third scores on the turn
            BaseOccupancy::FirstThird => (BaseOccupancy::Empty, 1),
            BaseOccupancy::First => (BaseOccupancy::Empty, 0),
            // lead runner thrown out at home
            BaseOccupancy::SecondThird => (BaseOccupancy::Second, 0),
            BaseOccupancy::Second => (BaseOccupancy::Empty, 0),
            BaseOccupancy::Third => (BaseOccupancy::Empty, 0),
        };
        Some(DoublePlay { bases, run_on_play })
    }
}

impl std::fmt::Display for BaseOccupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BaseOccupancy::Empty => "bases empty",
            BaseOccupancy::First => "runner on 1st",
            BaseOccupancy::Second => "runner on 2nd",
            BaseOccupancy::Third => "runner on 3rd",
            BaseOccupancy::FirstSecond => "runners on 1st and 2nd",
            BaseOccupancy::FirstThird => "runners on 1st and 3rd",
            BaseOccupancy::SecondThird => "runners on 2nd and 3rd",
            BaseOccupancy::Loaded => "bases loaded",
        })
    }
}
