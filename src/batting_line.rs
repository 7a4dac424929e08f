//! Season counting stats.
//!
//! A `BattingLine` holds the raw plate-appearance totals a batter
//! accumulated and converts them into the per-outcome probability vector
//! used by [`crate::Batter`].

use crate::error::ConfigurationError;
use crate::outcome::OUTCOME_COUNT;
use serde::{Deserialize, Serialize};

/// Plate-appearance totals for one batter.
///
/// Every plate appearance that is not a strikeout, walk or hit is counted
/// as an out in play.
///
/// # Examples
///
/// ```rust
/// use lineupsim::BattingLine;
///
/// let line = BattingLine {
///     plate_appearances: 100,
///     strikeouts: 20,
///     walks: 10,
///     hits: 30,
///     doubles: 6,
///     triples: 1,
///     home_runs: 5,
/// };
/// let probs = line.probabilities("Example").unwrap();
/// assert_eq!(probs, [0.2, 0.4, 0.1, 0.18, 0.06, 0.01, 0.05]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingLine {
    pub plate_appearances: u32,
    pub strikeouts: u32,
    pub walks: u32,
    /// All hits, extra-base hits included.
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
}

impl BattingLine {
    /// Outcome probabilities in [`crate::Outcome::ALL`] order.
    ///
    /// `name` only labels the error.
    pub fn probabilities(&self, name: &str) -> Result<[f64; OUTCOME_COUNT], ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidBattingLine {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if self.plate_appearances == 0 {
            return Err(invalid("no plate appearances"));
        }
        let extra_base = self.doubles as u64 + self.triples as u64 + self.home_runs as u64;
        if extra_base > self.hits as u64 {
            return Err(invalid("extra-base hits exceed total hits"));
        }
        let reached_or_struck = self.strikeouts as u64 + self.walks as u64 + self.hits as u64;
        if reached_or_struck > self.plate_appearances as u64 {
            return Err(invalid("strikeouts, walks and hits exceed plate appearances"));
        }

        let pa = self.plate_appearances as f64;
        let in_play_outs = self.plate_appearances as u64 - reached_or_struck;
        let singles = self.hits as u64 - extra_base;

        Ok([
            self.strikeouts as f64 / pa,
            in_play_outs as f64 / pa,
            self.walks as f64 / pa,
            singles as f64 / pa,
            self.doubles as f64 / pa,
            self.triples as f64 / pa,
            self.home_runs as f64 / pa,
        ])
    }
}
