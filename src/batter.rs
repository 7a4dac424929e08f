//! Batters and their outcome distributions.

use crate::batting_line::BattingLine;
use crate::error::ConfigurationError;
use crate::outcome::{Outcome, OUTCOME_COUNT};
use serde::Serialize;

/// Allowed deviation of a probability vector's sum from 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// A named batter with a fixed categorical distribution over outcomes.
///
/// The probability vector is validated once at construction and never
/// normalized: a vector that does not sum to one is rejected.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{Batter, Outcome};
///
/// let batter = Batter::new("Contact Hitter", &[0.15, 0.45, 0.08, 0.22, 0.06, 0.01, 0.03]).unwrap();
/// assert_eq!(batter.name(), "Contact Hitter");
/// assert_eq!(batter.probability(Outcome::Single), 0.22);
///
/// assert!(Batter::new("Broken", &[0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batter {
    name: String,
    probabilities: [f64; OUTCOME_COUNT],
}

impl Batter {
    /// Create a batter from a probability vector in [`Outcome::ALL`] order.
    pub fn new(name: impl Into<String>, probabilities: &[f64]) -> Result<Self, ConfigurationError> {
        let probabilities: [f64; OUTCOME_COUNT] =
            probabilities
                .try_into()
                .map_err(|_| ConfigurationError::WrongProbabilityCount {
                    expected: OUTCOME_COUNT,
                    actual: probabilities.len(),
                })?;

        for outcome in Outcome::ALL {
            let value = probabilities[outcome.index()];
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidProbability { outcome, value });
            }
        }
        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ConfigurationError::ProbabilitiesDoNotSumToOne { sum });
        }

        Ok(Self {
            name: name.into(),
            probabilities,
        })
    }

    /// Create a batter from season counting stats.
    pub fn from_batting_line(
        name: impl Into<String>,
        line: &BattingLine,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let probabilities = line.probabilities(&name)?;
        Self::new(name, &probabilities)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn probabilities(&self) -> &[f64; OUTCOME_COUNT] {
        &self.probabilities
    }

    pub fn probability(&self, outcome: Outcome) -> f64 {
        self.probabilities[outcome.index()]
    }
}

impl std::fmt::Display for Batter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.name)?;
        for outcome in Outcome::ALL {
            write!(f, " {}={:.3}", outcome, self.probability(outcome))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_length() {
        let err = Batter::new("Short", &[0.5, 0.5]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::WrongProbabilityCount {
                expected: 7,
                actual: 2
            }
        );
    }

    #[test]
    fn test_negative_entry() {
        let err = Batter::new("Neg", &[1.1, -0.1, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidProbability {
                outcome: Outcome::InPlayOut,
                value: -0.1
            }
        );
    }

    #[test]
    fn test_not_normalized() {
        let err = Batter::new("Half", &[0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::ProbabilitiesDoNotSumToOne { .. }
        ));
    }

    #[test]
    fn test_small_rounding_accepted() {
        let probs = [0.1, 0.2, 0.3, 0.1, 0.1, 0.1, 0.1 + 1e-9];
        assert!(Batter::new("Rounded", &probs).is_ok());
    }

    #[test]
    fn test_from_batting_line() {
        let line = BattingLine {
            plate_appearances: 10,
            strikeouts: 2,
            walks: 1,
            hits: 3,
            doubles: 1,
            triples: 0,
            home_runs: 1,
        };
        let batter = Batter::from_batting_line("Ten PA", &line).unwrap();
        assert_eq!(batter.probability(Outcome::InPlayOut), 0.4);
        assert_eq!(batter.probability(Outcome::Single), 0.1);
    }

    #[test]
    fn test_display_lists_outcomes() {
        let batter = Batter::new("Slugger", &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let display = batter.to_string();
        assert!(display.starts_with("Slugger:"));
        assert!(display.contains("home-run=1.000"));
    }
}
