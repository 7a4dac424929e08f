//! Error types.
//!
//! Invalid inputs are rejected when a batter, lineup or configuration is
//! built, as a [`ConfigurationError`]. Playing a game can only fail when an
//! inning runs past its plate-appearance cap, reported through [`SimError`].

use crate::outcome::Outcome;
use thiserror::Error;

/// Invalid batter, lineup or simulation parameters.
///
/// # Examples
///
/// ```rust
/// use lineupsim::ConfigurationError;
///
/// let err = ConfigurationError::LineupSize { expected: 9, actual: 8 };
/// assert_eq!(err.to_string(), "Lineup must have 9 batters, got 8");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A probability vector does not have one entry per outcome.
    #[error("Expected {expected} outcome probabilities, got {actual}")]
    WrongProbabilityCount { expected: usize, actual: usize },

    /// A probability vector entry is negative or not finite.
    #[error("Invalid probability {value} for outcome {outcome}")]
    InvalidProbability { outcome: Outcome, value: f64 },

    /// A probability vector does not sum to one.
    #[error("Outcome probabilities sum to {sum}, expected 1")]
    ProbabilitiesDoNotSumToOne { sum: f64 },

    #[error("Lineup must have {expected} batters, got {actual}")]
    LineupSize { expected: usize, actual: usize },

    /// A named simulation parameter lies outside `[0, 1]`.
    #[error("Parameter {parameter} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { parameter: &'static str, value: f64 },

    /// The in-play-out bands overlap.
    #[error("advance_on_out ({advance}) + double_play ({double_play}) exceeds 1")]
    OutOnPlayBandsExceedOne { advance: f64, double_play: f64 },

    #[error("Inning count must be at least 1, got {0}")]
    InvalidInningCount(u32),

    #[error("Plate appearance cap must be at least 1, got {0}")]
    InvalidPlateAppearanceCap(u32),

    /// Season counting stats that cannot produce a probability vector.
    #[error("Invalid batting line for {name}: {reason}")]
    InvalidBattingLine { name: String, reason: String },

    /// Malformed JSON input.
    #[error("Failed to parse input: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Parse(err.to_string())
    }
}

/// Errors that can occur while playing games.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// An inning reached the plate-appearance cap without three outs.
    #[error(
        "Inning {inning} did not end after {plate_appearances} plate appearances (score {score})"
    )]
    RunawayInning {
        inning: u32,
        plate_appearances: u32,
        score: u32,
    },
}
