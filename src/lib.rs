//! # lineupsim - Monte Carlo Baseball Lineup Simulator
//!
//! A discrete-event simulator of the offensive half-inning, used to
//! estimate how many runs a batting order produces by playing many
//! independent games:
//! - **Exhaustive** base-state transitions (every outcome is a `match` over
//!   the eight base configurations)
//! - **Injectable randomness** (seeded generators for reproducible runs,
//!   scripted draws for tests)
//! - **Parallel** Monte Carlo batches with per-game seeds
//!
//! ## Core Concepts
//!
//! ### Plate Appearance Pipeline
//!
//! ```text
//! [steal attempts] → [OutcomeSource::draw] → [BaseState transition] → next batter
//! ```
//!
//! 1. **Steals** are attempted before each plate appearance
//! 2. **Outcome** is drawn from the batter's own probability vector
//! 3. **BaseState** resolves the outcome into bases, outs and runs
//!
//! [`InningEngine`] repeats this until three outs; [`GameEngine`] plays
//! the configured number of innings and keeps the score.
//!
//! ## Example
//!
//! ```rust
//! use lineupsim::*;
//!
//! let batter = Batter::new("Regular", &[0.2, 0.45, 0.09, 0.16, 0.05, 0.005, 0.045]).unwrap();
//! let lineup = Lineup::new(vec![batter; 9]).unwrap();
//! let config = SimConfig::default();
//!
//! // One reproducible game
//! let mut game = GameEngine::seeded(&lineup, &config, 2024).unwrap();
//! let score = game.play().unwrap();
//!
//! let mut replay = GameEngine::seeded(&lineup, &config, 2024).unwrap();
//! assert_eq!(replay.play().unwrap(), score);
//!
//! // Expected runs over many games
//! let summary = simulation::simulate(&lineup, &config, 500, 1).unwrap();
//! assert_eq!(summary.games, 500);
//! ```
//!
//! ## Modules
//!
//! - [`outcome`] - The seven plate-appearance outcomes
//! - [`bases`] - Base occupancy and deterministic transition tables
//! - [`state`] - Game state value type
//! - [`transition`] - Randomized transition rules
//! - [`random`] - Randomness providers
//! - [`source`] - Outcome sources
//! - [`batter`], [`batting_line`], [`lineup`] - Players and batting order
//! - [`config`] - Simulation parameters
//! - [`inning`], [`game`] - Engines
//! - [`simulation`] - Monte Carlo batches
//! - [`narration`] - Play-by-play events
//! - [`error`] - Error types

pub mod bases;
pub mod batter;
pub mod batting_line;
pub mod config;
pub mod error;
pub mod game;
pub mod inning;
pub mod lineup;
pub mod narration;
pub mod outcome;
pub mod random;
pub mod simulation;
pub mod source;
pub mod state;
pub mod transition;

// Re-export main types for convenience
pub use bases::{Advance, Base, BaseOccupancy, DoublePlay};
pub use batter::Batter;
pub use batting_line::BattingLine;
pub use config::SimConfig;
pub use error::{ConfigurationError, SimError};
pub use game::GameEngine;
pub use inning::InningEngine;
pub use lineup::{Lineup, LINEUP_SIZE};
pub use outcome::Outcome;
pub use state::GameState;
pub use transition::BaseState;

// Re-export randomness and outcome sources
pub use random::{Randomness, RngRandomness, ScriptedRandomness};
pub use source::{OutcomeSource, ScriptedOutcomes, WeightedDraw};

// Re-export narration
pub use narration::{GameLog, Narrator, PlayEvent, Silent};
