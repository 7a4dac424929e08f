//! Full-game driver.
//!
//! `GameEngine` plays the configured number of innings for one lineup and
//! keeps the cumulative score. [`GameEngine::reset`] rewinds it for the
//! next independent trial while the random stream keeps running.

use crate::config::SimConfig;
use crate::error::{ConfigurationError, SimError};
use crate::inning::InningEngine;
use crate::lineup::Lineup;
use crate::narration::{self, GameLog, Narrator, PlayEvent, Silent};
use crate::random::{Randomness, RngRandomness};
use crate::source::{OutcomeSource, WeightedDraw};
use crate::state::GameState;
use rand::rngs::SmallRng;

/// Plays whole games for a fixed lineup and configuration.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{Batter, GameEngine, Lineup, SimConfig};
///
/// let out_machine = Batter::new("Out Machine", &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
/// let lineup = Lineup::new(vec![out_machine; 9]).unwrap();
/// let config = SimConfig::default();
///
/// let mut game = GameEngine::seeded(&lineup, &config, 42).unwrap();
/// assert_eq!(game.play().unwrap(), 0);
/// assert_eq!(game.state().batting_index, 0); // 27 batters, 3 times through
/// ```
pub struct GameEngine<'a, R, O = WeightedDraw> {
    lineup: &'a Lineup,
    config: &'a SimConfig,
    rng: R,
    outcomes: O,
    state: GameState,
}

impl<'a> GameEngine<'a, RngRandomness<SmallRng>, WeightedDraw> {
    /// Engine drawing batter outcomes from their distributions with a
    /// seeded generator.
    pub fn seeded(
        lineup: &'a Lineup,
        config: &'a SimConfig,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(lineup, config, RngRandomness::seeded(seed), WeightedDraw)
    }
}

impl<'a, R: Randomness, O: OutcomeSource> GameEngine<'a, R, O> {
    /// Validates `config` before building the engine.
    pub fn new(
        lineup: &'a Lineup,
        config: &'a SimConfig,
        rng: R,
        outcomes: O,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            lineup,
            config,
            rng,
            outcomes,
            state: GameState::new(),
        })
    }

    /// Play every inning and return the final score.
    ///
    /// Calling this again after a finished game starts a new game, as if
    /// [`GameEngine::reset`] had been called.
    pub fn play(&mut self) -> Result<u32, SimError> {
        self.play_narrated(&mut Silent)
    }

    /// Play every inning, sending play-by-play events to `narrator`.
    pub fn play_narrated(&mut self, narrator: &mut dyn Narrator) -> Result<u32, SimError> {
        if self.is_finished() {
            self.reset();
        }
        narration::emit(
            &mut *narrator,
            PlayEvent::LineupAnnounced {
                names: self.lineup.names().into_iter().map(String::from).collect(),
            },
        );
        while !self.is_finished() {
            self.play_inning(narrator)?;
        }
        narration::emit(
            &mut *narrator,
            PlayEvent::FinalScore {
                score: self.state.score,
            },
        );
        tracing::debug!(score = self.state.score, "game complete");
        Ok(self.state.score)
    }

    /// Play one game and return its full narration.
    pub fn play_logged(&mut self) -> Result<GameLog, SimError> {
        let mut log = GameLog::new();
        self.play_narrated(&mut log)?;
        Ok(log)
    }

    /// Play the next inning only.
    pub fn play_inning(&mut self, narrator: &mut dyn Narrator) -> Result<u32, SimError> {
        let before = self.state.score;
        let mut inning = InningEngine::new(
            self.lineup,
            self.config,
            &mut self.rng,
            &mut self.outcomes,
            &mut *narrator,
        );
        self.state = inning.play(self.state)?.end_inning();
        Ok(self.state.score - before)
    }

    /// Clear the score and return to the leadoff batter in the first
    /// inning. The lineup, configuration and random stream are kept.
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    /// Every configured inning has been played.
    pub fn is_finished(&self) -> bool {
        self.state.inning > self.config.innings
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn lineup(&self) -> &Lineup {
        self.lineup
    }
}
