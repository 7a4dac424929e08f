//! Half-inning driver.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::lineup::Lineup;
use crate::narration::{self, Narrator, PlayEvent};
use crate::random::Randomness;
use crate::source::OutcomeSource;
use crate::state::GameState;
use crate::transition::BaseState;

/// Plays one half-inning: steal attempts, then a plate appearance, for
/// each batter in turn until three outs are recorded.
///
/// The lineup pointer in the state advances modulo nine and carries over
/// to the next inning.
pub struct InningEngine<'e, R, O> {
    lineup: &'e Lineup,
    config: &'e SimConfig,
    rng: &'e mut R,
    outcomes: &'e mut O,
    narrator: &'e mut dyn Narrator,
}

impl<'e, R: Randomness, O: OutcomeSource> InningEngine<'e, R, O> {
    pub fn new(
        lineup: &'e Lineup,
        config: &'e SimConfig,
        rng: &'e mut R,
        outcomes: &'e mut O,
        narrator: &'e mut dyn Narrator,
    ) -> Self {
        Self {
            lineup,
            config,
            rng,
            outcomes,
            narrator,
        }
    }

    /// Play the inning from a fresh base state and return the state after
    /// the third out.
    ///
    /// Fails with [`SimError::RunawayInning`] when the configured
    /// plate-appearance cap is reached first.
    pub fn play(&mut self, state: GameState) -> Result<GameState, SimError> {
        let mut state = state.start_inning();
        let cap = self.config.max_plate_appearances_per_inning;
        let mut plate_appearances = 0u32;
        let starting_score = state.score;

        narration::emit(
            &mut *self.narrator,
            PlayEvent::InningStarted {
                inning: state.inning,
            },
        );

        while !state.inning_over() {
            if plate_appearances >= cap {
                return Err(SimError::RunawayInning {
                    inning: state.inning,
                    plate_appearances,
                    score: state.score,
                });
            }

            let mut rules = BaseState::new(self.config, &mut *self.rng, &mut *self.narrator);
            state = rules.attempt_steals(state);

            let batter = self.lineup.batter(state.batting_index);
            rules.narrate(PlayEvent::BatterUp {
                name: batter.name().to_string(),
                slot: state.batting_index,
            });
            let outcome = self.outcomes.draw(batter, rules.randomness());
            state = rules.resolve(state, outcome);

            state = state.next_batter();
            plate_appearances += 1;
        }

        tracing::debug!(
            inning = state.inning,
            runs = state.score - starting_score,
            plate_appearances,
            "inning complete"
        );
        narration::emit(
            &mut *self.narrator,
            PlayEvent::InningEnded {
                inning: state.inning,
                score: state.score,
                bases: state.bases,
            },
        );
        Ok(state)
    }
}
