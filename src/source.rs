//! Outcome sources.
//!
//! An [`OutcomeSource`] decides how a plate appearance ends. The default
//! [`WeightedDraw`] samples the batter's own distribution with one uniform
//! draw; [`ScriptedOutcomes`] replays a fixed sequence for tests and demos.

use crate::batter::Batter;
use crate::outcome::Outcome;
use crate::random::Randomness;

/// Supplies the outcome of a batter's plate appearance.
pub trait OutcomeSource {
    fn draw<R: Randomness>(&mut self, batter: &Batter, rng: &mut R) -> Outcome;
}

/// Categorical draw from the batter's probability vector.
///
/// Consumes exactly one uniform value per plate appearance.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{Batter, Outcome};
/// use lineupsim::random::ScriptedRandomness;
/// use lineupsim::source::{OutcomeSource, WeightedDraw};
///
/// let batter = Batter::new("Even", &[0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
/// let mut rng = ScriptedRandomness::new([0.25, 0.75]);
/// assert_eq!(WeightedDraw.draw(&batter, &mut rng), Outcome::StrikeOut);
/// assert_eq!(WeightedDraw.draw(&batter, &mut rng), Outcome::InPlayOut);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedDraw;

impl OutcomeSource for WeightedDraw {
    fn draw<R: Randomness>(&mut self, batter: &Batter, rng: &mut R) -> Outcome {
        let u = rng.uniform();
        let mut cumulative = 0.0;
        let mut last_possible = Outcome::HomeRun;
        for outcome in Outcome::ALL {
            let p = batter.probability(outcome);
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last_possible = outcome;
            if u < cumulative {
                return outcome;
            }
        }
        // rounding left the cumulative sum just under the draw
        last_possible
    }
}

/// Replays a fixed outcome sequence in a loop, ignoring the batter.
///
/// An empty script always produces a strike-out.
#[derive(Debug, Clone)]
pub struct ScriptedOutcomes {
    script: Vec<Outcome>,
    position: usize,
}

impl ScriptedOutcomes {
    pub fn new(script: impl IntoIterator<Item = Outcome>) -> Self {
        Self {
            script: script.into_iter().collect(),
            position: 0,
        }
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn draw<R: Randomness>(&mut self, _batter: &Batter, _rng: &mut R) -> Outcome {
        if self.script.is_empty() {
            return Outcome::StrikeOut;
        }
        let outcome = self.script[self.position % self.script.len()];
        self.position += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngRandomness, ScriptedRandomness};

    fn batter(probs: &[f64]) -> Batter {
        Batter::new("Test", probs).unwrap()
    }

    #[test]
    fn test_certain_outcome_always_drawn() {
        let always_out = batter(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mut rng = RngRandomness::seeded(3);
        for _ in 0..500 {
            assert_eq!(WeightedDraw.draw(&always_out, &mut rng), Outcome::InPlayOut);
        }
    }

    #[test]
    fn test_band_edges() {
        let b = batter(&[0.1, 0.2, 0.1, 0.2, 0.2, 0.1, 0.1]);
        let mut rng = ScriptedRandomness::new([0.05, 0.15, 0.35, 0.5, 0.7, 0.85, 0.95, 0.99]);
        let drawn: Vec<Outcome> = (0..8).map(|_| WeightedDraw.draw(&b, &mut rng)).collect();
        assert_eq!(
            drawn,
            vec![
                Outcome::StrikeOut,
                Outcome::InPlayOut,
                Outcome::Walk,
                Outcome::Single,
                Outcome::Double,
                Outcome::Triple,
                Outcome::HomeRun,
                Outcome::HomeRun,
            ]
        );
    }

    #[test]
    fn test_zero_probability_never_drawn_at_top_of_range() {
        let b = batter(&[0.0, 0.6, 0.4, 0.0, 0.0, 0.0, 0.0]);
        let mut rng = ScriptedRandomness::new([0.999_999_999]);
        assert_eq!(WeightedDraw.draw(&b, &mut rng), Outcome::Walk);
    }

    #[test]
    fn test_frequencies_follow_distribution() {
        let b = batter(&[0.25, 0.25, 0.0, 0.5, 0.0, 0.0, 0.0]);
        let mut rng = RngRandomness::seeded(11);
        let singles = (0..20_000)
            .filter(|_| WeightedDraw.draw(&b, &mut rng) == Outcome::Single)
            .count();
        let share = singles as f64 / 20_000.0;
        assert!((share - 0.5).abs() < 0.02, "share={share}");
    }

    #[test]
    fn test_scripted_outcomes_cycle() {
        let b = batter(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mut rng = ScriptedRandomness::new([]);
        let mut source = ScriptedOutcomes::new([Outcome::HomeRun, Outcome::Walk]);
        let drawn: Vec<Outcome> = (0..3).map(|_| source.draw(&b, &mut rng)).collect();
        assert_eq!(drawn, vec![Outcome::HomeRun, Outcome::Walk, Outcome::HomeRun]);
        assert_eq!(rng.consumed(), 0);
    }
}
