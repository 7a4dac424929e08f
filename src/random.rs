//! Randomness provider.
//!
//! Every random decision in the simulator goes through a [`Randomness`]
//! implementation. Production code uses a seeded `rand` generator; tests
//! script the exact draws with [`ScriptedRandomness`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform draws in `[0, 1)`.
pub trait Randomness {
    /// Draw a uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Draw once and report whether the draw falls below `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }
}

/// [`Randomness`] backed by any `rand` generator.
///
/// # Examples
///
/// ```rust
/// use lineupsim::random::{Randomness, RngRandomness};
///
/// let mut a = RngRandomness::seeded(7);
/// let mut b = RngRandomness::seeded(7);
/// assert_eq!(a.uniform(), b.uniform());
/// ```
#[derive(Debug, Clone)]
pub struct RngRandomness<R> {
    rng: R,
}

impl<R: Rng> RngRandomness<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRandomness<SmallRng> {
    /// Fast generator seeded for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Randomness for RngRandomness<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Draw value that fails every `chance` check with a probability below 1.
pub const NEVER: f64 = 0.999_999;

/// Replays a fixed sequence of draws, then a constant fallback.
///
/// Draws below a probability make the corresponding event happen, so a
/// script of `0.0` forces an event and [`NEVER`] suppresses it.
///
/// # Examples
///
/// ```rust
/// use lineupsim::random::{Randomness, ScriptedRandomness, NEVER};
///
/// let mut rng = ScriptedRandomness::new([0.0, 0.5]);
/// assert!(rng.chance(0.1));
/// assert!(!rng.chance(0.4));
/// assert_eq!(rng.uniform(), NEVER);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandomness {
    draws: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedRandomness {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: NEVER,
            consumed: 0,
        }
    }

    /// Value returned once the script runs out.
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Total draws taken, including fallback draws.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Randomness for ScriptedRandomness {
    fn uniform(&mut self) -> f64 {
        self.consumed += 1;
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
