//! Monte Carlo runs over many independent games.
//!
//! [`simulate`] spreads games across threads with rayon. Game `i` uses its
//! own generator seeded with `seed + i`, so results do not depend on how
//! the work is scheduled. [`simulate_sequential`] replays games through a
//! single engine that is reset between trials.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::game::GameEngine;
use crate::lineup::Lineup;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Score distribution over a batch of simulated games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub games: usize,
    pub seed: u64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    /// Number of games ending with each final score.
    pub histogram: BTreeMap<u32, u64>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl ScoreSummary {
    /// Summarize a list of final scores.
    ///
    /// ```rust
    /// use lineupsim::simulation::ScoreSummary;
    /// use std::time::Duration;
    ///
    /// let summary = ScoreSummary::from_scores(vec![2, 5, 3, 2], 0, Duration::ZERO);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 2.5);
    /// assert_eq!(summary.histogram[&2], 2);
    /// ```
    pub fn from_scores(mut scores: Vec<u32>, seed: u64, elapsed: Duration) -> Self {
        let games = scores.len();
        if games == 0 {
            return Self {
                games,
                seed,
                mean: 0.0,
                median: 0.0,
                std_dev: 0.0,
                min: 0,
                max: 0,
                histogram: BTreeMap::new(),
                elapsed,
            };
        }

        let n = games as f64;
        let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance = scores
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        scores.sort_unstable();
        let median = if games % 2 == 0 {
            (scores[games / 2 - 1] as f64 + scores[games / 2] as f64) / 2.0
        } else {
            scores[games / 2] as f64
        };

        let mut histogram = BTreeMap::new();
        for &score in &scores {
            *histogram.entry(score).or_insert(0) += 1;
        }

        Self {
            games,
            seed,
            mean,
            median,
            std_dev: variance.sqrt(),
            min: scores[0],
            max: scores[games - 1],
            histogram,
            elapsed,
        }
    }
}

/// Play `games` independent games in parallel.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{Batter, Lineup, SimConfig};
/// use lineupsim::simulation::simulate;
///
/// let batter = Batter::new("Average", &[0.22, 0.44, 0.09, 0.15, 0.05, 0.005, 0.045]).unwrap();
/// let lineup = Lineup::new(vec![batter; 9]).unwrap();
/// let config = SimConfig::default();
///
/// let first = simulate(&lineup, &config, 200, 7).unwrap();
/// let second = simulate(&lineup, &config, 200, 7).unwrap();
/// assert_eq!(first.histogram, second.histogram);
/// assert!(first.mean > 0.0);
/// ```
pub fn simulate(
    lineup: &Lineup,
    config: &SimConfig,
    games: usize,
    seed: u64,
) -> Result<ScoreSummary, SimError> {
    config.validate()?;
    tracing::info!(games, seed, "starting simulation");
    let start = Instant::now();

    let scores = (0..games)
        .into_par_iter()
        .map(|i| {
            GameEngine::seeded(lineup, config, seed.wrapping_add(i as u64))?.play()
        })
        .collect::<Result<Vec<u32>, SimError>>()?;

    finish(scores, seed, start)
}

/// Play `games` games one after another on a single engine, resetting it
/// between trials.
pub fn simulate_sequential(
    lineup: &Lineup,
    config: &SimConfig,
    games: usize,
    seed: u64,
) -> Result<ScoreSummary, SimError> {
    tracing::info!(games, seed, "starting sequential simulation");
    let start = Instant::now();

    let mut engine = GameEngine::seeded(lineup, config, seed)?;
    let mut scores = Vec::with_capacity(games);
    for game in 0..games {
        engine.reset();
        scores.push(engine.play()?);
        if (game + 1) % 1_000 == 0 {
            tracing::debug!(played = game + 1, "progress");
        }
    }

    finish(scores, seed, start)
}

fn finish(scores: Vec<u32>, seed: u64, start: Instant) -> Result<ScoreSummary, SimError> {
    let summary = ScoreSummary::from_scores(scores, seed, start.elapsed());
    tracing::info!(
        games = summary.games,
        mean = summary.mean,
        std_dev = summary.std_dev,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "simulation complete"
    );
    Ok(summary)
}
