//! Play-by-play: narrating a single seeded game
//!
//! This example demonstrates:
//! - Playing one reproducible game
//! - Collecting narration in a `GameLog`
//! - Exporting the log as JSON
//!
//! Pass a seed as the first argument to replay a different game.

use lineupsim::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let names = [
        "Alvarez", "Brooks", "Castillo", "Dawson", "Espinal", "Fuller", "Gibson", "Hayes", "Ito",
    ];
    let batters = names
        .iter()
        .map(|name| Batter::new(*name, &[0.22, 0.44, 0.085, 0.145, 0.045, 0.005, 0.06]))
        .collect::<Result<Vec<_>, _>>()?;
    let lineup = Lineup::new(batters)?;
    let config = SimConfig::default();

    println!("=== Play-by-Play (seed {seed}) ===\n");

    let mut game = GameEngine::seeded(&lineup, &config, seed)?;
    let log = game.play_logged()?;
    for line in log.lines() {
        println!("{line}");
    }

    let double_plays = log
        .events()
        .iter()
        .filter(|e| matches!(e, PlayEvent::DoublePlay { .. }))
        .count();
    println!("\nDouble plays turned: {double_plays}");

    match log.to_json() {
        Ok(json) => println!("JSON log: {} bytes", json.len()),
        Err(err) => println!("JSON export failed: {err}"),
    }

    Ok(())
}
