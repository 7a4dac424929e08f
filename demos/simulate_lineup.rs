//! Lineup comparison: estimating expected runs for two batting orders
//!
//! This example demonstrates:
//! - Building batters from probability vectors and season batting lines
//! - Loading a lineup from JSON
//! - Running parallel Monte Carlo batches
//! - Comparing baserunning configurations
//!
//! Run with `RUST_LOG=lineupsim=info` to see batch timing.

use lineupsim::simulation::{simulate, ScoreSummary};
use lineupsim::*;
use tracing_subscriber::EnvFilter;

const GAMES: usize = 20_000;
const SEED: u64 = 2024;

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Lineup Simulation ===\n");

    // ===== Building a lineup by hand =====
    println!("1. Contact lineup (probability vectors)\n");

    let contact = Batter::new("Contact", &[0.12, 0.50, 0.08, 0.22, 0.05, 0.01, 0.02])?;
    let power = Batter::new("Power", &[0.30, 0.36, 0.12, 0.10, 0.05, 0.00, 0.07])?;
    let slugger = Batter::from_batting_line(
        "Slugger",
        &BattingLine {
            plate_appearances: 650,
            strikeouts: 150,
            walks: 90,
            hits: 160,
            doubles: 32,
            triples: 2,
            home_runs: 45,
        },
    )?;
    println!("  {slugger}");

    let mut batters = vec![contact.clone(), contact.clone(), slugger, power];
    batters.extend(std::iter::repeat(contact).take(5));
    let contact_lineup = Lineup::new(batters)?;

    let config = SimConfig::default();
    let summary = simulate(&contact_lineup, &config, GAMES, SEED)?;
    print_summary("Contact lineup", &summary);

    // ===== Loading a lineup from JSON =====
    println!("2. Power lineup (JSON)\n");

    let power_entry = r#"{ "name": "Power", "probabilities": [0.30, 0.36, 0.12, 0.10, 0.05, 0.00, 0.07] }"#;
    let json = format!("[{}]", vec![power_entry; LINEUP_SIZE].join(","));
    let power_lineup = Lineup::from_json(&json)?;
    println!("  Order: {}", power_lineup.names().join(", "));

    let summary = simulate(&power_lineup, &config, GAMES, SEED)?;
    print_summary("Power lineup", &summary);

    // ===== Baserunning =====
    println!("3. Baserunning configurations (contact lineup)\n");

    let careful = SimConfig::station_to_station();
    let aggressive = SimConfig::from_json(
        r#"{
            "steal_second": 0.15,
            "steal_third": 0.05,
            "first_to_third_on_single": 0.5,
            "score_from_second_on_single": 0.8,
            "score_from_first_on_double": 0.6
        }"#,
    )?;

    for (label, config) in [("Station to station", careful), ("Aggressive", aggressive)] {
        let summary = simulate(&contact_lineup, &config, GAMES, SEED)?;
        println!("  {label:<20} {:.3} runs/game", summary.mean);
    }
    println!();

    Ok(())
}

fn print_summary(label: &str, summary: &ScoreSummary) {
    println!("  {label}: {} games", summary.games);
    println!(
        "  mean {:.3}  median {:.1}  std dev {:.3}  range {}-{}",
        summary.mean, summary.median, summary.std_dev, summary.min, summary.max
    );
    println!("  Most common scores:");
    let mut common: Vec<_> = summary.histogram.iter().collect();
    common.sort_by(|a, b| b.1.cmp(a.1));
    for (score, count) in common.into_iter().take(5) {
        let share = *count as f64 / summary.games as f64 * 100.0;
        println!("    {score:>2} runs: {share:5.1}%");
    }
    println!();
}
