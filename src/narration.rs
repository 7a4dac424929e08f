//! Play-by-play narration.
//!
//! Engines report what happens on the field as [`PlayEvent`] values sent
//! to a [`Narrator`]. Narration is informational: it never influences the
//! simulation, and the [`Silent`] narrator discards everything.

use crate::bases::{Base, BaseOccupancy};
use crate::outcome::Outcome;
use serde::Serialize;

/// Something that happened during a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayEvent {
    LineupAnnounced { names: Vec<String> },
    InningStarted { inning: u32 },
    BatterUp { name: String, slot: usize },
    PlateAppearance { outcome: Outcome, runs: u32 },
    StolenBase { base: Base },
    DoubleSteal,
    StealHome,
    DoublePlay { runs: u32 },
    SacrificeAdvance { runs: u32 },
    InningEnded { inning: u32, score: u32, bases: BaseOccupancy },
    FinalScore { score: u32 },
}

impl std::fmt::Display for PlayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayEvent::LineupAnnounced { names } => {
                write!(f, "Today's lineup: {}", names.join(", "))
            }
            PlayEvent::InningStarted { inning } => write!(f, "Inning {inning}"),
            PlayEvent::BatterUp { name, slot } => write!(f, "Now batting ({}): {name}", slot + 1),
            PlayEvent::PlateAppearance { outcome, runs } => match (outcome, runs) {
                (Outcome::StrikeOut, _) => f.write_str("Strikes out."),
                (Outcome::InPlayOut, _) => f.write_str("Puts the ball in play, out."),
                (Outcome::HomeRun, 1) => f.write_str("Solo home run!"),
                (Outcome::HomeRun, runs) => write!(f, "{runs}-run home run!"),
                (outcome, 0) => write!(f, "Reaches on a {outcome}."),
                (outcome, 1) => write!(f, "Reaches on a {outcome}, 1 run scores."),
                (outcome, runs) => write!(f, "Reaches on a {outcome}, {runs} runs score."),
            },
            PlayEvent::StolenBase { base } => write!(f, "Stolen base, runner now on {base}."),
            PlayEvent::DoubleSteal => f.write_str("Double steal, runners on 2nd and 3rd."),
            PlayEvent::StealHome => f.write_str("Steals home, run scores!"),
            PlayEvent::DoublePlay { runs: 0 } => f.write_str("Double play."),
            PlayEvent::DoublePlay { .. } => f.write_str("Double play, run scores on the turn."),
            PlayEvent::SacrificeAdvance { runs: 0 } => f.write_str("Runners advance on the out."),
            PlayEvent::SacrificeAdvance { .. } => {
                f.write_str("Sacrifice, runner scores from 3rd.")
            }
            PlayEvent::InningEnded {
                inning,
                score,
                bases,
            } => write!(f, "End of inning {inning}: {score} total, {bases} stranded"),
            PlayEvent::FinalScore { score: 1 } => f.write_str("Final score: 1 run"),
            PlayEvent::FinalScore { score } => write!(f, "Final score: {score} runs"),
        }
    }
}

/// Receiver of play events.
pub trait Narrator {
    fn narrate(&mut self, event: PlayEvent);
}

/// Trace `event` and hand it to `narrator`.
pub(crate) fn emit<N: Narrator + ?Sized>(narrator: &mut N, event: PlayEvent) {
    tracing::trace!(%event, "play");
    narrator.narrate(event);
}

/// Narrator that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Narrator for Silent {
    fn narrate(&mut self, _event: PlayEvent) {}
}

impl Narrator for Vec<PlayEvent> {
    fn narrate(&mut self, event: PlayEvent) {
        self.push(event);
    }
}

/// Ordered record of one game's events.
///
/// # Examples
///
/// ```rust
/// use lineupsim::narration::{GameLog, Narrator, PlayEvent};
///
/// let mut log = GameLog::new();
/// log.narrate(PlayEvent::InningStarted { inning: 1 });
/// log.narrate(PlayEvent::FinalScore { score: 3 });
/// assert_eq!(log.lines(), vec!["Inning 1", "Final score: 3 runs"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameLog {
    events: Vec<PlayEvent>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PlayEvent] {
        &self.events
    }

    /// Human-readable narration, one line per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Narrator for GameLog {
    fn narrate(&mut self, event: PlayEvent) {
        self.events.push(event);
    }
}
