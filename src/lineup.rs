//! Batting order.
//!
//! A `Lineup` is exactly nine batters in a fixed order. It can be built
//! from `Batter` values or loaded from JSON, where each entry carries
//! either a probability vector or a season batting line.

use crate::batter::Batter;
use crate::batting_line::BattingLine;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Number of batters in a lineup.
pub const LINEUP_SIZE: usize = 9;

/// An ordered, immutable batting order of nine batters.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{Batter, Lineup};
///
/// let batter = Batter::new("Utility", &[0.2, 0.45, 0.08, 0.17, 0.05, 0.01, 0.04]).unwrap();
/// let lineup = Lineup::new(vec![batter; 9]).unwrap();
/// assert_eq!(lineup.len(), 9);
/// assert_eq!(lineup.batter(10).name(), "Utility"); // wraps
///
/// assert!(Lineup::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lineup {
    batters: Vec<Batter>,
}

/// One JSON lineup entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BatterEntry {
    Probabilities {
        name: String,
        probabilities: Vec<f64>,
    },
    Batting {
        name: String,
        batting: BattingLine,
    },
}

impl BatterEntry {
    fn into_batter(self) -> Result<Batter, ConfigurationError> {
        match self {
            BatterEntry::Probabilities {
                name,
                probabilities,
            } => Batter::new(name, &probabilities),
            BatterEntry::Batting { name, batting } => Batter::from_batting_line(name, &batting),
        }
    }
}

impl Lineup {
    pub fn new(batters: Vec<Batter>) -> Result<Self, ConfigurationError> {
        if batters.len() != LINEUP_SIZE {
            return Err(ConfigurationError::LineupSize {
                expected: LINEUP_SIZE,
                actual: batters.len(),
            });
        }
        Ok(Self { batters })
    }

    /// Load a lineup from a JSON array of nine entries.
    ///
    /// ```rust
    /// use lineupsim::Lineup;
    ///
    /// let entry = r#"{ "name": "Slugger", "probabilities": [0.3, 0.3, 0.1, 0.1, 0.1, 0.0, 0.1] }"#;
    /// let json = format!("[{}]", vec![entry; 9].join(","));
    /// let lineup = Lineup::from_json(&json).unwrap();
    /// assert_eq!(lineup.batter(0).name(), "Slugger");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let entries: Vec<BatterEntry> = serde_json::from_str(json)?;
        let batters = entries
            .into_iter()
            .map(BatterEntry::into_batter)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(batters)
    }

    /// Batter at `index`, wrapping around the order.
    pub fn batter(&self, index: usize) -> &Batter {
        &self.batters[index % LINEUP_SIZE]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Batter> {
        self.batters.iter()
    }

    pub fn len(&self) -> usize {
        self.batters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batters.is_empty()
    }

    /// Names in batting order.
    pub fn names(&self) -> Vec<&str> {
        self.batters.iter().map(Batter::name).collect()
    }
}

impl<'a> IntoIterator for &'a Lineup {
    type Item = &'a Batter;
    type IntoIter = std::slice::Iter<'a, Batter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
