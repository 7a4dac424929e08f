//! Plate-appearance outcomes.
//!
//! Every plate appearance resolves into exactly one of seven outcomes.
//! Batter probability vectors are indexed in the order of [`Outcome::ALL`].

use serde::{Deserialize, Serialize};

/// Number of distinct plate-appearance outcomes.
pub const OUTCOME_COUNT: usize = 7;

/// The primary result of one plate appearance.
///
/// # Examples
///
/// ```rust
/// use lineupsim::Outcome;
///
/// assert_eq!(Outcome::ALL.len(), 7);
/// assert_eq!(Outcome::Walk.index(), 2);
/// assert!(Outcome::StrikeOut.is_out());
/// assert_eq!(Outcome::HomeRun.to_string(), "home-run");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    StrikeOut,
    InPlayOut,
    Walk,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Outcome {
    /// All outcomes, in probability-vector order.
    pub const ALL: [Outcome; OUTCOME_COUNT] = [
        Outcome::StrikeOut,
        Outcome::InPlayOut,
        Outcome::Walk,
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
    ];

    /// Position of this outcome in a probability vector.
    pub fn index(self) -> usize {
        match self {
            Outcome::StrikeOut => 0,
            Outcome::InPlayOut => 1,
            Outcome::Walk => 2,
            Outcome::Single => 3,
            Outcome::Double => 4,
            Outcome::Triple => 5,
            Outcome::HomeRun => 6,
        }
    }

    /// Stable kebab-case label, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::StrikeOut => "strike-out",
            Outcome::InPlayOut => "in-play-out",
            Outcome::Walk => "walk",
            Outcome::Single => "single",
            Outcome::Double => "double",
            Outcome::Triple => "triple",
            Outcome::HomeRun => "home-run",
        }
    }

    /// Whether the batter is retired on this outcome.
    pub fn is_out(self) -> bool {
        matches!(self, Outcome::StrikeOut | Outcome::InPlayOut)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, outcome) in Outcome::ALL.iter().enumerate() {
            assert_eq!(outcome.index(), i);
        }
    }

    #[test]
    fn test_only_two_outcomes_are_outs() {
        let outs: Vec<_> = Outcome::ALL.iter().filter(|o| o.is_out()).collect();
        assert_eq!(outs, vec![&Outcome::StrikeOut, &Outcome::InPlayOut]);
    }

    #[test]
    fn test_serde_uses_labels() {
        for outcome in Outcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome.label()));
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(back, outcome);
        }
    }
}
