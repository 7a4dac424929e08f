//! Simulation parameters.
//!
//! `SimConfig` bundles the named probabilities that drive runner
//! advancement, steals and double plays, plus the number of innings. It
//! deserializes from JSON with every field optional. Unknown fields are
//! rejected, so a misspelled parameter cannot fall back to its default.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Tolerance applied to the `advance_on_out + double_play <= 1` check.
const BAND_TOLERANCE: f64 = 1e-9;

/// Named probabilities and limits for a simulated game.
///
/// # Examples
///
/// ```rust
/// use lineupsim::SimConfig;
///
/// let config = SimConfig::from_json(r#"{ "innings": 1, "steal_home": 0.0 }"#).unwrap();
/// assert_eq!(config.innings, 1);
/// assert_eq!(config.steal_home, 0.0);
/// assert_eq!(config.double_play, 0.4); // default kept
///
/// assert!(SimConfig::default().with_double_play(0.9).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Runners advance on an out in play (sacrifice fly or bunt).
    pub advance_on_out: f64,
    /// An out in play turns into a double play.
    pub double_play: f64,
    pub steal_second: f64,
    pub steal_third: f64,
    pub steal_home: f64,
    /// Runner from first reaches third on a single.
    pub first_to_third_on_single: f64,
    /// Runner from second scores on a single.
    pub score_from_second_on_single: f64,
    /// Runner from first scores on a double.
    pub score_from_first_on_double: f64,
    /// Innings per game.
    pub innings: u32,
    /// Plate appearances after which an inning without three outs is
    /// abandoned.
    pub max_plate_appearances_per_inning: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            advance_on_out: 0.2,
            double_play: 0.4,
            steal_second: 0.05,
            steal_third: 0.01,
            steal_home: 0.001,
            first_to_third_on_single: 0.2,
            score_from_second_on_single: 0.5,
            score_from_first_on_double: 0.3,
            innings: 9,
            max_plate_appearances_per_inning: 1_000,
        }
    }
}

impl SimConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration where nothing happens beyond the batter's outcome:
    /// no steals, no advancement on outs, no double plays, and runners
    /// take the minimal base on every hit.
    pub fn station_to_station() -> Self {
        Self {
            advance_on_out: 0.0,
            double_play: 0.0,
            steal_second: 0.0,
            steal_third: 0.0,
            steal_home: 0.0,
            first_to_third_on_single: 0.0,
            score_from_second_on_single: 0.0,
            score_from_first_on_double: 0.0,
            ..Self::default()
        }
    }

    /// Check every parameter.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (parameter, value) in self.probabilities() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::ProbabilityOutOfRange { parameter, value });
            }
        }
        if self.advance_on_out + self.double_play > 1.0 + BAND_TOLERANCE {
            return Err(ConfigurationError::OutOnPlayBandsExceedOne {
                advance: self.advance_on_out,
                double_play: self.double_play,
            });
        }
        if self.innings == 0 {
            return Err(ConfigurationError::InvalidInningCount(self.innings));
        }
        if self.max_plate_appearances_per_inning == 0 {
            return Err(ConfigurationError::InvalidPlateAppearanceCap(
                self.max_plate_appearances_per_inning,
            ));
        }
        Ok(())
    }

    fn probabilities(&self) -> [(&'static str, f64); 8] {
        [
            ("advance_on_out", self.advance_on_out),
            ("double_play", self.double_play),
            ("steal_second", self.steal_second),
            ("steal_third", self.steal_third),
            ("steal_home", self.steal_home),
            ("first_to_third_on_single", self.first_to_third_on_single),
            ("score_from_second_on_single", self.score_from_second_on_single),
            ("score_from_first_on_double", self.score_from_first_on_double),
        ]
    }

    pub fn with_advance_on_out(mut self, p: f64) -> Self {
        self.advance_on_out = p;
        self
    }

    pub fn with_double_play(mut self, p: f64) -> Self {
        self.double_play = p;
        self
    }

    /// Set all three steal probabilities.
    pub fn with_steals(mut self, second: f64, third: f64, home: f64) -> Self {
        self.steal_second = second;
        self.steal_third = third;
        self.steal_home = home;
        self
    }

    pub fn with_first_to_third_on_single(mut self, p: f64) -> Self {
        self.first_to_third_on_single = p;
        self
    }

    pub fn with_score_from_second_on_single(mut self, p: f64) -> Self {
        self.score_from_second_on_single = p;
        self
    }

    pub fn with_score_from_first_on_double(mut self, p: f64) -> Self {
        self.score_from_first_on_double = p;
        self
    }

    pub fn with_innings(mut self, innings: u32) -> Self {
        self.innings = innings;
        self
    }

    pub fn with_plate_appearance_cap(mut self, cap: u32) -> Self {
        self.max_plate_appearances_per_inning = cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
        assert_eq!(SimConfig::station_to_station().validate(), Ok(()));
    }

    #[test]
    fn test_probability_out_of_range() {
        let err = SimConfig::default()
            .with_steals(0.05, 1.5, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ProbabilityOutOfRange {
                parameter: "steal_third",
                value: 1.5
            }
        );
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(SimConfig::default().with_advance_on_out(-0.01).validate().is_err());
        assert!(SimConfig::default()
            .with_score_from_first_on_double(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_out_bands_may_sum_to_exactly_one() {
        let config = SimConfig::default().with_advance_on_out(0.3).with_double_play(0.7);
        assert_eq!(config.validate(), Ok(()));

        let config = SimConfig::default().with_advance_on_out(0.31).with_double_play(0.7);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::OutOnPlayBandsExceedOne { .. })
        ));
    }

    #[test]
    fn test_zero_innings_rejected() {
        assert_eq!(
            SimConfig::default().with_innings(0).validate(),
            Err(ConfigurationError::InvalidInningCount(0))
        );
    }

    #[test]
    fn test_from_json_validates() {
        let err = SimConfig::from_json(r#"{ "steal_second": 2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::ProbabilityOutOfRange { .. }));

        let err = SimConfig::from_json("{ innings: }").unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = SimConfig::from_json(r#"{ "steal_secnd": 5.0 }"#).unwrap_err();
        match err {
            ConfigurationError::Parse(message) => assert!(message.contains("steal_secnd")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig::default().with_innings(7);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SimConfig::from_json(&json).unwrap(), config);
    }
}
