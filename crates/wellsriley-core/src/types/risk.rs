//! Calculation outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rate constants resolved from the calibration tables for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RateBreakdown {
    /// Ventilation air changes per hour.
    pub air_changes_per_hour: f64,
    /// Biological decay rate of the pathogen, per hour.
    pub decay_rate: f64,
    /// Quanta emitted by the infector, per hour.
    pub quanta_emission_rate: f64,
}

impl RateBreakdown {
    /// Total pathogen removal rate `k`, per hour.
    #[must_use]
    pub fn removal_rate(&self) -> f64 {
        self.air_changes_per_hour + self.decay_rate
    }
}

/// Result of a Wells-Riley risk calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RiskResult {
    /// Infection probability for one susceptible person, in `[0, 100)`.
    pub individual_probability_percent: f64,
    /// Expected secondary infections, rounded up to whole persons.
    pub secondary_cases: u32,
    /// Rate constants used in the calculation.
    pub breakdown: RateBreakdown,
    /// Room air volume in cubic meters.
    pub volume_m3: f64,
    /// Total removal rate `k = ach + decay`, per hour.
    pub removal_rate: f64,
    /// Mean inhaled quanta per susceptible person.
    pub exponent: f64,
    /// Expected secondary infections before rounding.
    pub expected_secondary_infections: f64,
}

impl RiskResult {
    /// Display band of the individual probability.
    #[must_use]
    pub fn band(&self) -> RiskBand {
        RiskBand::classify(self.individual_probability_percent)
    }
}

/// Display classification of an infection probability.
///
/// This is presentation policy for callers; the calculation never uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum RiskBand {
    /// At most 5%.
    Low,
    /// Above 5% and at most 20%.
    Medium,
    /// Above 20%.
    High,
}

impl RiskBand {
    /// Upper bound (inclusive) of the low band, in percent.
    pub const LOW_MAX_PERCENT: f64 = 5.0;
    /// Upper bound (inclusive) of the medium band, in percent.
    pub const MEDIUM_MAX_PERCENT: f64 = 20.0;

    /// Classifies a probability given in percent.
    #[must_use]
    pub fn classify(probability_percent: f64) -> Self {
        if probability_percent > Self::MEDIUM_MAX_PERCENT {
            RiskBand::High
        } else if probability_percent > Self::LOW_MAX_PERCENT {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
        };
        write!(f, "{name}")
    }
}
