//! Fixed calibration data for the influenza Wells-Riley model.
//!
//! These values are not user-editable. Each lookup is an exhaustive match,
//! so every category has a rate by construction.

use serde::Serialize;

use crate::types::{HumidityLevel, Season, VentilationLevel};

/// Sedentary adult pulmonary ventilation rate `p`, in m³/h.
pub const BREATHING_RATE_M3_PER_HOUR: f64 = 0.52;

/// Number of infectious occupants `I`. The model always assumes one.
pub const INFECTOR_COUNT: f64 = 1.0;

/// Air changes per hour for a ventilation level.
#[must_use]
pub const fn air_changes_per_hour(level: VentilationLevel) -> f64 {
    match level {
        VentilationLevel::None => 0.1,
        VentilationLevel::Low => 1.0,
        VentilationLevel::Medium => 3.0,
        VentilationLevel::High => 8.0,
    }
}

/// Biological decay rate `λ` per hour for a humidity band.
#[must_use]
pub const fn decay_rate(humidity: HumidityLevel) -> f64 {
    match humidity {
        HumidityLevel::Dry => 0.2,
        HumidityLevel::Medium => 0.6,
        HumidityLevel::High => 1.1,
        HumidityLevel::VeryHigh => 1.8,
    }
}

/// Quanta emitted per hour `q` for a season.
#[must_use]
pub const fn quanta_emission_rate(season: Season) -> f64 {
    match season {
        Season::Winter => 45.0,
        Season::Summer => 12.0,
    }
}

/// One row of the calibration tables, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationEntry {
    /// Table the row belongs to.
    pub category: &'static str,
    /// Category value the rate applies to.
    pub key: String,
    /// Rate constant.
    pub value: f64,
    /// Unit of the rate constant.
    pub unit: &'static str,
}

/// All calibration rows plus the fixed physiological constants.
pub fn table_rows() -> Vec<CalibrationEntry> {
    let ventilation = VentilationLevel::ALL.iter().map(|&level| CalibrationEntry {
        category: "Ventilation (ACH)",
        key: level.to_string(),
        value: air_changes_per_hour(level),
        unit: "air changes/hour",
    });
    let decay = HumidityLevel::ALL.iter().map(|&humidity| CalibrationEntry {
        category: "Biological decay",
        key: humidity.to_string(),
        value: decay_rate(humidity),
        unit: "1/hour",
    });
    let emission = Season::ALL.iter().map(|&season| CalibrationEntry {
        category: "Viral emission (q)",
        key: season.to_string(),
        value: quanta_emission_rate(season),
        unit: "quanta/hour",
    });
    let constants = [
        CalibrationEntry {
            category: "Physiology",
            key: "Breathing rate (p)".to_string(),
            value: BREATHING_RATE_M3_PER_HOUR,
            unit: "m3/hour",
        },
        CalibrationEntry {
            category: "Physiology",
            key: "Infectors (I)".to_string(),
            value: INFECTOR_COUNT,
            unit: "persons",
        },
    ];

    ventilation
        .chain(decay)
        .chain(emission)
        .chain(constants)
        .collect()
}
