//! Categorical environment inputs and exposure settings.
//!
//! Categories are closed enums. Strings only appear at the caller boundary,
//! through [`FromStr`], which accepts the English names as well as the
//! Spanish labels of the original intake form (`"Medio (Estándar)"`,
//! `"Muy Alta"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// Minimum exposure duration in hours.
pub const MIN_EXPOSURE_HOURS: f64 = 0.5;

/// Lowercases, drops any parenthesised note and folds separators to `-`.
fn normalize_label(s: &str) -> String {
    let head = s.split('(').next().unwrap_or(s);
    head.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// How strongly the room air is renewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum VentilationLevel {
    /// Stagnant air.
    None,
    /// Little air renewal.
    Low,
    /// Standard mechanical or natural ventilation.
    #[default]
    Medium,
    /// Healthcare-grade ventilation or filtration.
    High,
}

impl VentilationLevel {
    /// All levels, from least to most ventilated.
    pub const ALL: [VentilationLevel; 4] = [
        VentilationLevel::None,
        VentilationLevel::Low,
        VentilationLevel::Medium,
        VentilationLevel::High,
    ];
}

impl fmt::Display for VentilationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VentilationLevel::None => "None",
            VentilationLevel::Low => "Low",
            VentilationLevel::Medium => "Medium",
            VentilationLevel::High => "High",
        };
        write!(f, "{name}")
    }
}

impl FromStr for VentilationLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "none" | "nulo" => Ok(VentilationLevel::None),
            "low" | "bajo" => Ok(VentilationLevel::Low),
            "medium" | "medio" => Ok(VentilationLevel::Medium),
            "high" | "alto" => Ok(VentilationLevel::High),
            _ => Err(ModelError::invalid_input(
                "ventilation_level",
                format!("unrecognized value '{s}', expected none, low, medium or high"),
            )),
        }
    }
}

/// Season of the year, which drives the emitted viral load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Season {
    /// Winter peak.
    #[default]
    Winter,
    /// Summer low.
    Summer,
}

impl Season {
    /// All seasons.
    pub const ALL: [Season; 2] = [Season::Winter, Season::Summer];
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Season {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "winter" | "invierno" => Ok(Season::Winter),
            "summer" | "verano" => Ok(Season::Summer),
            _ => Err(ModelError::invalid_input(
                "season",
                format!("unrecognized value '{s}', expected winter or summer"),
            )),
        }
    }
}

/// Relative humidity band, which drives biological decay of the pathogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum HumidityLevel {
    /// Dry air, longest pathogen survival.
    Dry,
    /// Typical indoor humidity.
    #[default]
    Medium,
    /// Humid air, faster inactivation.
    High,
    /// Very humid air, fastest inactivation.
    VeryHigh,
}

impl HumidityLevel {
    /// All humidity bands, from driest to most humid.
    pub const ALL: [HumidityLevel; 4] = [
        HumidityLevel::Dry,
        HumidityLevel::Medium,
        HumidityLevel::High,
        HumidityLevel::VeryHigh,
    ];
}

impl fmt::Display for HumidityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HumidityLevel::Dry => "Dry",
            HumidityLevel::Medium => "Medium",
            HumidityLevel::High => "High",
            HumidityLevel::VeryHigh => "Very High",
        };
        write!(f, "{name}")
    }
}

impl FromStr for HumidityLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "dry" | "seco" => Ok(HumidityLevel::Dry),
            "medium" | "media" => Ok(HumidityLevel::Medium),
            "high" | "alta" => Ok(HumidityLevel::High),
            "very-high" | "veryhigh" | "muy-alta" => Ok(HumidityLevel::VeryHigh),
            _ => Err(ModelError::invalid_input(
                "humidity_level",
                format!("unrecognized value '{s}', expected dry, medium, high or very-high"),
            )),
        }
    }
}

/// Environmental conditions and duration of a single exposure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct EnvironmentalSettings {
    ventilation_level: VentilationLevel,
    season: Season,
    humidity_level: HumidityLevel,
    exposure_hours: f64,
}

impl EnvironmentalSettings {
    /// Creates environmental settings.
    ///
    /// Fails if `exposure_hours` is below [`MIN_EXPOSURE_HOURS`] or not finite.
    pub fn new(
        ventilation_level: VentilationLevel,
        season: Season,
        humidity_level: HumidityLevel,
        exposure_hours: f64,
    ) -> ModelResult<Self> {
        Ok(Self {
            ventilation_level,
            season,
            humidity_level,
            exposure_hours: check_exposure_hours(exposure_hours)?,
        })
    }

    /// Ventilation level of the room.
    #[must_use]
    pub fn ventilation_level(&self) -> VentilationLevel {
        self.ventilation_level
    }

    /// Season of the year.
    #[must_use]
    pub fn season(&self) -> Season {
        self.season
    }

    /// Humidity band.
    #[must_use]
    pub fn humidity_level(&self) -> HumidityLevel {
        self.humidity_level
    }

    /// Exposure duration in hours.
    #[must_use]
    pub fn exposure_hours(&self) -> f64 {
        self.exposure_hours
    }

    pub(crate) fn validate(&self) -> ModelResult<()> {
        check_exposure_hours(self.exposure_hours).map(|_| ())
    }
}

fn check_exposure_hours(hours: f64) -> ModelResult<f64> {
    if !hours.is_finite() || hours < MIN_EXPOSURE_HOURS {
        return Err(ModelError::invalid_input(
            "exposure_hours",
            format!("must be a finite number of at least {MIN_EXPOSURE_HOURS} hours, got {hours}"),
        ));
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_names() {
        assert_eq!("none".parse::<VentilationLevel>().unwrap(), VentilationLevel::None);
        assert_eq!("HIGH".parse::<VentilationLevel>().unwrap(), VentilationLevel::High);
        assert_eq!("summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("very_high".parse::<HumidityLevel>().unwrap(), HumidityLevel::VeryHigh);
        assert_eq!("Very High".parse::<HumidityLevel>().unwrap(), HumidityLevel::VeryHigh);
        assert_eq!("veryhigh".parse::<HumidityLevel>().unwrap(), HumidityLevel::VeryHigh);
    }

    #[test]
    fn test_parse_form_labels() {
        assert_eq!(
            "Nulo (Aire estancado)".parse::<VentilationLevel>().unwrap(),
            VentilationLevel::None
        );
        assert_eq!(
            "Medio (Estándar)".parse::<VentilationLevel>().unwrap(),
            VentilationLevel::Medium
        );
        assert_eq!("Invierno".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("Verano".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("Media".parse::<HumidityLevel>().unwrap(), HumidityLevel::Medium);
        assert_eq!("Muy Alta".parse::<HumidityLevel>().unwrap(), HumidityLevel::VeryHigh);
    }

    #[test]
    fn test_unrecognized_category_names_field() {
        let err = "tropical".parse::<Season>().unwrap_err();
        assert_eq!(err.field(), Some("season"));

        let err = "".parse::<HumidityLevel>().unwrap_err();
        assert_eq!(err.field(), Some("humidity_level"));

        let err = "max".parse::<VentilationLevel>().unwrap_err();
        assert_eq!(err.field(), Some("ventilation_level"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in VentilationLevel::ALL {
            assert_eq!(level.to_string().parse::<VentilationLevel>().unwrap(), level);
        }
        for humidity in HumidityLevel::ALL {
            assert_eq!(humidity.to_string().parse::<HumidityLevel>().unwrap(), humidity);
        }
    }

    #[test]
    fn test_exposure_bounds() {
        let ok = EnvironmentalSettings::new(
            VentilationLevel::Medium,
            Season::Winter,
            HumidityLevel::Medium,
            MIN_EXPOSURE_HOURS,
        );
        assert!(ok.is_ok());

        let err = EnvironmentalSettings::new(
            VentilationLevel::Medium,
            Season::Winter,
            HumidityLevel::Medium,
            0.25,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("exposure_hours"));

        assert!(EnvironmentalSettings::new(
            VentilationLevel::Medium,
            Season::Winter,
            HumidityLevel::Medium,
            f64::INFINITY,
        )
        .is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HumidityLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
        let level: VentilationLevel = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(level, VentilationLevel::None);
    }
}
