//! Unvalidated calculation requests from external callers.
//!
//! A [`RiskRequest`] carries raw numbers and category labels exactly as a
//! form, command line or JSON body supplies them. [`RiskRequest::validate`]
//! turns it into the typed inputs, reporting the first offending field.

use serde::{Deserialize, Serialize};

use crate::calculator::compute_risk;
use crate::error::{ModelError, ModelResult};
use crate::types::{
    EnvironmentalSettings, HumidityLevel, Occupancy, RiskResult, RoomDimensions, Season,
    VentilationLevel,
};

/// Raw inputs for one calculation.
///
/// Missing fields in serialized form take the defaults of the intake form:
/// a 5 x 4 x 3 m room with medium ventilation and humidity in winter,
/// two hours of exposure and five persons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RiskRequest {
    /// Room length in meters.
    pub length: f64,
    /// Room width in meters.
    pub width: f64,
    /// Room height in meters.
    pub height: f64,
    /// Ventilation level label.
    pub ventilation_level: String,
    /// Season label.
    pub season: String,
    /// Humidity level label.
    pub humidity_level: String,
    /// Exposure duration in hours.
    pub exposure_hours: f64,
    /// Persons present, infector included.
    pub total_persons: i64,
}

impl Default for RiskRequest {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 4.0,
            height: 3.0,
            ventilation_level: "medium".to_string(),
            season: "winter".to_string(),
            humidity_level: "medium".to_string(),
            exposure_hours: 2.0,
            total_persons: 5,
        }
    }
}

/// Typed, validated inputs ready for [`compute_risk`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInputs {
    /// Room geometry.
    pub dimensions: RoomDimensions,
    /// Environmental conditions.
    pub environment: EnvironmentalSettings,
    /// Head count.
    pub occupancy: Occupancy,
}

impl RiskRequest {
    /// Parses labels and checks every invariant.
    pub fn validate(&self) -> ModelResult<ValidatedInputs> {
        let dimensions = RoomDimensions::new(self.length, self.width, self.height)?;
        let ventilation: VentilationLevel = self.ventilation_level.parse()?;
        let season: Season = self.season.parse()?;
        let humidity: HumidityLevel = self.humidity_level.parse()?;
        let environment =
            EnvironmentalSettings::new(ventilation, season, humidity, self.exposure_hours)?;

        let total_persons = u32::try_from(self.total_persons).map_err(|_| {
            ModelError::invalid_input(
                "total_persons",
                format!("must be a whole number of persons, got {}", self.total_persons),
            )
        })?;
        let occupancy = Occupancy::new(total_persons)?;

        Ok(ValidatedInputs {
            dimensions,
            environment,
            occupancy,
        })
    }

    /// Validates and computes in one step.
    pub fn evaluate(&self) -> ModelResult<RiskResult> {
        let inputs = self.validate()?;
        compute_risk(&inputs.dimensions, &inputs.environment, &inputs.occupancy)
    }
}
