//! Domain types for airborne risk estimation.
//!
//! - [`RoomDimensions`]: room geometry and derived volume
//! - [`EnvironmentalSettings`]: ventilation, season, humidity, exposure time
//! - [`Occupancy`]: head count including the infector
//! - [`RiskResult`]: probability, secondary cases and rate breakdown
//! - [`RiskBand`]: caller-side display classification

mod environment;
mod occupancy;
mod risk;
mod room;

pub use environment::{
    EnvironmentalSettings, HumidityLevel, Season, VentilationLevel, MIN_EXPOSURE_HOURS,
};
pub use occupancy::{Occupancy, MIN_TOTAL_PERSONS};
pub use risk::{RateBreakdown, RiskBand, RiskResult};
pub use room::RoomDimensions;
