//! # Wells-Riley Core
//!
//! Airborne infection risk for a single enclosed space, using a variant of
//! the Wells-Riley dose-response model.
//!
//! This crate is the pure calculation layer:
//!
//! - **Types**: validated room, environment and occupancy records
//! - **Calibration**: fixed rate tables keyed by closed enums
//! - **Calculator**: [`compute_risk`], a stateless single-pass evaluation
//! - **Requests**: [`RiskRequest`], raw caller input with field-level validation
//!
//! There is no I/O and no shared state; every call is independent and safe
//! to run concurrently.
//!
//! ## Example
//!
//! ```rust
//! use wellsriley_core::prelude::*;
//!
//! let request = RiskRequest {
//!     ventilation_level: "none".to_string(),
//!     ..RiskRequest::default()
//! };
//! let result = request.evaluate()?;
//! assert_eq!(result.secondary_cases, 3);
//! assert_eq!(result.band(), RiskBand::High);
//! # Ok::<(), ModelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod calibration;
pub mod error;
pub mod request;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::compute_risk;
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::request::{RiskRequest, ValidatedInputs};
    pub use crate::types::{
        EnvironmentalSettings, HumidityLevel, Occupancy, RateBreakdown, RiskBand, RiskResult,
        RoomDimensions, Season, VentilationLevel,
    };
}

// Re-export commonly used items at crate root
pub use calculator::compute_risk;
pub use error::{ModelError, ModelResult};
pub use request::RiskRequest;
pub use types::{RiskBand, RiskResult};
