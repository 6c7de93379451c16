//! Wells-Riley risk calculation.
//!
//! The model treats inhaled quanta as a Poisson process. With one infector
//! emitting `q` quanta/h into a well-mixed room of volume `V` that loses
//! pathogen at `k = ach + λ` per hour, a person breathing `p` m³/h for `t`
//! hours inhales on average
//!
//! ```text
//! n = I·q·p·t / (V·k)
//! ```
//!
//! quanta, and is infected with probability `P = 1 − e^(−n)`.
//!
//! # Example
//!
//! ```rust
//! use wellsriley_core::prelude::*;
//!
//! let room = RoomDimensions::new(5.0, 4.0, 3.0)?;
//! let env = EnvironmentalSettings::new(
//!     VentilationLevel::Medium,
//!     Season::Winter,
//!     HumidityLevel::Medium,
//!     2.0,
//! )?;
//! let occupancy = Occupancy::new(5)?;
//!
//! let result = compute_risk(&room, &env, &occupancy)?;
//! assert!((result.individual_probability_percent - 19.48).abs() < 0.01);
//! assert_eq!(result.secondary_cases, 1);
//! # Ok::<(), wellsriley_core::ModelError>(())
//! ```

use log::{debug, warn};

use crate::calibration::{
    air_changes_per_hour, decay_rate, quanta_emission_rate, BREATHING_RATE_M3_PER_HOUR,
    INFECTOR_COUNT,
};
use crate::error::{ModelError, ModelResult};
use crate::types::{EnvironmentalSettings, Occupancy, RateBreakdown, RiskResult, RoomDimensions};

/// Computes the individual infection probability and secondary cases.
///
/// # Errors
///
/// - [`ModelError::InvalidInput`] if an input invariant does not hold.
/// - [`ModelError::DivisionByZero`] if `volume × k` evaluates to zero.
pub fn compute_risk(
    dimensions: &RoomDimensions,
    environment: &EnvironmentalSettings,
    occupancy: &Occupancy,
) -> ModelResult<RiskResult> {
    dimensions.validate()?;
    environment.validate()?;
    occupancy.validate()?;

    let volume = dimensions.volume();
    let breakdown = RateBreakdown {
        air_changes_per_hour: air_changes_per_hour(environment.ventilation_level()),
        decay_rate: decay_rate(environment.humidity_level()),
        quanta_emission_rate: quanta_emission_rate(environment.season()),
    };
    let removal_rate = breakdown.removal_rate();

    let exponent = inhaled_quanta(
        breakdown.quanta_emission_rate,
        environment.exposure_hours(),
        volume,
        removal_rate,
    )?;
    let probability = infection_probability_percent(exponent);
    let expected = expected_secondary_infections(probability, occupancy.susceptible_persons());
    let secondary_cases = round_up_cases(expected);

    debug!(
        "wells-riley: V={volume:.3} m3, k={removal_rate:.3}/h, n={exponent:.6}, P={probability:.4}%, secondary={secondary_cases}"
    );

    Ok(RiskResult {
        individual_probability_percent: probability,
        secondary_cases,
        breakdown,
        volume_m3: volume,
        removal_rate,
        exponent,
        expected_secondary_infections: expected,
    })
}

/// Mean quanta inhaled by one susceptible person.
///
/// Returns [`ModelError::DivisionByZero`] when `volume × removal_rate` is zero.
/// [`RoomDimensions`] keeps the volume at or above `f64::MIN_POSITIVE` and
/// every removal rate is at least 0.3/h, so this only fires when called
/// directly with such values.
pub fn inhaled_quanta(
    quanta_per_hour: f64,
    exposure_hours: f64,
    volume: f64,
    removal_rate: f64,
) -> ModelResult<f64> {
    let denominator = volume * removal_rate;
    if denominator == 0.0 {
        warn!("zero removal denominator: volume={volume}, k={removal_rate}");
        return Err(ModelError::division_by_zero(format!(
            "volume ({volume} m3) x removal rate ({removal_rate}/h) is zero"
        )));
    }
    Ok(INFECTOR_COUNT * quanta_per_hour * BREATHING_RATE_M3_PER_HOUR * exposure_hours / denominator)
}

/// `(1 − e^(−n)) × 100`, kept strictly below 100.
///
/// `exp_m1` keeps precision for small doses; for very large doses the f64
/// result would round to exactly 100, so it is pinned to the largest value
/// below it.
#[must_use]
pub fn infection_probability_percent(exponent: f64) -> f64 {
    let percent = -(-exponent).exp_m1() * 100.0;
    if percent < 100.0 {
        percent
    } else {
        f64::from_bits(100.0_f64.to_bits() - 1)
    }
}

/// Expected number of newly infected persons among the susceptibles.
#[must_use]
pub fn expected_secondary_infections(probability_percent: f64, susceptible: u32) -> f64 {
    (probability_percent / 100.0) * f64::from(susceptible)
}

fn round_up_cases(expected: f64) -> u32 {
    // expected is bounded by the susceptible count, which fits in u32
    expected.ceil().max(0.0) as u32
}
