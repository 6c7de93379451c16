//! Room geometry.

use serde::Serialize;
use std::fmt;

use crate::error::{ModelError, ModelResult};

/// Interior dimensions of an enclosed space, in meters.
///
/// All three sides are finite and strictly positive, and their product is
/// at least `f64::MIN_POSITIVE`, so the derived volume never underflows to
/// zero.
///
/// # Example
///
/// ```rust
/// use wellsriley_core::types::RoomDimensions;
///
/// let room = RoomDimensions::new(5.0, 4.0, 3.0).unwrap();
/// assert_eq!(room.volume(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RoomDimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl RoomDimensions {
    /// Creates room dimensions, rejecting non-positive or non-finite sides
    /// and sides too small to give a representable volume.
    pub fn new(length: f64, width: f64, height: f64) -> ModelResult<Self> {
        let room = Self {
            length: positive_side("length", length)?,
            width: positive_side("width", width)?,
            height: positive_side("height", height)?,
        };
        representable_volume(room.volume())?;
        Ok(room)
    }

    /// Length in meters.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Width in meters.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in meters.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Air volume in cubic meters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Re-checks the side invariants.
    pub(crate) fn validate(&self) -> ModelResult<()> {
        positive_side("length", self.length)?;
        positive_side("width", self.width)?;
        positive_side("height", self.height)?;
        representable_volume(self.volume())
    }
}

fn positive_side(field: &str, value: f64) -> ModelResult<f64> {
    if !value.is_finite() {
        return Err(ModelError::invalid_input(
            field,
            format!("must be a finite number of meters, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(ModelError::invalid_input(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}

fn representable_volume(volume: f64) -> ModelResult<()> {
    if volume < f64::MIN_POSITIVE {
        return Err(ModelError::invalid_input(
            "volume",
            format!("underflows to {volume} m3; the sides are too small"),
        ));
    }
    Ok(())
}

impl fmt::Display for RoomDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} m x {} m x {} m",
            self.length, self.width, self.height
        )
    }
}
