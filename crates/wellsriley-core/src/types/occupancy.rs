//! Room occupancy.

use serde::Serialize;

use crate::error::{ModelError, ModelResult};

/// Minimum head count: the assumed infector plus one susceptible person.
pub const MIN_TOTAL_PERSONS: u32 = 2;

/// Number of people sharing the room, including the single infector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Occupancy {
    total_persons: u32,
}

impl Occupancy {
    /// Creates an occupancy of at least [`MIN_TOTAL_PERSONS`].
    pub fn new(total_persons: u32) -> ModelResult<Self> {
        check_total_persons(total_persons)?;
        Ok(Self { total_persons })
    }

    /// Everyone present, infector included.
    #[must_use]
    pub fn total_persons(&self) -> u32 {
        self.total_persons
    }

    /// Everyone except the infector.
    #[must_use]
    pub fn susceptible_persons(&self) -> u32 {
        self.total_persons.saturating_sub(1)
    }

    pub(crate) fn validate(&self) -> ModelResult<()> {
        check_total_persons(self.total_persons)
    }
}

fn check_total_persons(total_persons: u32) -> ModelResult<()> {
    if total_persons < MIN_TOTAL_PERSONS {
        return Err(ModelError::invalid_input(
            "total_persons",
            format!(
                "at least {MIN_TOTAL_PERSONS} persons are required (the infector and one susceptible), got {total_persons}"
            ),
        ));
    }
    Ok(())
}
