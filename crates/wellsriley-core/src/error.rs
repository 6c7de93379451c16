//! Error types for the Wells-Riley model.
//!
//! Every failure is a caller input problem; nothing here is transient, so
//! there is no retry classification.

use thiserror::Error;

/// A specialized Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// The main error type for model operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// An input violates one of its invariants.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The total removal rate denominator evaluated to zero.
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// Where the zero denominator appeared.
        context: String,
    },
}

impl ModelError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Returns the offending field for input errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::DivisionByZero { .. } => None,
        }
    }
}
