//! Error types for the date calculator.
//!
//! Every failure is a local contract violation reported to the caller
//! immediately; nothing in this crate retries.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for date calculator operations.
pub type DateCalcResult<T> = Result<T, DateCalcError>;

/// The main error type for date calculator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateCalcError {
    /// Invalid or unparseable date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown holiday handler identifier.
    #[error("Unknown holiday handler: '{id}'")]
    UnknownHandler {
        /// The identifier that was not recognised.
        id: String,
    },

    /// A movement was requested before a start date was set.
    #[error("No start date set on calculator '{name}'")]
    NoStartDate {
        /// Name of the calculator.
        name: String,
    },

    /// A working week without a single working day.
    #[error("Working week has no working days")]
    NoWorkingDays,

    /// Adjustment gave up after the configured number of steps.
    #[error("No working day found from {date} within {steps} steps")]
    AdjustmentLimit {
        /// Date the adjustment started from.
        date: Date,
        /// Number of steps taken before giving up.
        steps: u32,
    },

    /// Invalid tenor string or value.
    #[error("Invalid tenor '{input}': {reason}")]
    InvalidTenor {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two calculators cannot be combined.
    #[error("Incompatible calculators: {reason}")]
    IncompatibleCalculators {
        /// Description of the mismatch.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl DateCalcError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown handler error.
    #[must_use]
    pub fn unknown_handler(id: impl Into<String>) -> Self {
        Self::UnknownHandler { id: id.into() }
    }

    /// Creates a missing start date error.
    #[must_use]
    pub fn no_start_date(name: impl Into<String>) -> Self {
        Self::NoStartDate { name: name.into() }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an incompatible calculators error.
    #[must_use]
    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self::IncompatibleCalculators {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DateCalcError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unknown_handler_display() {
        let err = DateCalcError::unknown_handler("sideways");
        assert_eq!(err.to_string(), "Unknown holiday handler: 'sideways'");
    }

    #[test]
    fn test_adjustment_limit_display() {
        let date = Date::from_ymd(2006, 8, 5).unwrap();
        let err = DateCalcError::AdjustmentLimit { date, steps: 10 };
        assert!(err.to_string().contains("2006-08-05"));
        assert!(err.to_string().contains("10 steps"));
    }
}
