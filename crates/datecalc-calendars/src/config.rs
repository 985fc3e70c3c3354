//! Factory configuration.
//!
//! Settings applied to every calculator a [`CalculatorFactory`] produces.
//!
//! [`CalculatorFactory`]: crate::CalculatorFactory

use datecalc_core::{HolidayHandlerType, WorkingWeek, DEFAULT_MAX_ADJUSTMENT_STEPS};
use serde::{Deserialize, Serialize};

use crate::error::{RegistryResult, Validate, ValidationError};

/// Upper bound accepted for `max_adjustment_steps`: a century of days.
const MAX_ADJUSTMENT_STEPS_LIMIT: u32 = 36_600;

/// Configuration for a calculator factory.
///
/// # Example
///
/// ```rust
/// use datecalc_calendars::FactoryConfig;
/// use datecalc_core::HolidayHandlerType;
///
/// let config = FactoryConfig::from_json(r#"{
///     "default_handler": "modifiedFollowing",
///     "working_week": ["Sun", "Mon", "Tue", "Wed", "Thu"]
/// }"#).unwrap();
///
/// assert_eq!(config.default_handler, HolidayHandlerType::ModifiedFollowing);
/// assert_eq!(config.working_week.to_string(), "MTWT..S");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Handler used when a calculator is requested without one.
    pub default_handler: HolidayHandlerType,

    /// Working week given to new calculators.
    pub working_week: WorkingWeek,

    /// Cap on single-day steps taken by one adjustment.
    pub max_adjustment_steps: u32,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            default_handler: HolidayHandlerType::Forward,
            working_week: WorkingWeek::default(),
            max_adjustment_steps: DEFAULT_MAX_ADJUSTMENT_STEPS,
        }
    }
}

impl FactoryConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default handler.
    pub fn with_default_handler(mut self, handler: HolidayHandlerType) -> Self {
        self.default_handler = handler;
        self
    }

    /// Sets the working week.
    pub fn with_working_week(mut self, working_week: WorkingWeek) -> Self {
        self.working_week = working_week;
        self
    }

    /// Sets the adjustment step cap.
    pub fn with_max_adjustment_steps(mut self, steps: u32) -> Self {
        self.max_adjustment_steps = steps;
        self
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let config: FactoryConfig = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }
}

impl Validate for FactoryConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.working_week.has_working_days() {
            errors.push(ValidationError::with_rule(
                "working_week",
                "Working week must contain at least one working day",
                "non_empty_week",
            ));
        }

        if self.max_adjustment_steps == 0 || self.max_adjustment_steps > MAX_ADJUSTMENT_STEPS_LIMIT
        {
            errors.push(ValidationError::with_rule(
                "max_adjustment_steps",
                format!(
                    "Max adjustment steps must be between 1 and {}",
                    MAX_ADJUSTMENT_STEPS_LIMIT
                ),
                "valid_steps",
            ));
        }

        errors
    }
}
