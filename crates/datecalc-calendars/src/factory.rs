//! Date calculator factory.

use std::collections::HashSet;
use std::sync::OnceLock;

use datecalc_core::period_count::PeriodCountCalculator;
use datecalc_core::{DateCalculator, HolidayHandlerType};
use log::debug;

use crate::config::FactoryConfig;
use crate::error::{RegistryResult, Validate};
use crate::registry::{HolidayRegistry, HolidaySet};

/// Process-wide default factory.
static DEFAULT_FACTORY: OnceLock<CalculatorFactory> = OnceLock::new();

/// Builds [`DateCalculator`]s from registered holiday sets.
///
/// Each calculator receives the snapshot registered under its name at the
/// time it is built. Later registrations do not reach calculators that
/// already exist.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use datecalc_calendars::CalculatorFactory;
/// use datecalc_core::Date;
///
/// let factory = CalculatorFactory::default();
/// let holidays: HashSet<Date> = [Date::from_ymd(2006, 8, 28).unwrap()].into_iter().collect();
/// factory.register_holidays("UK", holidays).unwrap();
///
/// let mut cal = factory.calculator("UK", "forward").unwrap();
/// let landed = cal.set_start_date(Date::from_ymd(2006, 8, 28).unwrap()).unwrap();
/// assert_eq!(landed, Date::from_ymd(2006, 8, 29).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct CalculatorFactory {
    registry: HolidayRegistry,
    config: FactoryConfig,
}

impl CalculatorFactory {
    /// Creates a factory with an empty registry.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `config` is invalid.
    pub fn new(config: FactoryConfig) -> RegistryResult<Self> {
        config.validate_or_error()?;
        Ok(Self {
            registry: HolidayRegistry::new(),
            config,
        })
    }

    /// Returns the shared process-wide factory, built with the default
    /// configuration on first use.
    pub fn global() -> &'static CalculatorFactory {
        DEFAULT_FACTORY.get_or_init(CalculatorFactory::default)
    }

    /// The factory configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// The underlying holiday registry.
    pub fn registry(&self) -> &HolidayRegistry {
        &self.registry
    }

    /// Registers `holidays` under `name`, replacing any previous set.
    ///
    /// Calculators already built from `name` keep their old holidays.
    pub fn register_holidays(
        &self,
        name: impl Into<String>,
        holidays: impl Into<HolidaySet>,
    ) -> RegistryResult<()> {
        self.registry.register_holidays(name, holidays)
    }

    /// Builds a calculator for calendar `name` with the handler identified
    /// by `handler` (`"forward"`, `"backward"`, `"modifiedFollowing"`,
    /// `"modifiedPreceding"`).
    ///
    /// An unregistered `name` gives a calculator with no holidays.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::UnknownHandler` for an unrecognized handler.
    pub fn calculator(&self, name: &str, handler: &str) -> RegistryResult<DateCalculator> {
        let handler: HolidayHandlerType = handler.parse()?;
        self.calculator_with(name, handler)
    }

    /// Builds a calculator for calendar `name` with the configured default
    /// handler.
    pub fn default_calculator(&self, name: &str) -> RegistryResult<DateCalculator> {
        self.calculator_with(name, self.config.default_handler)
    }

    /// Builds a calculator for calendar `name` with `handler`.
    pub fn calculator_with(
        &self,
        name: &str,
        handler: HolidayHandlerType,
    ) -> RegistryResult<DateCalculator> {
        let holidays = match self.registry.holidays(name)? {
            Some(set) => set,
            None => {
                debug!("no holidays registered for '{}', using weekends only", name);
                HolidaySet::new(HashSet::new())
            }
        };

        let calculator = DateCalculator::new(name, handler, holidays, self.config.working_week)?
            .with_max_adjustment_steps(self.config.max_adjustment_steps);
        Ok(calculator)
    }

    /// The period count calculator.
    pub fn period_count_calculator(&self) -> PeriodCountCalculator {
        PeriodCountCalculator
    }
}
