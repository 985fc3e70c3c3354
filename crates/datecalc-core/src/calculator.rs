//! The date calculator: a business-day-aware date cursor.
//!
//! A [`DateCalculator`] holds a current date, a [`HolidayCalendar`] and a
//! [`HolidayHandlerType`]. Every movement takes a raw step and then lets the
//! handler move the result onto a working day, so the current date is a
//! working day whenever a method returns.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use datecalc_core::prelude::*;
//!
//! let holidays: HashSet<Date> = [Date::from_ymd(2006, 8, 28).unwrap()].into_iter().collect();
//! let mut cal = DateCalculator::new(
//!     "UK",
//!     HolidayHandlerType::Forward,
//!     holidays,
//!     WorkingWeek::default(),
//! )
//! .unwrap();
//!
//! // A Monday bank holiday rolls to Tuesday
//! let start = cal.set_start_date(Date::from_ymd(2006, 8, 28).unwrap()).unwrap();
//! assert_eq!(start, Date::from_ymd(2006, 8, 29).unwrap());
//!
//! let next = cal.move_by_tenor(Tenor::T_1W).unwrap();
//! assert_eq!(next, Date::from_ymd(2006, 9, 5).unwrap());
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, trace};

use crate::calendars::{Calendar, HolidayCalendar, HolidayHandlerType, WorkingWeek};
use crate::error::{DateCalcError, DateCalcResult};
use crate::types::{Date, Tenor, TenorCode};

/// Default cap on single-day steps per adjustment: ten years of days.
pub const DEFAULT_MAX_ADJUSTMENT_STEPS: u32 = 3660;

/// A stateful, business-day-aware date cursor.
///
/// The calculator starts unpositioned; [`DateCalculator::set_start_date`]
/// positions it. Movement before that fails with
/// [`DateCalcError::NoStartDate`].
///
/// A calculator is owned by one caller and mutated through `&mut self`.
/// Its holiday set is a snapshot taken at construction and is never
/// changed behind its back.
#[derive(Debug, Clone)]
pub struct DateCalculator {
    name: String,
    start_date: Option<Date>,
    current_date: Option<Date>,
    calendar: HolidayCalendar,
    handler: HolidayHandlerType,
    max_adjustment_steps: u32,
}

impl DateCalculator {
    /// Creates an unpositioned calculator.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::NoWorkingDays` if `working_week` has no
    /// working day at all.
    pub fn new(
        name: impl Into<String>,
        handler: HolidayHandlerType,
        non_working_days: impl Into<Arc<HashSet<Date>>>,
        working_week: WorkingWeek,
    ) -> DateCalcResult<Self> {
        Self::from_calendar(name, handler, HolidayCalendar::new(non_working_days, working_week))
    }

    /// Creates an unpositioned calculator over an existing calendar.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::NoWorkingDays` if the calendar's working week
    /// has no working day at all.
    pub fn from_calendar(
        name: impl Into<String>,
        handler: HolidayHandlerType,
        calendar: HolidayCalendar,
    ) -> DateCalcResult<Self> {
        if !calendar.working_week().has_working_days() {
            return Err(DateCalcError::NoWorkingDays);
        }

        let name = name.into();
        debug!(
            "new calculator '{}': handler={}, week={}, holidays={}",
            name,
            handler.id(),
            calendar.working_week(),
            calendar.holidays().len()
        );

        Ok(Self {
            name,
            start_date: None,
            current_date: None,
            calendar,
            handler,
            max_adjustment_steps: DEFAULT_MAX_ADJUSTMENT_STEPS,
        })
    }

    /// Sets the cap on single-day steps taken by one adjustment.
    ///
    /// A cap of zero is raised to one.
    #[must_use]
    pub fn with_max_adjustment_steps(mut self, steps: u32) -> Self {
        self.max_adjustment_steps = steps.max(1);
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Name of the calculator, usually the calendar it was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The start date, once set.
    pub fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    /// The current date, once positioned.
    pub fn current_date(&self) -> Option<Date> {
        self.current_date
    }

    /// The holiday set, excluding weekends.
    pub fn non_working_days(&self) -> &HashSet<Date> {
        self.calendar.holidays()
    }

    /// The working week.
    pub fn working_week(&self) -> WorkingWeek {
        self.calendar.working_week()
    }

    /// The calendar (working week plus holidays).
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// The holiday handler in use.
    pub fn handler_type(&self) -> HolidayHandlerType {
        self.handler
    }

    /// The cap on single-day steps per adjustment.
    pub fn max_adjustment_steps(&self) -> u32 {
        self.max_adjustment_steps
    }

    /// Returns true if `date` is a weekend day or a holiday.
    pub fn is_non_working_day(&self, date: Date) -> bool {
        self.calendar.is_non_working_day(date)
    }

    /// Returns true if the current date is a non-working day.
    ///
    /// Always false once positioned, since every mutator adjusts.
    pub fn is_current_date_non_working_day(&self) -> DateCalcResult<bool> {
        Ok(self.is_non_working_day(self.current()?))
    }

    // =========================================================================
    // Positioning
    // =========================================================================

    /// Sets the start date and moves the cursor onto it.
    ///
    /// The handler is applied right away, so the returned current date is
    /// a working day. The start date itself is kept unadjusted.
    pub fn set_start_date(&mut self, date: Date) -> DateCalcResult<Date> {
        let adjusted = self.adjust(date)?;
        trace!("{}: start {} -> current {}", self.name, date, adjusted);
        self.start_date = Some(date);
        self.current_date = Some(adjusted);
        Ok(adjusted)
    }

    /// Moves the cursor to `date` without touching the start date.
    ///
    /// If no start date was set yet, `date` becomes the start date too.
    pub fn set_current_business_date(&mut self, date: Date) -> DateCalcResult<Date> {
        if self.start_date.is_none() {
            return self.set_start_date(date);
        }
        self.position(date)
    }

    /// Replaces the working week.
    ///
    /// A positioned cursor is re-adjusted against the new week.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::NoWorkingDays` for a week with no working day.
    pub fn set_working_week(&mut self, working_week: WorkingWeek) -> DateCalcResult<()> {
        if !working_week.has_working_days() {
            return Err(DateCalcError::NoWorkingDays);
        }
        self.calendar = self.calendar.with_working_week(working_week);
        self.readjust()
    }

    /// Replaces the holiday set with a new snapshot.
    ///
    /// A positioned cursor is re-adjusted against the new holidays.
    pub fn set_non_working_days(
        &mut self,
        non_working_days: impl Into<Arc<HashSet<Date>>>,
    ) -> DateCalcResult<()> {
        self.calendar = HolidayCalendar::new(non_working_days, self.calendar.working_week());
        self.readjust()
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Shifts the current date by `days` calendar days, then adjusts.
    ///
    /// The shift itself ignores holidays; only the landing date is adjusted.
    pub fn add_days(&mut self, days: i64) -> DateCalcResult<Date> {
        let current = self.current()?;
        trace!("{}: add {} days to {}", self.name, days, current);
        let target = current.add_days(days)?;
        self.position(target)
    }

    /// Same as [`DateCalculator::add_days`].
    pub fn move_by_days(&mut self, days: i64) -> DateCalcResult<Date> {
        self.add_days(days)
    }

    /// Moves by `days` working days.
    ///
    /// Steps one calendar day at a time in the direction of `days` and
    /// counts only the days that are working days.
    pub fn move_by_business_days(&mut self, days: i32) -> DateCalcResult<Date> {
        let current = self.current()?;
        trace!("{}: move {} business days from {}", self.name, days, current);

        let direction: i64 = if days >= 0 { 1 } else { -1 };
        let mut remaining = days.unsigned_abs();
        let mut date = current;
        let mut skipped = 0u32;

        while remaining > 0 {
            date = date.add_days(direction)?;
            if self.calendar.is_non_working_day(date) {
                skipped += 1;
                if skipped > self.max_adjustment_steps {
                    return Err(DateCalcError::AdjustmentLimit {
                        date: current,
                        steps: skipped,
                    });
                }
            } else {
                remaining -= 1;
                skipped = 0;
            }
        }

        self.current_date = Some(date);
        Ok(date)
    }

    /// Moves by a tenor.
    ///
    /// Day and week tenors shift by calendar days; month and year tenors
    /// use calendar month arithmetic. Either way the handler is applied
    /// once, to the landing date.
    pub fn move_by_tenor(&mut self, tenor: Tenor) -> DateCalcResult<Date> {
        let current = self.current()?;
        trace!("{}: move by {} from {}", self.name, tenor, current);
        let target = self.date_for_tenor(current, tenor)?;
        self.current_date = Some(target);
        Ok(target)
    }

    /// Dates reached by each tenor from the current date.
    ///
    /// The cursor does not move.
    pub fn tenor_dates(&self, tenors: &[Tenor]) -> DateCalcResult<Vec<Date>> {
        let current = self.current()?;
        tenors
            .iter()
            .map(|tenor| self.date_for_tenor(current, *tenor))
            .collect()
    }

    /// Builds a calculator whose holidays are the union of both calendars.
    ///
    /// The result is named `"<self>/<other>"`, keeps this calculator's
    /// working week and cursor, and owns a fresh holiday snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::IncompatibleCalculators` if the handler types
    /// or the start dates differ.
    pub fn combine(&self, other: &DateCalculator) -> DateCalcResult<DateCalculator> {
        if self.handler != other.handler {
            return Err(DateCalcError::incompatible(format!(
                "handler {} differs from {}",
                self.handler.id(),
                other.handler.id()
            )));
        }
        if self.start_date != other.start_date {
            return Err(DateCalcError::incompatible(format!(
                "start date {:?} differs from {:?}",
                self.start_date, other.start_date
            )));
        }

        let mut combined = DateCalculator::from_calendar(
            format!("{}/{}", self.name, other.name),
            self.handler,
            self.calendar.union(&other.calendar),
        )?
        .with_max_adjustment_steps(self.max_adjustment_steps);

        if let Some(start) = self.start_date {
            combined.set_start_date(start)?;
        }
        Ok(combined)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn current(&self) -> DateCalcResult<Date> {
        self.current_date
            .ok_or_else(|| DateCalcError::no_start_date(&self.name))
    }

    fn adjust(&self, date: Date) -> DateCalcResult<Date> {
        self.handler
            .adjust(date, &self.calendar, self.max_adjustment_steps)
    }

    fn position(&mut self, date: Date) -> DateCalcResult<Date> {
        let adjusted = self.adjust(date)?;
        self.current_date = Some(adjusted);
        Ok(adjusted)
    }

    fn readjust(&mut self) -> DateCalcResult<()> {
        if let Some(current) = self.current_date {
            self.position(current)?;
        }
        Ok(())
    }

    fn date_for_tenor(&self, from: Date, tenor: Tenor) -> DateCalcResult<Date> {
        let raw = match tenor.code() {
            TenorCode::Day => from.add_days(i64::from(tenor.units()))?,
            TenorCode::Week => from.add_days(i64::from(tenor.units()) * 7)?,
            TenorCode::Month => from.add_months(tenor.units())?,
            TenorCode::Year => from.add_years(tenor.units())?,
        };
        self.adjust(raw)
    }
}
