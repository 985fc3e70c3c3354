//! Non-working-day calendars and holiday adjustment.
//!
//! This module provides:
//! - [`WorkingWeek`], the weekday mask
//! - [`HolidayCalendar`], a working week plus a holiday set snapshot
//! - [`HolidayHandlerType`], the four adjustment algorithms

use std::collections::HashSet;
use std::sync::Arc;

mod handlers;
mod working_week;

pub use handlers::HolidayHandlerType;
pub use working_week::WorkingWeek;

use crate::types::Date;

/// Anything that can tell working days from non-working days.
pub trait Calendar {
    /// Returns true if `date` is not a working day.
    fn is_non_working_day(&self, date: Date) -> bool;

    /// Returns true if `date` is a working day.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_non_working_day(date)
    }

    /// Counts working days after `start` up to and including `end`.
    fn working_days_between(&self, start: Date, end: Date) -> i64 {
        let end = end.as_naive_date();
        let count = start
            .as_naive_date()
            .iter_days()
            .skip(1)
            .take_while(|day| *day <= end)
            .filter(|day| self.is_working_day(Date::from(*day)))
            .count();

        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

/// A working week combined with a set of holidays.
///
/// The holiday set is an immutable snapshot shared through an `Arc`.
/// Nothing here mutates it, so clones of a calendar always agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Arc<HashSet<Date>>,
    working_week: WorkingWeek,
}

impl HolidayCalendar {
    /// Creates a calendar from a holiday set and a working week.
    pub fn new(holidays: impl Into<Arc<HashSet<Date>>>, working_week: WorkingWeek) -> Self {
        Self {
            holidays: holidays.into(),
            working_week,
        }
    }

    /// Weekends only, no holidays.
    #[must_use]
    pub fn weekends_only(working_week: WorkingWeek) -> Self {
        Self::new(HashSet::new(), working_week)
    }

    /// The holiday set.
    #[must_use]
    pub fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }

    /// The shared holiday snapshot.
    #[must_use]
    pub fn holidays_snapshot(&self) -> Arc<HashSet<Date>> {
        Arc::clone(&self.holidays)
    }

    /// The working week.
    #[must_use]
    pub fn working_week(&self) -> WorkingWeek {
        self.working_week
    }

    /// Returns a calendar with a different working week and the same holidays.
    #[must_use]
    pub fn with_working_week(&self, working_week: WorkingWeek) -> Self {
        Self {
            holidays: Arc::clone(&self.holidays),
            working_week,
        }
    }

    /// Returns a calendar whose holidays are the union of both sets.
    ///
    /// The working week of `self` is kept.
    #[must_use]
    pub fn union(&self, other: &HolidayCalendar) -> Self {
        let holidays: HashSet<Date> = self
            .holidays
            .iter()
            .chain(other.holidays.iter())
            .copied()
            .collect();
        Self::new(holidays, self.working_week)
    }
}

impl Calendar for HolidayCalendar {
    fn is_non_working_day(&self, date: Date) -> bool {
        !self.working_week.is_working_day(date.weekday()) || self.holidays.contains(&date)
    }
}
