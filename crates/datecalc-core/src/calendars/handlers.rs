//! Holiday handlers: how a date landing on a non-working day is moved.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Calendar;
use crate::error::{DateCalcError, DateCalcResult};
use crate::types::Date;

/// Holiday handling algorithms.
///
/// Each variant turns a candidate date into a working day. A date that is
/// already a working day is always returned unchanged, so adjusting twice
/// gives the same result as adjusting once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum HolidayHandlerType {
    /// Move forward to the next working day.
    #[default]
    Forward,

    /// Move backward to the previous working day.
    Backward,

    /// Move forward, unless that leaves the month, in which case move
    /// backward instead.
    ModifiedFollowing,

    /// Move backward, unless that leaves the month, in which case move
    /// forward instead.
    ModifiedPreceding,
}

impl HolidayHandlerType {
    /// Returns the canonical identifier (`"forward"`, `"modifiedFollowing"`, ...).
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            HolidayHandlerType::Forward => "forward",
            HolidayHandlerType::Backward => "backward",
            HolidayHandlerType::ModifiedFollowing => "modifiedFollowing",
            HolidayHandlerType::ModifiedPreceding => "modifiedPreceding",
        }
    }

    /// Returns all handler types.
    #[must_use]
    pub fn all() -> &'static [HolidayHandlerType] {
        &[
            HolidayHandlerType::Forward,
            HolidayHandlerType::Backward,
            HolidayHandlerType::ModifiedFollowing,
            HolidayHandlerType::ModifiedPreceding,
        ]
    }

    /// Moves `date` onto a working day of `calendar`.
    ///
    /// At most `max_steps` single-day steps are taken.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::AdjustmentLimit` when no working day is
    /// reached within `max_steps` steps, which happens for a calendar
    /// without working days or with an unbounded run of holidays.
    pub fn adjust<C: Calendar + ?Sized>(
        &self,
        date: Date,
        calendar: &C,
        max_steps: u32,
    ) -> DateCalcResult<Date> {
        let adjusted = match self {
            HolidayHandlerType::Forward => step_to_working_day(date, 1, calendar, max_steps),
            HolidayHandlerType::Backward => step_to_working_day(date, -1, calendar, max_steps),
            HolidayHandlerType::ModifiedFollowing => modified(date, 1, calendar, max_steps),
            HolidayHandlerType::ModifiedPreceding => modified(date, -1, calendar, max_steps),
        }?;

        if adjusted != date {
            debug!("{} moved {} to {}", self.id(), date, adjusted);
        }
        Ok(adjusted)
    }
}

impl fmt::Display for HolidayHandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HolidayHandlerType::Forward => "Forward",
            HolidayHandlerType::Backward => "Backward",
            HolidayHandlerType::ModifiedFollowing => "Modified Following",
            HolidayHandlerType::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

impl FromStr for HolidayHandlerType {
    type Err = DateCalcError;

    /// Accepts the canonical identifiers in any case, with or without
    /// `-`, `_` or space separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "forward" | "following" => Ok(HolidayHandlerType::Forward),
            "backward" | "preceding" => Ok(HolidayHandlerType::Backward),
            "modifiedfollowing" | "modfollowing" | "mf" => Ok(HolidayHandlerType::ModifiedFollowing),
            // "preceeding" is the spelling used by older configurations
            "modifiedpreceding" | "modifiedpreceeding" | "modpreceding" | "mp" => {
                Ok(HolidayHandlerType::ModifiedPreceding)
            }
            _ => Err(DateCalcError::unknown_handler(s)),
        }
    }
}

/// Steps by `step` days until the date is a working day.
fn step_to_working_day<C: Calendar + ?Sized>(
    mut date: Date,
    step: i64,
    calendar: &C,
    max_steps: u32,
) -> DateCalcResult<Date> {
    let origin = date;
    let mut steps = 0u32;

    while calendar.is_non_working_day(date) {
        if steps >= max_steps {
            return Err(limit_reached(origin, steps));
        }
        date = date.add_days(step)?;
        steps += 1;
    }

    Ok(date)
}

/// Steps in the initial direction while staying in the entry month.
///
/// Crossing into another month reverses the direction and undoes the
/// crossing step, so the search continues on the other side of the
/// original date.
fn modified<C: Calendar + ?Sized>(
    mut date: Date,
    mut step: i64,
    calendar: &C,
    max_steps: u32,
) -> DateCalcResult<Date> {
    let origin = date;
    let month = date.month();
    let mut steps = 0u32;

    while calendar.is_non_working_day(date) {
        if steps >= max_steps {
            return Err(limit_reached(origin, steps));
        }
        date = date.add_days(step)?;
        steps += 1;

        if date.month() != month {
            step = -step;
            date = date.add_days(step)?;
            steps += 1;
        }
    }

    Ok(date)
}

fn limit_reached(date: Date, steps: u32) -> DateCalcError {
    warn!("no working day found from {date} after {steps} steps");
    DateCalcError::AdjustmentLimit { date, steps }
}
