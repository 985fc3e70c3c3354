//! Working-week mask.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DateCalcError, DateCalcResult};

/// Bits for Monday..=Friday.
const MONDAY_TO_FRIDAY: u8 = 0b001_1111;

/// Bits for all seven days.
const ALL_DAYS: u8 = 0b111_1111;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Which days of the week are working days.
///
/// Stored as a 7-bit mask, bit 0 for Monday through bit 6 for Sunday.
/// The value is immutable: [`WorkingWeek::with_working_day`] returns a
/// new week and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Weekday;
/// use datecalc_core::WorkingWeek;
///
/// let week = WorkingWeek::default();
/// assert!(!week.is_working_day(Weekday::Sat));
///
/// let six_day = week.with_working_day(Weekday::Sat, true);
/// assert!(six_day.is_working_day(Weekday::Sat));
/// assert!(!week.is_working_day(Weekday::Sat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WorkingWeek {
    mask: u8,
}

impl WorkingWeek {
    /// Monday to Friday working, the weekend off.
    pub const MONDAY_TO_FRIDAY: Self = Self {
        mask: MONDAY_TO_FRIDAY,
    };

    /// Every day is a working day.
    #[must_use]
    pub const fn all_days() -> Self {
        Self { mask: ALL_DAYS }
    }

    /// Builds a week from its raw mask (bit 0 = Monday).
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::ConfigError` if bits above bit 6 are set.
    pub fn from_mask(mask: u8) -> DateCalcResult<Self> {
        if mask & !ALL_DAYS != 0 {
            return Err(DateCalcError::config(format!(
                "working week mask {mask:#010b} uses more than 7 bits"
            )));
        }
        Ok(Self { mask })
    }

    /// Builds a week in which exactly the given days are working days.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days.into_iter().fold(0u8, |acc, day| acc | bit(day));
        Self { mask }
    }

    /// Returns the raw mask.
    #[must_use]
    pub const fn mask(&self) -> u8 {
        self.mask
    }

    /// Returns true if `weekday` is a working day.
    #[inline]
    #[must_use]
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        self.mask & bit(weekday) != 0
    }

    /// Returns a copy of this week with `weekday` switched on or off.
    #[must_use]
    pub fn with_working_day(&self, weekday: Weekday, working: bool) -> Self {
        let mask = if working {
            self.mask | bit(weekday)
        } else {
            self.mask & !bit(weekday)
        };
        Self { mask }
    }

    /// Number of working days per week.
    #[must_use]
    pub fn working_days_count(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Returns true if at least one day of the week is a working day.
    #[must_use]
    pub fn has_working_days(&self) -> bool {
        self.mask != 0
    }

    /// Iterates over the working days, Monday first.
    pub fn working_days(&self) -> impl Iterator<Item = Weekday> {
        let week = *self;
        WEEK.into_iter().filter(move |d| week.is_working_day(*d))
    }
}

impl Default for WorkingWeek {
    fn default() -> Self {
        Self::MONDAY_TO_FRIDAY
    }
}

impl From<Vec<Weekday>> for WorkingWeek {
    fn from(days: Vec<Weekday>) -> Self {
        Self::from_days(days)
    }
}

impl From<WorkingWeek> for Vec<Weekday> {
    fn from(week: WorkingWeek) -> Self {
        week.working_days().collect()
    }
}

impl fmt::Display for WorkingWeek {
    /// Renders as `MTWTF..`: the day letter when working, `.` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [char; 7] = ['M', 'T', 'W', 'T', 'F', 'S', 'S'];
        for (day, letter) in WEEK.iter().zip(LETTERS) {
            let c = if self.is_working_day(*day) { letter } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[inline]
fn bit(weekday: Weekday) -> u8 {
    1 << weekday.num_days_from_monday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_week() {
        let week = WorkingWeek::default();
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            assert!(week.is_working_day(day), "{day} should be working");
        }
        assert!(!week.is_working_day(Weekday::Sat));
        assert!(!week.is_working_day(Weekday::Sun));
        assert_eq!(week.working_days_count(), 5);
        assert_eq!(week.to_string(), "MTWTF..");
    }

    #[test]
    fn test_with_working_day_returns_new_value() {
        let week = WorkingWeek::default();
        let no_monday = week.with_working_day(Weekday::Mon, false);

        assert!(week.is_working_day(Weekday::Mon));
        assert!(!no_monday.is_working_day(Weekday::Mon));
        assert_eq!(no_monday.to_string(), ".TWTF..");

        // switching on an already working day is a no-op
        assert_eq!(week.with_working_day(Weekday::Tue, true), week);
    }

    #[test]
    fn test_from_days() {
        let week = WorkingWeek::from_days([Weekday::Tue, Weekday::Thu, Weekday::Sat]);
        assert_eq!(week.to_string(), ".T.T.S.");
        assert_eq!(
            week.working_days().collect::<Vec<_>>(),
            vec![Weekday::Tue, Weekday::Thu, Weekday::Sat]
        );
    }

    #[test]
    fn test_from_mask() {
        assert_eq!(WorkingWeek::from_mask(0b001_1111).unwrap(), WorkingWeek::default());
        assert_eq!(WorkingWeek::from_mask(0b111_1111).unwrap(), WorkingWeek::all_days());
        assert!(WorkingWeek::from_mask(0b1000_0000).is_err());
    }

    #[test]
    fn test_empty_week() {
        let week = WorkingWeek::from_days([]);
        assert!(!week.has_working_days());
        assert_eq!(week.to_string(), ".......");
    }

    #[test]
    fn test_serde_as_day_list() {
        let week = WorkingWeek::from_days([Weekday::Sun, Weekday::Mon]);
        let json = serde_json::to_string(&week).unwrap();
        let parsed: WorkingWeek = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, week);
    }
}
