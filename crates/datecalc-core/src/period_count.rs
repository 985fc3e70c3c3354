//! Period counting between two dates under a day-count basis.
//!
//! # Supported Bases
//!
//! - [`PeriodCountBasis::Conv30360`]: 30/360 (bond basis)
//! - [`PeriodCountBasis::Conv360EIsda`]: 30E/360 ISDA
//! - [`PeriodCountBasis::Conv360EIsma`]: 30E/360 (Eurobond basis)
//! - [`PeriodCountBasis::Act360`]: Actual/360
//! - [`PeriodCountBasis::Act365`]: Actual/365 Fixed
//! - [`PeriodCountBasis::End365`]: Actual/365, same as `Act365` for counting
//! - [`PeriodCountBasis::ActAct`]: Actual/Actual, year by year
//!
//! # Usage
//!
//! ```rust
//! use datecalc_core::period_count::{PeriodCountBasis, PeriodCountCalculator};
//! use datecalc_core::types::Date;
//! use rust_decimal::Decimal;
//!
//! let pcc = PeriodCountCalculator;
//! let start = Date::from_ymd(2006, 1, 15).unwrap();
//! let end = Date::from_ymd(2006, 7, 15).unwrap();
//!
//! assert_eq!(pcc.day_diff(start, end, PeriodCountBasis::Conv30360), 180);
//! assert_eq!(pcc.year_diff(start, end, PeriodCountBasis::Conv30360), Decimal::new(5, 1));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

const YEAR_360: i64 = 360;
const YEAR_365: i64 = 365;
const MONTHS_PER_YEAR: i64 = 12;

/// Day-count basis used to count periods between dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodCountBasis {
    /// 30/360: day 31 becomes 30 at the start, and at the end when the
    /// start is on the 30th or 31st.
    Conv30360,
    /// 30E/360 ISDA: month ends (including end of February) count as 30.
    Conv360EIsda,
    /// 30E/360 ISMA: day 31 becomes 30 at either end.
    Conv360EIsma,
    /// Actual days over 360.
    Act360,
    /// Actual days over 365.
    Act365,
    /// Actual days over the length of each year.
    ActAct,
    /// Actual days over 365, ignoring leap days in the basis.
    End365,
}

impl PeriodCountBasis {
    /// Returns the conventional name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PeriodCountBasis::Conv30360 => "30/360",
            PeriodCountBasis::Conv360EIsda => "30E/360 ISDA",
            PeriodCountBasis::Conv360EIsma => "30E/360",
            PeriodCountBasis::Act360 => "ACT/360",
            PeriodCountBasis::Act365 => "ACT/365",
            PeriodCountBasis::ActAct => "ACT/ACT",
            PeriodCountBasis::End365 => "END/365",
        }
    }

    /// Returns true for the 30-day-month family.
    #[must_use]
    pub fn is_thirty_360(&self) -> bool {
        matches!(
            self,
            PeriodCountBasis::Conv30360
                | PeriodCountBasis::Conv360EIsda
                | PeriodCountBasis::Conv360EIsma
        )
    }
}

impl fmt::Display for PeriodCountBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Counts days, months and years between dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodCountCalculator;

impl PeriodCountCalculator {
    /// Number of days from `start` to `end` under `basis`.
    #[must_use]
    pub fn day_diff(&self, start: Date, end: Date, basis: PeriodCountBasis) -> i64 {
        match basis {
            PeriodCountBasis::Conv30360 => {
                let mut d1 = start.day();
                let mut d2 = end.day();
                if d2 == 31 && d1 >= 30 {
                    d2 = 30;
                }
                if d1 == 31 {
                    d1 = 30;
                }
                thirty_360(start, end, d1, d2)
            }
            PeriodCountBasis::Conv360EIsda => {
                let d1 = if start.is_end_of_month() { 30 } else { start.day() };
                let d2 = if end.is_end_of_month() { 30 } else { end.day() };
                thirty_360(start, end, d1, d2)
            }
            PeriodCountBasis::Conv360EIsma => {
                let d1 = start.day().min(30);
                let d2 = end.day().min(30);
                thirty_360(start, end, d1, d2)
            }
            PeriodCountBasis::Act360
            | PeriodCountBasis::Act365
            | PeriodCountBasis::ActAct
            | PeriodCountBasis::End365 => start.days_between(&end),
        }
    }

    /// Fraction of a year from `start` to `end` under `basis`.
    #[must_use]
    pub fn year_diff(&self, start: Date, end: Date, basis: PeriodCountBasis) -> Decimal {
        match basis {
            PeriodCountBasis::ActAct => act_act(start, end),
            PeriodCountBasis::Act365 | PeriodCountBasis::End365 => {
                Decimal::from(self.day_diff(start, end, basis)) / Decimal::from(YEAR_365)
            }
            _ => Decimal::from(self.day_diff(start, end, basis)) / Decimal::from(YEAR_360),
        }
    }

    /// Fraction of months from `start` to `end` under `basis`.
    #[must_use]
    pub fn month_diff(&self, start: Date, end: Date, basis: PeriodCountBasis) -> Decimal {
        self.year_diff(start, end, basis) * Decimal::from(MONTHS_PER_YEAR)
    }
}

fn thirty_360(start: Date, end: Date, d1: u32, d2: u32) -> i64 {
    i64::from(end.year() - start.year()) * YEAR_360
        + (i64::from(end.month()) - i64::from(start.month())) * 30
        + i64::from(d2)
        - i64::from(d1)
}

/// Splits the period at year boundaries and divides each part by the
/// length of its own year.
fn act_act(start: Date, end: Date) -> Decimal {
    if end < start {
        return -act_act(end, start);
    }
    if start.year() == end.year() {
        return Decimal::from(start.days_between(&end)) / Decimal::from(start.days_in_year());
    }

    let start_year_end = Date::from_ymd(start.year() + 1, 1, 1).unwrap_or(end);
    let end_year_start = Date::from_ymd(end.year(), 1, 1).unwrap_or(start);

    let first = Decimal::from(start.days_between(&start_year_end))
        / Decimal::from(start.days_in_year());
    let whole = Decimal::from(end.year() - start.year() - 1);
    let last =
        Decimal::from(end_year_start.days_between(&end)) / Decimal::from(end.days_in_year());

    first + whole + last
}
