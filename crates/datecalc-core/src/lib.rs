//! # Datecalc Core
//!
//! Business-day-aware date arithmetic.
//!
//! This crate provides the engine of the date calculator:
//!
//! - **Working weeks**: which weekdays are working days
//! - **Holiday handlers**: Forward, Backward, Modified Following and
//!   Modified Preceding adjustment onto working days
//! - **Date calculator**: a cursor moved by days, business days or tenors
//! - **Period counting**: day, month and year differences under common
//!   day-count bases
//!
//! Named holiday sets and calculator factories live in `datecalc-calendars`.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use datecalc_core::prelude::*;
//!
//! let mut cal = DateCalculator::new(
//!     "weekends",
//!     HolidayHandlerType::Forward,
//!     HashSet::new(),
//!     WorkingWeek::default(),
//! )
//! .unwrap();
//!
//! cal.set_start_date(Date::from_ymd(2006, 8, 4).unwrap()).unwrap();
//! // Friday + 1 day lands on Saturday and rolls to Monday
//! assert_eq!(cal.add_days(1).unwrap(), Date::from_ymd(2006, 8, 7).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod calendars;
pub mod error;
pub mod period_count;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::DateCalculator;
    pub use crate::calendars::{Calendar, HolidayCalendar, HolidayHandlerType, WorkingWeek};
    pub use crate::error::{DateCalcError, DateCalcResult};
    pub use crate::period_count::{PeriodCountBasis, PeriodCountCalculator};
    pub use crate::types::{Date, Tenor, TenorCode};
}

// Re-export commonly used types at crate root
pub use calculator::{DateCalculator, DEFAULT_MAX_ADJUSTMENT_STEPS};
pub use calendars::{HolidayCalendar, HolidayHandlerType, WorkingWeek};
pub use error::{DateCalcError, DateCalcResult};
pub use types::{Date, Tenor, TenorCode};
