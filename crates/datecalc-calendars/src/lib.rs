//! # Datecalc Calendars
//!
//! Named holiday sets and the factory that turns them into date
//! calculators.
//!
//! - **Registry**: thread-safe map of calendar name to holiday set, handing
//!   out immutable snapshots
//! - **Factory**: builds a [`DateCalculator`] for a calendar name and a
//!   holiday handler identifier
//! - **Configuration**: default handler, working week and adjustment cap,
//!   loadable from JSON and validated
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use datecalc_calendars::CalculatorFactory;
//! use datecalc_core::{Date, Tenor};
//!
//! let factory = CalculatorFactory::default();
//! let xmas: HashSet<Date> = ["2006-12-25", "2006-12-26"]
//!     .iter()
//!     .map(|s| Date::parse(s).unwrap())
//!     .collect();
//! factory.register_holidays("UK", xmas).unwrap();
//!
//! let mut cal = factory.calculator("UK", "modifiedFollowing").unwrap();
//! cal.set_start_date(Date::from_ymd(2006, 12, 22).unwrap()).unwrap();
//! assert_eq!(cal.move_by_tenor(Tenor::T_1D).unwrap(), Date::from_ymd(2006, 12, 27).unwrap());
//! ```
//!
//! [`DateCalculator`]: datecalc_core::DateCalculator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod factory;
pub mod registry;

pub use config::FactoryConfig;
pub use error::{RegistryError, RegistryResult, Validate, ValidationError};
pub use factory::CalculatorFactory;
pub use registry::{HolidayRegistry, HolidaySet};
