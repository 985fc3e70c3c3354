//! Value types: dates and tenors.

mod date;
mod tenor;

pub use date::Date;
pub use tenor::{Tenor, TenorCode};
