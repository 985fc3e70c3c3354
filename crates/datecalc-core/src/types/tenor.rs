//! Financial tenors ("1W", "3M", "-2D").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DateCalcError, DateCalcResult};

/// Unit of a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorCode {
    /// Calendar days.
    Day,
    /// Weeks of seven calendar days.
    Week,
    /// Calendar months.
    Month,
    /// Calendar years.
    Year,
}

impl TenorCode {
    /// Returns the single-letter code used in tenor strings.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            TenorCode::Day => 'D',
            TenorCode::Week => 'W',
            TenorCode::Month => 'M',
            TenorCode::Year => 'Y',
        }
    }

    /// Parses a single-letter code, case-insensitive.
    #[must_use]
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(TenorCode::Day),
            'W' => Some(TenorCode::Week),
            'M' => Some(TenorCode::Month),
            'Y' => Some(TenorCode::Year),
            _ => None,
        }
    }

    /// Returns true for units measured in calendar months or years.
    #[must_use]
    pub fn is_calendar_unit(&self) -> bool {
        matches!(self, TenorCode::Month | TenorCode::Year)
    }
}

impl fmt::Display for TenorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TenorCode::Day => "Day",
            TenorCode::Week => "Week",
            TenorCode::Month => "Month",
            TenorCode::Year => "Year",
        };
        write!(f, "{name}")
    }
}

/// A signed count of tenor units.
///
/// # Example
///
/// ```rust
/// use datecalc_core::types::{Tenor, TenorCode};
///
/// let tenor: Tenor = "3M".parse().unwrap();
/// assert_eq!(tenor, Tenor::new(3, TenorCode::Month));
/// assert_eq!(Tenor::T_1W.to_string(), "1W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    units: i32,
    code: TenorCode,
}

impl Tenor {
    /// 1 day.
    pub const T_1D: Self = Self::new(1, TenorCode::Day);
    /// 2 days.
    pub const T_2D: Self = Self::new(2, TenorCode::Day);
    /// 1 week.
    pub const T_1W: Self = Self::new(1, TenorCode::Week);
    /// 2 weeks.
    pub const T_2W: Self = Self::new(2, TenorCode::Week);
    /// 1 month.
    pub const T_1M: Self = Self::new(1, TenorCode::Month);
    /// 2 months.
    pub const T_2M: Self = Self::new(2, TenorCode::Month);
    /// 3 months.
    pub const T_3M: Self = Self::new(3, TenorCode::Month);
    /// 6 months.
    pub const T_6M: Self = Self::new(6, TenorCode::Month);
    /// 9 months.
    pub const T_9M: Self = Self::new(9, TenorCode::Month);
    /// 1 year.
    pub const T_1Y: Self = Self::new(1, TenorCode::Year);
    /// 2 years.
    pub const T_2Y: Self = Self::new(2, TenorCode::Year);
    /// 5 years.
    pub const T_5Y: Self = Self::new(5, TenorCode::Year);
    /// 10 years.
    pub const T_10Y: Self = Self::new(10, TenorCode::Year);

    /// Creates a tenor from a signed count and a unit.
    #[must_use]
    pub const fn new(units: i32, code: TenorCode) -> Self {
        Self { units, code }
    }

    /// Returns the signed count.
    #[must_use]
    pub const fn units(&self) -> i32 {
        self.units
    }

    /// Returns the unit.
    #[must_use]
    pub const fn code(&self) -> TenorCode {
        self.code
    }

    /// Returns the same tenor pointing the other way.
    #[must_use]
    pub const fn negate(&self) -> Self {
        Self::new(-self.units, self.code)
    }

    /// Parses a tenor such as `"1W"`, `"-3m"` or `"+10Y"`.
    ///
    /// # Errors
    ///
    /// Returns `DateCalcError::InvalidTenor` when the unit is missing or
    /// unknown, or the count is not an integer.
    pub fn parse(s: &str) -> DateCalcResult<Self> {
        let input = s.trim();
        let Some(last) = input.chars().last() else {
            return Err(DateCalcError::invalid_tenor(s, "empty tenor"));
        };
        if last.is_ascii_digit() {
            return Err(DateCalcError::invalid_tenor(s, "missing unit"));
        }
        let code = TenorCode::from_code(last)
            .ok_or_else(|| DateCalcError::invalid_tenor(s, format!("unknown unit '{last}'")))?;

        let count = &input[..input.len() - last.len_utf8()];
        let units = count
            .parse::<i32>()
            .map_err(|_| DateCalcError::invalid_tenor(s, format!("invalid count '{count}'")))?;

        Ok(Self::new(units, code))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.units, self.code.code())
    }
}

impl FromStr for Tenor {
    type Err = DateCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tenor {
    type Error = DateCalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard() {
        assert_eq!("1D".parse::<Tenor>().unwrap(), Tenor::T_1D);
        assert_eq!("2w".parse::<Tenor>().unwrap(), Tenor::T_2W);
        assert_eq!(" 6M ".parse::<Tenor>().unwrap(), Tenor::T_6M);
        assert_eq!("10Y".parse::<Tenor>().unwrap(), Tenor::T_10Y);
    }

    #[test]
    fn test_parse_signed() {
        let t = Tenor::parse("-3M").unwrap();
        assert_eq!(t.units(), -3);
        assert_eq!(t.code(), TenorCode::Month);
        assert_eq!(Tenor::parse("+1Y").unwrap(), Tenor::T_1Y);
        assert_eq!(t.negate(), Tenor::T_3M);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Tenor::parse(""),
            Err(DateCalcError::InvalidTenor { .. })
        ));
        assert!(Tenor::parse("12").is_err());
        assert!(Tenor::parse("3Q").is_err());
        assert!(Tenor::parse("M").is_err());
        assert!(Tenor::parse("1.5M").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tenor::T_9M.to_string(), "9M");
        assert_eq!(Tenor::new(-2, TenorCode::Day).to_string(), "-2D");
        assert_eq!(TenorCode::Week.to_string(), "Week");
    }

    #[test]
    fn test_calendar_units() {
        assert!(TenorCode::Month.is_calendar_unit());
        assert!(TenorCode::Year.is_calendar_unit());
        assert!(!TenorCode::Week.is_calendar_unit());
        assert!(!TenorCode::Day.is_calendar_unit());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Tenor::T_3M).unwrap();
        assert_eq!(json, "\"3M\"");
        let parsed: Tenor = serde_json::from_str("\"2W\"").unwrap();
        assert_eq!(parsed, Tenor::T_2W);
        assert!(serde_json::from_str::<Tenor>("\"2X\"").is_err());
    }
}
