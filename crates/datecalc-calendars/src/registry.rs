//! Named holiday sets.
//!
//! The registry maps calendar names to holiday sets. Lookups hand out an
//! `Arc` snapshot: registering a new set under a name swaps in a new `Arc`
//! and never touches a set that was already handed out, so calculators
//! built earlier keep seeing the holidays they were built with.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use datecalc_core::Date;
use log::info;

use crate::error::{RegistryError, RegistryResult};

/// A shared, immutable holiday set.
pub type HolidaySet = Arc<HashSet<Date>>;

/// Thread-safe map of calendar name to holiday set.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use datecalc_calendars::HolidayRegistry;
/// use datecalc_core::Date;
///
/// let registry = HolidayRegistry::new();
/// let xmas: HashSet<Date> = [Date::from_ymd(2006, 12, 25).unwrap()].into_iter().collect();
/// registry.register_holidays("UK", xmas).unwrap();
///
/// let snapshot = registry.holidays("UK").unwrap().unwrap();
/// assert_eq!(snapshot.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct HolidayRegistry {
    calendars: RwLock<HashMap<String, HolidaySet>>,
}

impl HolidayRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `holidays` under `name`, replacing any previous set.
    ///
    /// Snapshots handed out before the call are unaffected.
    pub fn register_holidays(
        &self,
        name: impl Into<String>,
        holidays: impl Into<HolidaySet>,
    ) -> RegistryResult<()> {
        let name = name.into();
        let holidays = holidays.into();
        info!("registering {} holidays for calendar '{}'", holidays.len(), name);

        self.calendars
            .write()
            .map_err(|e| RegistryError::Lock(e.to_string()))?
            .insert(name, holidays);
        Ok(())
    }

    /// Returns the current holiday set for `name`, if registered.
    pub fn holidays(&self, name: &str) -> RegistryResult<Option<HolidaySet>> {
        Ok(self
            .calendars
            .read()
            .map_err(|e| RegistryError::Lock(e.to_string()))?
            .get(name)
            .cloned())
    }

    /// Removes the calendar `name`. Returns true if it existed.
    pub fn unregister(&self, name: &str) -> RegistryResult<bool> {
        Ok(self
            .calendars
            .write()
            .map_err(|e| RegistryError::Lock(e.to_string()))?
            .remove(name)
            .is_some())
    }

    /// Returns true if a calendar is registered under `name`.
    pub fn contains(&self, name: &str) -> RegistryResult<bool> {
        Ok(self
            .calendars
            .read()
            .map_err(|e| RegistryError::Lock(e.to_string()))?
            .contains_key(name))
    }

    /// Names of all registered calendars, sorted.
    pub fn calendar_names(&self) -> RegistryResult<Vec<String>> {
        let calendars = self
            .calendars
            .read()
            .map_err(|e| RegistryError::Lock(e.to_string()))?;

        let mut names: Vec<String> = calendars.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(dates: &[&str]) -> HashSet<Date> {
        dates.iter().map(|s| Date::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = HolidayRegistry::new();
        assert!(registry.holidays("UK").unwrap().is_none());

        registry.register_holidays("UK", set(&["2006-08-28"])).unwrap();
        assert!(registry.contains("UK").unwrap());
        assert_eq!(registry.holidays("UK").unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_reregistering_does_not_touch_old_snapshot() {
        let registry = HolidayRegistry::new();
        registry.register_holidays("UK", set(&["2006-08-28"])).unwrap();
        let before = registry.holidays("UK").unwrap().unwrap();

        registry
            .register_holidays("UK", set(&["2006-12-25", "2006-12-26"]))
            .unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(registry.holidays("UK").unwrap().unwrap().len(), 2);
    }

    #[test]
    fn test_unregister_and_names() {
        let registry = HolidayRegistry::new();
        registry.register_holidays("US", set(&[])).unwrap();
        registry.register_holidays("EUR", set(&[])).unwrap();

        assert_eq!(registry.calendar_names().unwrap(), vec!["EUR", "US"]);
        assert!(registry.unregister("US").unwrap());
        assert!(!registry.unregister("US").unwrap());
        assert_eq!(registry.calendar_names().unwrap(), vec!["EUR"]);
    }
}
