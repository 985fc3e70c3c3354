//! Scenario tests for a Forward calculator under different working weeks
//! and holiday sets.

use std::collections::HashSet;

use chrono::Weekday;
use datecalc_core::prelude::*;

fn date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn forward(week: WorkingWeek, holidays: &[&str]) -> DateCalculator {
    let set: HashSet<Date> = holidays.iter().map(|s| date(s)).collect();
    DateCalculator::new("bla", HolidayHandlerType::Forward, set, week).unwrap()
}

/// Sets each start date in turn and checks where the cursor lands.
fn check_start_dates(cal: &mut DateCalculator, expected: &[(&str, &str)]) {
    for (start, landed) in expected {
        cal.set_start_date(date(start)).unwrap();
        assert_eq!(cal.current_date(), Some(date(landed)), "start date {start}");
    }
}

// ============================================================================
// Working weeks
// ============================================================================

#[test]
fn start_date_with_default_weekend() {
    let mut cal = forward(WorkingWeek::default(), &[]);
    check_start_dates(
        &mut cal,
        &[
            ("2006-07-31", "2006-07-31"), // Monday
            ("2006-08-01", "2006-08-01"),
            ("2006-08-02", "2006-08-02"),
            ("2006-08-03", "2006-08-03"),
            ("2006-08-04", "2006-08-04"), // Friday
            ("2006-08-05", "2006-08-07"), // Saturday
            ("2006-08-06", "2006-08-07"), // Sunday
        ],
    );
}

#[test]
fn start_date_with_no_weekend() {
    let week = WorkingWeek::default()
        .with_working_day(Weekday::Sat, true)
        .with_working_day(Weekday::Sun, true);
    let mut cal = forward(week, &[]);
    check_start_dates(
        &mut cal,
        &[
            ("2006-07-31", "2006-07-31"),
            ("2006-08-04", "2006-08-04"),
            ("2006-08-05", "2006-08-05"),
            ("2006-08-06", "2006-08-06"),
        ],
    );
}

#[test]
fn start_date_with_alternating_week() {
    let week = WorkingWeek::from_days([Weekday::Tue, Weekday::Thu, Weekday::Sat]);
    let mut cal = forward(week, &[]);
    check_start_dates(
        &mut cal,
        &[
            ("2006-07-31", "2006-08-01"), // Monday
            ("2006-08-01", "2006-08-01"),
            ("2006-08-02", "2006-08-03"),
            ("2006-08-03", "2006-08-03"),
            ("2006-08-04", "2006-08-05"),
            ("2006-08-05", "2006-08-05"),
            ("2006-08-06", "2006-08-08"), // Sunday
        ],
    );
}

#[test]
fn start_date_with_tuesday_to_friday_week() {
    let week = WorkingWeek::default().with_working_day(Weekday::Mon, false);
    let mut cal = forward(week, &[]);
    check_start_dates(
        &mut cal,
        &[
            ("2006-07-31", "2006-08-01"),
            ("2006-08-01", "2006-08-01"),
            ("2006-08-04", "2006-08-04"),
            ("2006-08-05", "2006-08-08"),
            ("2006-08-06", "2006-08-08"),
        ],
    );
}

// ============================================================================
// Holidays
// ============================================================================

#[test]
fn forward_with_holidays() {
    let mut cal = forward(
        WorkingWeek::default(),
        &["2006-08-28", "2006-12-25", "2006-12-26"],
    );
    assert_eq!(cal.non_working_days().len(), 3);
    assert!(cal.non_working_days().contains(&date("2006-08-28")));

    check_start_dates(
        &mut cal,
        &[
            ("2006-08-28", "2006-08-29"), // Monday bank holiday
            ("2006-12-24", "2006-12-27"), // Christmas Eve, a Sunday
        ],
    );

    cal.set_start_date(date("2006-12-21")).unwrap();
    assert_eq!(cal.add_days(1).unwrap(), date("2006-12-22"));

    cal.set_start_date(date("2006-12-21")).unwrap();
    assert_eq!(cal.add_days(2).unwrap(), date("2006-12-27"));

    cal.set_start_date(date("2006-12-22")).unwrap();
    assert_eq!(cal.add_days(1).unwrap(), date("2006-12-27"));

    // Saturday start is adjusted to the 27th before the move
    cal.set_start_date(date("2006-12-23")).unwrap();
    assert_eq!(cal.add_days(1).unwrap(), date("2006-12-28"));
}

#[test]
fn next_business_day_after_christmas() {
    let mut cal = forward(WorkingWeek::default(), &["2006-12-25", "2006-12-26"]);
    cal.set_start_date(date("2006-12-24")).unwrap();

    assert_eq!(cal.current_date(), Some(date("2006-12-27")));
    assert_eq!(cal.move_by_business_days(1).unwrap(), date("2006-12-28"));
}

#[test]
fn tenor_strings_drive_the_calculator() {
    let mut cal = forward(WorkingWeek::default(), &["2006-08-28"]);
    cal.set_start_date(date("2006-08-21")).unwrap();

    let tenor: Tenor = "1W".parse().unwrap();
    assert_eq!(cal.move_by_tenor(tenor).unwrap(), date("2006-08-29"));

    let back: Tenor = "-1W".parse().unwrap();
    assert_eq!(cal.move_by_tenor(back).unwrap(), date("2006-08-22"));
}
