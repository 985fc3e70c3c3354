//! Integration tests: calculators built by the factory keep the holiday
//! snapshot they were created with.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chrono::Weekday;
use datecalc_calendars::{CalculatorFactory, FactoryConfig};
use datecalc_core::{Date, HolidayHandlerType, Tenor, WorkingWeek};

fn date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn set(dates: &[&str]) -> HashSet<Date> {
    dates.iter().map(|s| date(s)).collect()
}

#[test]
fn reregistration_does_not_reach_existing_calculators() {
    let factory = CalculatorFactory::default();
    factory.register_holidays("UK", set(&["2006-08-28"])).unwrap();

    let mut before = factory.calculator("UK", "forward").unwrap();
    factory
        .register_holidays("UK", set(&["2006-12-25", "2006-12-26"]))
        .unwrap();
    let mut after = factory.calculator("UK", "forward").unwrap();

    assert_eq!(before.non_working_days(), &set(&["2006-08-28"]));
    assert_eq!(after.non_working_days(), &set(&["2006-12-25", "2006-12-26"]));

    assert_eq!(before.set_start_date(date("2006-08-28")).unwrap(), date("2006-08-29"));
    assert_eq!(after.set_start_date(date("2006-08-28")).unwrap(), date("2006-08-28"));
}

#[test]
fn combined_calendars_from_factory() {
    let factory = CalculatorFactory::default();
    factory.register_holidays("UK", set(&["2006-12-25", "2006-12-26"])).unwrap();
    factory.register_holidays("US", set(&["2006-12-25", "2006-11-23"])).unwrap();

    let uk = factory.calculator("UK", "forward").unwrap();
    let us = factory.calculator("US", "forward").unwrap();
    let mut joint = uk.combine(&us).unwrap();

    assert_eq!(joint.name(), "UK/US");
    assert_eq!(joint.non_working_days().len(), 3);

    joint.set_start_date(date("2006-11-22")).unwrap();
    assert_eq!(joint.move_by_business_days(1).unwrap(), date("2006-11-24"));
}

#[test]
fn middle_east_working_week_from_config() {
    let week = WorkingWeek::from_days([
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
    ]);
    let config = FactoryConfig::new()
        .with_working_week(week)
        .with_default_handler(HolidayHandlerType::ModifiedPreceding);
    let factory = CalculatorFactory::new(config).unwrap();

    let mut cal = factory.default_calculator("AE").unwrap();
    // Friday 2006-09-01: preceding Thursday is in August, so move forward
    assert_eq!(cal.set_start_date(date("2006-09-01")).unwrap(), date("2006-09-03"));
    assert_eq!(cal.move_by_tenor(Tenor::T_1W).unwrap(), date("2006-09-10"));
}

#[test]
fn registry_is_shared_across_threads() {
    let factory = Arc::new(CalculatorFactory::default());
    factory.register_holidays("UK", set(&["2006-08-28"])).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let factory = Arc::clone(&factory);
            thread::spawn(move || {
                if i % 2 == 0 {
                    factory
                        .register_holidays(format!("CAL{i}"), set(&["2006-12-25"]))
                        .unwrap();
                }
                let mut cal = factory.calculator("UK", "forward").unwrap();
                cal.set_start_date(date("2006-08-28")).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), date("2006-08-29"));
    }
    assert_eq!(
        factory.registry().calendar_names().unwrap(),
        vec!["CAL0", "CAL2", "UK"]
    );
}

#[test]
fn period_count_calculator_is_available() {
    use datecalc_core::period_count::PeriodCountBasis;

    let pcc = CalculatorFactory::global().period_count_calculator();
    assert_eq!(
        pcc.day_diff(date("2006-01-01"), date("2006-12-31"), PeriodCountBasis::Act365),
        364
    );
}
