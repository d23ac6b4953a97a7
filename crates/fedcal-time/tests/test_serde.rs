//! Serialization of configuration and results (requires `--features serde`).

#![cfg(feature = "serde")]

use fedcal_time::{
    resolve_holidays, CalendarDate, CalendarYear, Classification, FederalHoliday, HolidayEngine,
    RuleSet,
};

#[test]
fn engine_config_from_json() {
    let engine: HolidayEngine = serde_json::from_str(r#"{"rule_set":"legacy"}"#).unwrap();
    assert_eq!(engine.rule_set(), RuleSet::Legacy);
    assert!(serde_json::from_str::<HolidayEngine>(r#"{"rule_set":"julian"}"#).is_err());
}

#[test]
fn dates_serialize_as_iso_text() {
    let d = CalendarDate::from_ymd(2024, 11, 28).unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), r#""2024-11-28""#);
    assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-30""#).is_err());
}

#[test]
fn results_round_trip() {
    let c = Classification::Holiday(FederalHoliday::Thanksgiving);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(serde_json::from_str::<Classification>(&json).unwrap(), c);

    let year = resolve_holidays(2024).unwrap();
    let json = serde_json::to_string(&year).unwrap();
    assert_eq!(serde_json::from_str::<CalendarYear>(&json).unwrap(), year);
}

#[test]
fn edited_calendar_year_is_rejected() {
    let year = resolve_holidays(2024).unwrap();
    let good = serde_json::to_value(&year).unwrap();

    let mut wrong_year = good.clone();
    wrong_year["year"] = 1999.into();
    assert!(serde_json::from_value::<CalendarYear>(wrong_year).is_err());

    let mut swapped = good.clone();
    swapped["holidays"].as_array_mut().unwrap().swap(0, 9);
    assert!(serde_json::from_value::<CalendarYear>(swapped).is_err());

    let mut short = good.clone();
    short["holidays"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<CalendarYear>(short).is_err());

    let back: CalendarYear = serde_json::from_value(good).unwrap();
    assert_eq!(back.get(FederalHoliday::Christmas).date, year.get(FederalHoliday::Christmas).date);
}
