//! End-to-end checks of the integer-typed API.

use jpholiday::{
    holiday_name, holiday_name_index, is_holiday, list_holidays, name_from_index,
    try_holiday_name, Holiday, HolidayName,
};
use proptest::prelude::*;

#[test]
fn test_new_years_day() {
    assert!(is_holiday(2024, 1, 1));
    assert_eq!(holiday_name(2024, 1, 1), "元日");
    assert_eq!(holiday_name_index(2024, 1, 1), 1);
}

#[test]
fn test_autumnal_equinox_2024() {
    assert_eq!(jpholiday::time::autumnal_equinox_day(2024), Some(22));
    assert_eq!(holiday_name(2024, 9, 22), "秋分の日");
    // The equinox fell on a Sunday, so the Monday is a substitute.
    assert!(is_holiday(2024, 9, 23));
    assert_eq!(holiday_name(2024, 9, 23), "振替休日");
}

#[test]
fn test_mountain_day_substitute() {
    assert!(is_holiday(2024, 8, 12));
    assert_eq!(holiday_name(2024, 8, 12), "振替休日");
    assert_eq!(holiday_name_index(2024, 8, 12), 18);
}

#[test]
fn test_marine_day_cutover() {
    assert_eq!(holiday_name(2002, 7, 20), "海の日");
    assert_eq!(holiday_name(2003, 7, 21), "海の日");
    assert_eq!(holiday_name(2003, 7, 20), "");
}

#[test]
fn test_range_boundaries() {
    assert!(!is_holiday(1999, 1, 1));
    assert_eq!(holiday_name(1999, 1, 1), "");
    assert!(is_holiday(2000, 1, 1));
    assert!(is_holiday(2030, 11, 23));
    assert!(!is_holiday(2031, 1, 1));
    assert_eq!(holiday_name(2031, 1, 1), "");
    assert_eq!(
        try_holiday_name(2031, 1, 1).unwrap_err().to_string(),
        "year 2031 outside supported range [2000, 2030]"
    );
}

#[test]
fn test_list_holidays_2024() {
    let list = list_holidays(2024, 20);
    assert_eq!(list.len(), 20);
    assert!(list.windows(2).all(|w| w[0].date() < w[1].date()));
    assert_eq!((list[0].month(), list[0].day()), (1, 1));
    assert_eq!(list.iter().filter(|h| h.name_index() == 18).count(), 5);
    assert_eq!(list_holidays(2024, 100).len(), 22);
    assert!(list_holidays(2024, 0).is_empty());
    assert!(list_holidays(2031, 20).is_empty());
}

#[test]
fn test_name_table() {
    assert_eq!(name_from_index(0), "");
    assert_eq!(name_from_index(17), "勤労感謝の日");
    assert_eq!(name_from_index(19), "");
    for name in HolidayName::ALL {
        assert_eq!(name_from_index(name.index()), name.as_str());
    }
}

#[test]
fn test_holiday_record_round_trip() {
    let list = list_holidays(2024, 30);
    let json = serde_json::to_string(&list).unwrap();
    assert!(
        json.starts_with(r#"[{"year":2024,"month":1,"day":1,"nameIndex":1},"#),
        "{json}"
    );
    let back: Vec<Holiday> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
    for h in &back {
        assert_eq!(holiday_name_index(2024, h.month().into(), h.day().into()), h.name_index());
    }
    assert!(serde_json::from_str::<Holiday>(r#"{"year":2024,"month":2,"day":31,"nameIndex":3}"#).is_err());
}

proptest! {
    #[test]
    fn outside_window_never_holiday(
        year in prop_oneof![i32::MIN..2000, 2031..=i32::MAX],
        month in -5i32..20,
        day in -5i32..40,
    ) {
        prop_assert!(!is_holiday(year, month, day));
        prop_assert_eq!(holiday_name(year, month, day), "");
        prop_assert_eq!(holiday_name_index(year, month, day), 0);
    }

    #[test]
    fn repeated_queries_agree(year in 2000i32..=2030, month in 1i32..=12, day in 1i32..=31) {
        let index = holiday_name_index(year, month, day);
        prop_assert_eq!(holiday_name_index(year, month, day), index);
        prop_assert_eq!(is_holiday(year, month, day), index != 0);
        prop_assert_eq!(holiday_name(year, month, day), name_from_index(index));
    }
}
