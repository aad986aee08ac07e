//! Property tests for date arithmetic and the Japan calendar.

use jph_time::{days_in_month, Date, HolidayCalendar, HolidayName, Japan, Weekday};
use proptest::prelude::*;

fn any_supported_date() -> impl Strategy<Value = Date> {
    (Japan::MIN_YEAR..=Japan::MAX_YEAR, 1u8..=12)
        .prop_flat_map(|(y, m)| (Just(y), Just(m), 1..=days_in_month(y, m)))
        .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn prev_and_next_are_inverse(d in any_supported_date()) {
        prop_assert_eq!(d.next_date().unwrap().previous_date().unwrap(), d);
        prop_assert_eq!(d.previous_date().unwrap().next_date().unwrap(), d);
    }

    #[test]
    fn queries_are_idempotent(d in any_supported_date()) {
        let cal = Japan;
        let first = cal.holiday_name(d);
        prop_assert_eq!(cal.holiday_name(d), first.clone());
        prop_assert_eq!(cal.is_holiday(d), matches!(first, Ok(n) if n.is_holiday()));
    }

    #[test]
    fn substitutes_are_mondays(d in any_supported_date()) {
        if Japan.holiday_name(d).unwrap() == HolidayName::SubstituteHoliday {
            prop_assert_eq!(d.weekday(), Weekday::Monday);
        }
    }

    #[test]
    fn unsupported_years_are_never_holidays(
        y in prop_oneof![1900u16..2000, 2031u16..=2199],
        m in 1u8..=12,
        d in 1u8..=28,
    ) {
        let date = Date::from_ymd(y, m, d).unwrap();
        prop_assert!(!Japan.is_holiday(date));
        prop_assert!(Japan.holiday_name(date).is_err());
        prop_assert!(!Japan.is_substitute_holiday(date));
    }

    #[test]
    fn listing_agrees_with_queries(year in Japan::MIN_YEAR..=Japan::MAX_YEAR) {
        let cal = Japan;
        let list = cal.holiday_list(year, usize::MAX).unwrap();
        let first = Date::from_ymd(year, 1, 1).unwrap();
        let last = Date::from_ymd(year, 12, 31).unwrap();
        let holidays = first.iter_through(last).filter(|d| cal.is_holiday(*d)).count();
        prop_assert_eq!(list.len(), holidays);
        for h in &list {
            prop_assert_eq!(cal.holiday_name(h.date()).unwrap(), h.name());
        }
    }
}
