//! # jph-time
//!
//! Date arithmetic, holiday rules, and the Japan national holiday calendar.
//!
//! A query flows through date validation ([`Date::from_ymd`]), the rule
//! table ([`HolidayRule`]), the substitute-holiday lookback, and finally the
//! name table ([`HolidayName`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the `Holiday` record.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type and Gregorian arithmetic.
pub mod date;

/// Equinox day formulas.
pub mod equinox;

/// Holiday name table.
pub mod holiday_name;

/// `Month` — month of the year.
pub mod month;

/// Year-scoped holiday rules.
pub mod rule;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Holiday, HolidayCalendar};
pub use calendars::japan::Japan;
pub use date::{
    day_of_week, days_in_month, is_leap_year, is_nth_monday, is_second_monday, is_third_monday,
    Date,
};
pub use equinox::{autumnal_equinox_day, vernal_equinox_day, Equinox};
pub use holiday_name::{name_from_index, HolidayName};
pub use month::Month;
pub use rule::{DateRule, HolidayRule, RuleClass, YearSpan};
pub use weekday::Weekday;
