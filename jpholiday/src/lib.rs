//! # jpholiday
//!
//! Japanese national holidays (国民の祝日) for the years 2000 to 2030.
//!
//! This crate is a **façade** over the workspace crates.  The free functions
//! in [`query`] take plain integers and never fail: invalid or unsupported
//! dates answer `false`, index 0, or the empty string.  Their `try_*`
//! counterparts report why a date was rejected.
//!
//! ## Quick start
//!
//! ```rust
//! assert!(jpholiday::is_holiday(2024, 1, 1));
//! assert_eq!(jpholiday::holiday_name(2024, 8, 12), "振替休日");
//! assert_eq!(jpholiday::holiday_name(2024, 6, 18), "");
//!
//! let holidays = jpholiday::list_holidays(2024, 20);
//! assert_eq!(holidays.len(), 20);
//! assert_eq!(holidays[0].to_string(), "2024-01-01 元日");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `Result` alias.
pub use jph_core as core;

/// Dates, rules, and the holiday calendar.
pub use jph_time as time;

/// Integer-typed holiday queries.
pub mod query;

pub use jph_core::{Error, Result};
pub use jph_time::{Date, Holiday, HolidayCalendar, HolidayName, Japan};
pub use query::{
    holiday_name, holiday_name_index, is_holiday, list_holidays, name_from_index,
    try_holiday_name, try_is_holiday, try_list_holidays, validate,
};
