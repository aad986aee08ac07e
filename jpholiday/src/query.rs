//! Integer-typed holiday queries.
//!
//! Arguments are `i32` so that callers can pass whatever they parsed without
//! pre-checking.  Validation order is: year window first, then month, then
//! day-of-month.

use jph_core::errors::{Error, Result};
use jph_time::{Date, Holiday, HolidayCalendar, HolidayName, Japan};

/// Turn an integer triple into a [`Date`] the Japan calendar answers for.
///
/// # Errors
/// * [`Error::YearOutOfRange`] if `year` is outside 2000–2030.
/// * [`Error::Date`] if `month` or `day` does not name a real day.
pub fn validate(year: i32, month: i32, day: i32) -> Result<Date> {
    let year = checked_year(year)?;
    let month = u8::try_from(month)
        .map_err(|_| Error::Date(format!("month {month} out of range [1, 12]")))?;
    let day = u8::try_from(day)
        .map_err(|_| Error::Date(format!("day {day} out of range for {year}-{month:02}")))?;
    Date::from_ymd(year, month, day)
}

/// Resolve a date to its holiday name.
///
/// # Errors
/// See [`validate`].
pub fn try_holiday_name(year: i32, month: i32, day: i32) -> Result<HolidayName> {
    let date = validate(year, month, day)?;
    Japan.holiday_name(date)
}

/// Strict form of [`is_holiday`].
///
/// # Errors
/// See [`validate`].
pub fn try_is_holiday(year: i32, month: i32, day: i32) -> Result<bool> {
    try_holiday_name(year, month, day).map(HolidayName::is_holiday)
}

/// Strict form of [`list_holidays`].
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] if `year` is outside 2000–2030.
pub fn try_list_holidays(year: i32, max_results: usize) -> Result<Vec<Holiday>> {
    let year = checked_year(year)?;
    Japan.holiday_list(year, max_results)
}

/// Return `true` if the date is a national or substitute holiday.
///
/// `false` for unsupported years and invalid dates.
pub fn is_holiday(year: i32, month: i32, day: i32) -> bool {
    holiday_name_index(year, month, day) != 0
}

/// Japanese name of the holiday on the date, `""` if there is none.
///
/// Substitute holidays are named `"振替休日"`.
pub fn holiday_name(year: i32, month: i32, day: i32) -> &'static str {
    lenient(year, month, day).as_str()
}

/// Stable name index of the holiday on the date, 0 if there is none.
pub fn holiday_name_index(year: i32, month: i32, day: i32) -> u8 {
    lenient(year, month, day).index()
}

/// Holidays of `year` in calendar order, at most `max_results` of them.
///
/// Empty for an unsupported year.
pub fn list_holidays(year: i32, max_results: usize) -> Vec<Holiday> {
    try_list_holidays(year, max_results).unwrap_or_else(|e| {
        tracing::trace!(year, error = %e, "holiday listing rejected");
        Vec::new()
    })
}

/// Display name for a stable index; `""` for 0 and unknown indices.
pub fn name_from_index(index: u8) -> &'static str {
    jph_time::name_from_index(index)
}

fn lenient(year: i32, month: i32, day: i32) -> HolidayName {
    try_holiday_name(year, month, day).unwrap_or_else(|e| {
        tracing::trace!(year, month, day, error = %e, "holiday query rejected");
        HolidayName::None
    })
}

fn checked_year(year: i32) -> Result<u16> {
    u16::try_from(year)
        .ok()
        .filter(|&y| Japan::is_supported_year(y))
        .ok_or(Error::YearOutOfRange {
            year,
            min: Japan::MIN_YEAR,
            max: Japan::MAX_YEAR,
        })
}
