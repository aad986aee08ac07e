//! `Date` type and proleptic Gregorian calendar arithmetic.
//!
//! A [`Date`] is a validated `(year, month, day)` triple.  Construction goes
//! through [`Date::from_ymd`], so a `Date` value always names a real day.
//!
//! # Representable range
//! * The representable range is 1900-01-01 to 2199-12-31.
//! * Holiday calendars narrow this further; see
//!   [`Japan::MIN_YEAR`](crate::calendars::japan::Japan::MIN_YEAR).

use crate::month::Month;
use crate::weekday::Weekday;
use jph_core::ensure;
use jph_core::errors::{Error, Result};

/// A calendar date in the proleptic Gregorian calendar.
///
/// Field order makes the derived ordering chronological.  With the `serde`
/// feature a date (de)serializes as `{"year", "month", "day"}` and
/// deserialization goes through [`Date::from_ymd`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawDate", try_from = "RawDate")
)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// First representable year.
    pub const MIN_YEAR: u16 = 1900;

    /// Last representable year.
    pub const MAX_YEAR: u16 = 2199;

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the year is not representable, the month is
    /// outside 1–12, or the day is outside `1..=days_in_month(year, month)`.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        // `from_ymd` guarantees 1..=12; January is unreachable as a fallback.
        Month::from_number(self.month).unwrap_or(Month::January)
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // `day_of_week` is always in 0..=6; Sunday is unreachable as a fallback.
        Weekday::from_index(day_of_week(self.year, self.month, self.day))
            .unwrap_or(Weekday::Sunday)
    }

    /// Return `true` if this is the `n`-th Monday of its month.
    pub fn is_nth_monday(&self, n: u8) -> bool {
        is_nth_monday(self.year, self.month, self.day, n)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Return the day before this one, rolling over month and year ends.
    ///
    /// # Errors
    /// Returns an error when called on the first representable day.
    pub fn previous_date(self) -> Result<Self> {
        let Date { year, month, day } = self;
        if day > 1 {
            return Ok(Date { day: day - 1, ..self });
        }
        if month > 1 {
            let m = month - 1;
            return Ok(Date {
                year,
                month: m,
                day: days_in_month(year, m),
            });
        }
        ensure!(
            year > Self::MIN_YEAR,
            "no date before {year}-01-01 is representable"
        );
        Ok(Date {
            year: year - 1,
            month: 12,
            day: 31,
        })
    }

    /// Return the day after this one, rolling over month and year ends.
    ///
    /// # Errors
    /// Returns an error when called on the last representable day.
    pub fn next_date(self) -> Result<Self> {
        let Date { year, month, day } = self;
        if day < days_in_month(year, month) {
            return Ok(Date { day: day + 1, ..self });
        }
        if month < 12 {
            return Ok(Date {
                year,
                month: month + 1,
                day: 1,
            });
        }
        ensure!(
            year < Self::MAX_YEAR,
            "no date after {year}-12-31 is representable"
        );
        Ok(Date {
            year: year + 1,
            month: 1,
            day: 1,
        })
    }

    /// Iterate over every date from `self` to `end`, both inclusive.
    ///
    /// Yields nothing if `end < self`.
    pub fn iter_through(self, end: Date) -> impl Iterator<Item = Date> {
        std::iter::successors(Some(self), |d| d.next_date().ok()).take_while(move |d| *d <= end)
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Monday, 2024, 7)` returns the
    /// third Monday of July 2024 (2024-07-15).
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `n` is zero, and
    /// [`Error::Date`] if the month is invalid or has fewer than `n` such
    /// weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().index();
        let skip = (weekday.index() + 7 - first_wd) % 7;
        let day = 1 + u16::from(skip) + 7 * (u16::from(n) - 1);
        if day > u16::from(days_in_month(year, month)) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Serialization ───────────────────────────────────────────────────────────

/// Unvalidated wire form of a [`Date`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDate {
    year: u16,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for Date {
    type Error = Error;

    fn try_from(raw: RawDate) -> Result<Self> {
        Date::from_ymd(raw.year, raw.month, raw.day)
    }
}

#[cfg(feature = "serde")]
impl From<Date> for RawDate {
    fn from(d: Date) -> Self {
        RawDate {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year, or 0 for a month outside 1–12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Day of the week by Zeller's congruence, 0 = Sunday … 6 = Saturday.
///
/// January and February count as months 13 and 14 of the previous year.
/// The arguments are not validated; pass a real date.
pub fn day_of_week(year: u16, month: u8, day: u8) -> u8 {
    let (mut y, mut m) = (i32::from(year), i32::from(month));
    if m < 3 {
        m += 12;
        y -= 1;
    }
    let h = (i32::from(day) + 13 * (m + 1) / 5 + y + y / 4 - y / 100 + y / 400).rem_euclid(7);
    // Zeller yields 0 = Saturday.
    ((h + 6) % 7) as u8
}

/// Return `true` if the date is a Monday lying in the `n`-th 7-day block of
/// its month (days 1–7 are block 1, 8–14 block 2, …).
///
/// Only one day per month can satisfy this for a given `n`.
pub fn is_nth_monday(year: u16, month: u8, day: u8, n: u8) -> bool {
    n >= 1 && day >= 1 && (day - 1) / 7 == n - 1 && day_of_week(year, month, day) == 1
}

/// Shorthand for [`is_nth_monday`] with `n = 2`.
pub fn is_second_monday(year: u16, month: u8, day: u8) -> bool {
    is_nth_monday(year, month, day, 2)
}

/// Shorthand for [`is_nth_monday`] with `n = 3`.
pub fn is_third_monday(year: u16, month: u8, day: u8) -> bool {
    is_nth_monday(year, month, day, 3)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
