//! `HolidayCalendar` trait and the `Holiday` result record.
//!
//! A holiday calendar knows which dates are holidays and what they are
//! called.  Everything else (business days, year listings, range listings)
//! is derived from [`HolidayCalendar::holiday_name`].

use crate::date::Date;
use crate::holiday_name::HolidayName;
use jph_core::errors::Result;

/// A holiday on a specific date, as produced by enumeration.
///
/// With the `serde` feature a holiday (de)serializes as the flat record
/// `{"year", "month", "day", "nameIndex"}`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "HolidayRecord", try_from = "HolidayRecord")
)]
pub struct Holiday {
    date: Date,
    name: HolidayName,
}

impl Holiday {
    /// Pair a date with its holiday name.
    pub fn new(date: Date, name: HolidayName) -> Self {
        Holiday { date, name }
    }

    /// The date of the holiday.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Year of the holiday.
    pub fn year(&self) -> u16 {
        self.date.year()
    }

    /// Month of the holiday (1–12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// Which holiday it is.
    pub fn name(&self) -> HolidayName {
        self.name
    }

    /// Stable name index (never 0 for a listed holiday).
    pub fn name_index(&self) -> u8 {
        self.name.index()
    }
}

/// Wire form of a [`Holiday`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct HolidayRecord {
    year: u16,
    month: u8,
    day: u8,
    name_index: u8,
}

#[cfg(feature = "serde")]
impl From<Holiday> for HolidayRecord {
    fn from(h: Holiday) -> Self {
        HolidayRecord {
            year: h.year(),
            month: h.month(),
            day: h.day(),
            name_index: h.name_index(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<HolidayRecord> for Holiday {
    type Error = jph_core::errors::Error;

    fn try_from(record: HolidayRecord) -> Result<Self> {
        let date = Date::from_ymd(record.year, record.month, record.day)?;
        let name = HolidayName::try_from(record.name_index)?;
        if !name.is_holiday() {
            return Err(jph_core::errors::Error::InvalidArgument(format!(
                "holiday record for {date} has name index 0"
            )));
        }
        Ok(Holiday::new(date, name))
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}

/// A national holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Resolve `date` to its holiday name, [`HolidayName::None`] if it is an
    /// ordinary day.
    ///
    /// # Errors
    /// Returns an error if the calendar has no rules for the date's year.
    fn holiday_name(&self, date: Date) -> Result<HolidayName>;

    /// Return `true` if `date` is a holiday.  Unsupported years are never
    /// holidays.
    fn is_holiday(&self, date: Date) -> bool {
        matches!(self.holiday_name(date), Ok(name) if name.is_holiday())
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// List the holidays of `year` in calendar order, stopping once
    /// `max_results` entries have been collected.
    ///
    /// Reaching the limit is not an error; the list is simply shorter.
    ///
    /// # Errors
    /// Returns an error if the year is not supported by the calendar.
    fn holiday_list(&self, year: u16, max_results: usize) -> Result<Vec<Holiday>> {
        let first = Date::from_ymd(year, 1, 1)?;
        let last = Date::from_ymd(year, 12, 31)?;
        let mut holidays = Vec::new();
        for date in first.iter_through(last) {
            let name = self.holiday_name(date)?;
            if !name.is_holiday() {
                continue;
            }
            if holidays.len() == max_results {
                tracing::debug!(
                    calendar = self.name(),
                    year,
                    max_results,
                    stopped_at = %date,
                    "holiday list truncated"
                );
                break;
            }
            holidays.push(Holiday::new(date, name));
        }
        Ok(holidays)
    }

    /// List the holidays in the inclusive range `[from, to]`.
    ///
    /// # Errors
    /// Returns an error if any date in the range lies in an unsupported year.
    fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for date in from.iter_through(to) {
            let name = self.holiday_name(date)?;
            if name.is_holiday() {
                holidays.push(Holiday::new(date, name));
            }
        }
        Ok(holidays)
    }
}
