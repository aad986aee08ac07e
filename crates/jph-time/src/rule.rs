//! Range-scoped holiday rules.
//!
//! A [`HolidayRule`] pairs a [`HolidayName`] with a [`DateRule`] (how to find
//! the day within a year) and a [`YearSpan`] (the years the rule is law).
//! Rules are plain `Copy` data so that calendars can keep them in `static`
//! tables.

use crate::date::{is_nth_monday, Date};
use crate::equinox::Equinox;
use crate::holiday_name::HolidayName;
use crate::month::Month;
use crate::weekday::Weekday;

/// Inclusive range of years during which a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearSpan {
    /// First year the rule applies.
    pub first: u16,
    /// Last year the rule applies.
    pub last: u16,
}

impl YearSpan {
    /// No bounds.
    pub const ALWAYS: YearSpan = YearSpan {
        first: u16::MIN,
        last: u16::MAX,
    };

    /// From `first` onward.
    pub const fn since(first: u16) -> Self {
        YearSpan {
            first,
            last: u16::MAX,
        }
    }

    /// Up to and including `last`.
    pub const fn through(last: u16) -> Self {
        YearSpan {
            first: u16::MIN,
            last,
        }
    }

    /// From `first` through `last`.
    pub const fn between(first: u16, last: u16) -> Self {
        YearSpan { first, last }
    }

    /// Return `true` if `year` lies in the span.
    pub fn contains(&self, year: u16) -> bool {
        (self.first..=self.last).contains(&year)
    }
}

/// How a rule picks its day within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRule {
    /// Same month and day every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The `n`-th Monday of a month, counted in 7-day blocks.
    NthMonday {
        /// Month of the holiday.
        month: Month,
        /// Block number (2 = days 8–14, 3 = days 15–21).
        n: u8,
    },
    /// The computed equinox day.
    Equinox(Equinox),
}

/// Coarse classification used by the per-class predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleClass {
    /// A date fixed by law with no later move.
    FixedDate,
    /// A moving Monday, or a fixed date later replaced by one.
    VariableDate,
    /// An equinox day.
    Equinox,
}

/// A named, year-scoped holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    /// Name reported when the rule matches.
    pub name: HolidayName,
    /// How the day is found.
    pub date: DateRule,
    /// Years in which the rule is in force.
    pub years: YearSpan,
    /// Which per-class predicate reports the rule.
    pub class: RuleClass,
}

impl HolidayRule {
    /// A fixed-date rule.
    pub const fn fixed(month: Month, day: u8, years: YearSpan, name: HolidayName) -> Self {
        HolidayRule {
            name,
            date: DateRule::Fixed { month, day },
            years,
            class: RuleClass::FixedDate,
        }
    }

    /// A fixed date that was later replaced by a moving Monday.
    pub const fn legacy_fixed(month: Month, day: u8, years: YearSpan, name: HolidayName) -> Self {
        HolidayRule {
            name,
            date: DateRule::Fixed { month, day },
            years,
            class: RuleClass::VariableDate,
        }
    }

    /// An `n`-th Monday rule.
    pub const fn nth_monday(month: Month, n: u8, years: YearSpan, name: HolidayName) -> Self {
        HolidayRule {
            name,
            date: DateRule::NthMonday { month, n },
            years,
            class: RuleClass::VariableDate,
        }
    }

    /// An equinox rule in force for every year the formula covers.
    pub const fn equinox(equinox: Equinox, name: HolidayName) -> Self {
        HolidayRule {
            name,
            date: DateRule::Equinox(equinox),
            years: YearSpan::ALWAYS,
            class: RuleClass::Equinox,
        }
    }

    /// Return `true` if the rule is law in `year`.
    pub fn is_active(&self, year: u16) -> bool {
        self.years.contains(year)
    }

    /// Return `true` if the rule is in force and designates `date`.
    pub fn matches(&self, date: Date) -> bool {
        if !self.is_active(date.year()) {
            return false;
        }
        match self.date {
            DateRule::Fixed { month, day } => date.month() == month.number() && date.day() == day,
            DateRule::NthMonday { month, n } => {
                date.month() == month.number()
                    && is_nth_monday(date.year(), date.month(), date.day(), n)
            }
            DateRule::Equinox(equinox) => {
                date.month() == equinox.month() && Some(date.day()) == equinox.day_in(date.year())
            }
        }
    }

    /// The date the rule designates in `year`, if it is in force that year.
    pub fn observed_on(&self, year: u16) -> Option<Date> {
        if !self.is_active(year) {
            return None;
        }
        match self.date {
            DateRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day).ok(),
            DateRule::NthMonday { month, n } => {
                Date::nth_weekday(n, Weekday::Monday, year, month.number()).ok()
            }
            DateRule::Equinox(equinox) => {
                let day = equinox.day_in(year)?;
                Date::from_ymd(year, equinox.month(), day).ok()
            }
        }
    }
}
