//! Japan national holiday calendar.
//!
//! Based on the Act on National Holidays (国民の祝日に関する法律, Act No. 178
//! of 1948) as amended up to the 2020 renaming of Sports Day.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::equinox::Equinox;
use crate::holiday_name::HolidayName;
use crate::month::Month;
use crate::rule::{HolidayRule, RuleClass, YearSpan};
use crate::weekday::Weekday;
use jph_core::errors::{Error, Result};

/// Japan calendar.
///
/// The following holidays are observed between 2000 and 2030:
/// * New Year's Day (Jan 1)
/// * Coming of Age Day (2nd Monday in January)
/// * National Foundation Day (Feb 11)
/// * Emperor's Birthday (Feb 23 since 2020; Dec 23 until 2018)
/// * Vernal Equinox Day (computed, Mar 20–21)
/// * Showa Day (Apr 29)
/// * Constitution Memorial Day (May 3)
/// * Greenery Day (May 4)
/// * Children's Day (May 5)
/// * Marine Day (Jul 20 until 2002; 3rd Monday in July since 2003)
/// * Mountain Day (Aug 11, since 2016)
/// * Respect for the Aged Day (Sep 15 until 2002; 3rd Monday in September
///   since 2003)
/// * Autumnal Equinox Day (computed, Sep 22–23)
/// * Health and Sports Day (2nd Monday in October, until 2019), renamed
///   Sports Day from 2020
/// * Culture Day (Nov 3)
/// * Labor Thanksgiving Day (Nov 23)
///
/// A Monday is a substitute holiday (*furikae kyūjitsu*) when the Sunday
/// before it is a holiday, or when that Sunday is not but the Saturday
/// before it is.  Only Mondays are ever substitutes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

/// The rule table, in calendar order.
///
/// No two rules active in the same year designate the same date.
static RULES: [HolidayRule; 20] = [
    HolidayRule::fixed(Month::January, 1, YearSpan::ALWAYS, HolidayName::NewYearsDay),
    HolidayRule::nth_monday(Month::January, 2, YearSpan::ALWAYS, HolidayName::ComingOfAgeDay),
    HolidayRule::fixed(
        Month::February,
        11,
        YearSpan::ALWAYS,
        HolidayName::NationalFoundationDay,
    ),
    HolidayRule::fixed(
        Month::February,
        23,
        YearSpan::since(2020),
        HolidayName::EmperorsBirthday,
    ),
    HolidayRule::equinox(Equinox::Vernal, HolidayName::VernalEquinoxDay),
    HolidayRule::fixed(Month::April, 29, YearSpan::ALWAYS, HolidayName::ShowaDay),
    HolidayRule::fixed(
        Month::May,
        3,
        YearSpan::ALWAYS,
        HolidayName::ConstitutionMemorialDay,
    ),
    HolidayRule::fixed(Month::May, 4, YearSpan::ALWAYS, HolidayName::GreeneryDay),
    HolidayRule::fixed(Month::May, 5, YearSpan::ALWAYS, HolidayName::ChildrensDay),
    HolidayRule::legacy_fixed(Month::July, 20, YearSpan::through(2002), HolidayName::MarineDay),
    HolidayRule::nth_monday(Month::July, 3, YearSpan::since(2003), HolidayName::MarineDay),
    HolidayRule::fixed(Month::August, 11, YearSpan::since(2016), HolidayName::MountainDay),
    HolidayRule::legacy_fixed(
        Month::September,
        15,
        YearSpan::through(2002),
        HolidayName::RespectForTheAgedDay,
    ),
    HolidayRule::nth_monday(
        Month::September,
        3,
        YearSpan::since(2003),
        HolidayName::RespectForTheAgedDay,
    ),
    HolidayRule::equinox(Equinox::Autumnal, HolidayName::AutumnalEquinoxDay),
    HolidayRule::nth_monday(
        Month::October,
        2,
        YearSpan::between(2000, 2019),
        HolidayName::HealthAndSportsDay,
    ),
    HolidayRule::nth_monday(Month::October, 2, YearSpan::since(2020), HolidayName::SportsDay),
    HolidayRule::fixed(Month::November, 3, YearSpan::ALWAYS, HolidayName::CultureDay),
    HolidayRule::fixed(
        Month::November,
        23,
        YearSpan::ALWAYS,
        HolidayName::LaborThanksgivingDay,
    ),
    HolidayRule::fixed(
        Month::December,
        23,
        YearSpan::through(2018),
        HolidayName::EmperorsBirthday,
    ),
];

impl Japan {
    /// First year the calendar answers for.
    pub const MIN_YEAR: u16 = 2000;

    /// Last year the calendar answers for.
    pub const MAX_YEAR: u16 = 2030;

    /// The static rule table.
    pub fn rules() -> &'static [HolidayRule] {
        &RULES
    }

    /// Return `true` if `year` lies in `[MIN_YEAR, MAX_YEAR]`.
    pub fn is_supported_year(year: u16) -> bool {
        (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year)
    }

    /// Reject years outside the supported window.
    ///
    /// # Errors
    /// Returns [`Error::YearOutOfRange`].
    pub fn check_year(year: u16) -> Result<()> {
        if Self::is_supported_year(year) {
            Ok(())
        } else {
            Err(Error::YearOutOfRange {
                year: i32::from(year),
                min: Self::MIN_YEAR,
                max: Self::MAX_YEAR,
            })
        }
    }

    /// Name of the first regular rule designating `date`, ignoring
    /// substitutes.  [`HolidayName::None`] outside the supported years.
    pub fn regular_holiday(&self, date: Date) -> HolidayName {
        self.matching_rule(date, |_| true)
            .map_or(HolidayName::None, |rule| rule.name)
    }

    /// Return `true` if a fixed-date, moving-Monday, or equinox rule
    /// designates `date`.
    pub fn is_regular_holiday(&self, date: Date) -> bool {
        self.regular_holiday(date).is_holiday()
    }

    /// Return `true` if a fixed-date rule designates `date`.
    pub fn is_fixed_date_holiday(&self, date: Date) -> bool {
        self.matching_rule(date, |class| class == RuleClass::FixedDate)
            .is_some()
    }

    /// Return `true` if a moving-Monday rule designates `date`, or a fixed
    /// date that a moving Monday later replaced (Marine Day and Respect for
    /// the Aged Day before 2003).
    pub fn is_variable_date_holiday(&self, date: Date) -> bool {
        self.matching_rule(date, |class| class == RuleClass::VariableDate)
            .is_some()
    }

    /// Return `true` if `date` is Vernal or Autumnal Equinox Day.
    pub fn is_equinox_holiday(&self, date: Date) -> bool {
        self.matching_rule(date, |class| class == RuleClass::Equinox)
            .is_some()
    }

    /// Return `true` if `date` is a substitute holiday.
    ///
    /// Looks back at most two days and only at regular holidays, so the
    /// check never recurses.
    pub fn is_substitute_holiday(&self, date: Date) -> bool {
        if !Self::is_supported_year(date.year()) || date.weekday() != Weekday::Monday {
            return false;
        }
        let Ok(prev) = date.previous_date() else {
            return false;
        };
        if self.is_regular_holiday(prev) {
            return true;
        }
        if prev.weekday() != Weekday::Sunday {
            return false;
        }
        prev.previous_date()
            .is_ok_and(|prev_prev| self.is_regular_holiday(prev_prev))
    }

    /// Dates in `year` designated by more than one active rule.
    ///
    /// # Errors
    /// Returns [`Error::YearOutOfRange`] for an unsupported year.
    pub fn rule_conflicts(&self, year: u16) -> Result<Vec<Date>> {
        Self::check_year(year)?;
        let mut dates: Vec<Date> = RULES
            .iter()
            .filter_map(|rule| rule.observed_on(year))
            .collect();
        dates.sort_unstable();
        let mut conflicts: Vec<Date> = dates
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
            .collect();
        conflicts.dedup();
        Ok(conflicts)
    }

    fn matching_rule(
        &self,
        date: Date,
        class: impl Fn(RuleClass) -> bool,
    ) -> Option<&'static HolidayRule> {
        if !Self::is_supported_year(date.year()) {
            return None;
        }
        RULES
            .iter()
            .find(|rule| class(rule.class) && rule.matches(date))
    }
}

impl HolidayCalendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    fn holiday_name(&self, date: Date) -> Result<HolidayName> {
        if let Err(e) = Self::check_year(date.year()) {
            tracing::trace!(%date, "year outside supported range");
            return Err(e);
        }
        if self.is_substitute_holiday(date) {
            tracing::trace!(%date, "substitute holiday");
            return Ok(HolidayName::SubstituteHoliday);
        }
        Ok(self.regular_holiday(date))
    }
}
