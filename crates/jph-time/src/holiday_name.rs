//! The holiday name table.
//!
//! Every holiday resolves to one [`HolidayName`].  Its numeric index is part
//! of the public contract: index 0 means "not a holiday", the others are
//! stable across versions so that persisted results stay comparable.  With
//! the `serde` feature a name (de)serializes as that index.

use jph_core::errors::{Error, Result};

/// Name of a Japanese national holiday, or [`HolidayName::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u8", try_from = "u8")
)]
#[repr(u8)]
pub enum HolidayName {
    /// Not a holiday (0).
    #[default]
    None = 0,
    /// 元日 (New Year's Day).
    NewYearsDay = 1,
    /// 成人の日 (Coming of Age Day).
    ComingOfAgeDay = 2,
    /// 建国記念の日 (National Foundation Day).
    NationalFoundationDay = 3,
    /// 天皇誕生日 (Emperor's Birthday).
    EmperorsBirthday = 4,
    /// 春分の日 (Vernal Equinox Day).
    VernalEquinoxDay = 5,
    /// 昭和の日 (Showa Day).
    ShowaDay = 6,
    /// 憲法記念日 (Constitution Memorial Day).
    ConstitutionMemorialDay = 7,
    /// みどりの日 (Greenery Day).
    GreeneryDay = 8,
    /// こどもの日 (Children's Day).
    ChildrensDay = 9,
    /// 海の日 (Marine Day).
    MarineDay = 10,
    /// 山の日 (Mountain Day).
    MountainDay = 11,
    /// 敬老の日 (Respect for the Aged Day).
    RespectForTheAgedDay = 12,
    /// 秋分の日 (Autumnal Equinox Day).
    AutumnalEquinoxDay = 13,
    /// スポーツの日 (Sports Day), from 2020.
    SportsDay = 14,
    /// 体育の日 (Health and Sports Day), until 2019.
    HealthAndSportsDay = 15,
    /// 文化の日 (Culture Day).
    CultureDay = 16,
    /// 勤労感謝の日 (Labor Thanksgiving Day).
    LaborThanksgivingDay = 17,
    /// 振替休日 (substitute holiday).
    SubstituteHoliday = 18,
}

/// Display names indexed by [`HolidayName::index`].
const NAMES: [&str; 19] = [
    "",
    "元日",
    "成人の日",
    "建国記念の日",
    "天皇誕生日",
    "春分の日",
    "昭和の日",
    "憲法記念日",
    "みどりの日",
    "こどもの日",
    "海の日",
    "山の日",
    "敬老の日",
    "秋分の日",
    "スポーツの日",
    "体育の日",
    "文化の日",
    "勤労感謝の日",
    "振替休日",
];

const ENGLISH_NAMES: [&str; 19] = [
    "",
    "New Year's Day",
    "Coming of Age Day",
    "National Foundation Day",
    "Emperor's Birthday",
    "Vernal Equinox Day",
    "Showa Day",
    "Constitution Memorial Day",
    "Greenery Day",
    "Children's Day",
    "Marine Day",
    "Mountain Day",
    "Respect for the Aged Day",
    "Autumnal Equinox Day",
    "Sports Day",
    "Health and Sports Day",
    "Culture Day",
    "Labor Thanksgiving Day",
    "Substitute Holiday",
];

impl HolidayName {
    /// Every variant in index order.
    pub const ALL: [HolidayName; 19] = [
        HolidayName::None,
        HolidayName::NewYearsDay,
        HolidayName::ComingOfAgeDay,
        HolidayName::NationalFoundationDay,
        HolidayName::EmperorsBirthday,
        HolidayName::VernalEquinoxDay,
        HolidayName::ShowaDay,
        HolidayName::ConstitutionMemorialDay,
        HolidayName::GreeneryDay,
        HolidayName::ChildrensDay,
        HolidayName::MarineDay,
        HolidayName::MountainDay,
        HolidayName::RespectForTheAgedDay,
        HolidayName::AutumnalEquinoxDay,
        HolidayName::SportsDay,
        HolidayName::HealthAndSportsDay,
        HolidayName::CultureDay,
        HolidayName::LaborThanksgivingDay,
        HolidayName::SubstituteHoliday,
    ];

    /// Look a name up by its stable index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The stable index.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// `false` only for [`HolidayName::None`].
    pub fn is_holiday(self) -> bool {
        self != HolidayName::None
    }

    /// Japanese display name; empty for [`HolidayName::None`].
    pub fn as_str(self) -> &'static str {
        NAMES[usize::from(self.index())]
    }

    /// English name; empty for [`HolidayName::None`].
    pub fn english_name(self) -> &'static str {
        ENGLISH_NAMES[usize::from(self.index())]
    }
}

impl From<HolidayName> for u8 {
    fn from(name: HolidayName) -> u8 {
        name.index()
    }
}

impl TryFrom<u8> for HolidayName {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index).ok_or_else(|| {
            Error::InvalidArgument(format!("no holiday name with index {index}"))
        })
    }
}

impl std::fmt::Display for HolidayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an index to its display name, or `""` for 0 and unknown indices.
pub fn name_from_index(index: u8) -> &'static str {
    HolidayName::from_index(index).map_or("", HolidayName::as_str)
}
