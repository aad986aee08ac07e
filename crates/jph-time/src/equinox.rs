//! Vernal and autumnal equinox days.
//!
//! The equinox holidays are proclaimed each February for the following year.
//! For 2000–2099 the proclaimed dates follow the empirical linear formula
//!
//! ```text
//! day = trunc(C + 0.242194 × (year − 1980) − floor((year − 1980) / 4))
//! ```
//!
//! with `C = 20.8431` for March and `C = 23.2488` for September.

/// First year the linear formula is calibrated for.
pub const FORMULA_FIRST_YEAR: u16 = 2000;

/// Last year the linear formula is calibrated for.
pub const FORMULA_LAST_YEAR: u16 = 2099;

const VERNAL_CONSTANT: f64 = 20.8431;
const AUTUMNAL_CONSTANT: f64 = 23.2488;
const DRIFT_PER_YEAR: f64 = 0.242194;
const BASE_YEAR: u16 = 1980;

/// Which of the two equinoxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equinox {
    /// March equinox (春分).
    Vernal,
    /// September equinox (秋分).
    Autumnal,
}

impl Equinox {
    /// Month number the equinox falls in.
    pub const fn month(self) -> u8 {
        match self {
            Equinox::Vernal => 3,
            Equinox::Autumnal => 9,
        }
    }

    /// Day of the month of this equinox in `year`.
    ///
    /// Returns `None` outside the formula's calibrated window.
    pub fn day_in(self, year: u16) -> Option<u8> {
        if !(FORMULA_FIRST_YEAR..=FORMULA_LAST_YEAR).contains(&year) {
            return None;
        }
        let constant = match self {
            Equinox::Vernal => VERNAL_CONSTANT,
            Equinox::Autumnal => AUTUMNAL_CONSTANT,
        };
        let elapsed = year - BASE_YEAR;
        let leap_shift = elapsed / 4;
        let day = constant + DRIFT_PER_YEAR * f64::from(elapsed) - f64::from(leap_shift);
        // Positive and below 32 for every calibrated year, so `as` truncates.
        Some(day as u8)
    }
}

/// Day of March on which the vernal equinox falls in `year`.
pub fn vernal_equinox_day(year: u16) -> Option<u8> {
    Equinox::Vernal.day_in(year)
}

/// Day of September on which the autumnal equinox falls in `year`.
pub fn autumnal_equinox_day(year: u16) -> Option<u8> {
    Equinox::Autumnal.day_in(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Proclaimed dates, 2000–2030.
    const VERNAL: [u8; 31] = [
        20, 20, 21, 21, 20, 20, 21, 21, 20, 20, 21, 21, 20, 20, 21, 21, 20, 20, 21, 21, 20, 20,
        21, 21, 20, 20, 20, 21, 20, 20, 20,
    ];
    const AUTUMNAL: [u8; 31] = [
        23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 22, 23, 23, 23, 22, 23, 23, 23, 22, 23,
        23, 23, 22, 23, 23, 23, 22, 23, 23,
    ];

    #[test]
    fn golden_2000_2030() {
        for (i, year) in (2000..=2030u16).enumerate() {
            assert_eq!(vernal_equinox_day(year), Some(VERNAL[i]), "vernal {year}");
            assert_eq!(autumnal_equinox_day(year), Some(AUTUMNAL[i]), "autumnal {year}");
        }
    }

    #[test]
    fn known_autumnal_dates() {
        assert_eq!(autumnal_equinox_day(2020), Some(22));
        assert_eq!(autumnal_equinox_day(2021), Some(23));
        assert_eq!(autumnal_equinox_day(2022), Some(23));
        assert_eq!(autumnal_equinox_day(2023), Some(23));
        assert_eq!(autumnal_equinox_day(2024), Some(22));
    }

    #[test]
    fn outside_calibrated_window() {
        assert_eq!(vernal_equinox_day(1999), None);
        assert_eq!(autumnal_equinox_day(2100), None);
        assert!(vernal_equinox_day(2099).is_some());
    }

    #[test]
    fn months() {
        assert_eq!(Equinox::Vernal.month(), 3);
        assert_eq!(Equinox::Autumnal.month(), 9);
    }
}
