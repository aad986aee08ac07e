//! Error types for the jpholiday crates.
//!
//! Every fallible operation in the workspace reports through the single
//! `thiserror`-derived [`Error`] enum.  The `ensure!` macro is the shorthand
//! for a precondition check with an early return.

use thiserror::Error;

/// The top-level error type used throughout the jpholiday crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Malformed calendar date (bad month, day past the end of the month, ...).
    #[error("date error: {0}")]
    Date(String),

    /// A well-formed date whose year the holiday rules do not cover.
    #[error("year {year} outside supported range [{min}, {max}]")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: u16,
        /// Last supported year.
        max: u16,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` if the error only concerns the supported year window,
    /// i.e. the date itself was well formed.
    pub fn is_year_out_of_range(&self) -> bool {
        matches!(self, Error::YearOutOfRange { .. })
    }
}

/// Shorthand `Result` type used throughout the jpholiday crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jph_core::{ensure, errors::Error};
/// fn month(m: u8) -> jph_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(4).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: i32) -> Result<i32> {
        ensure!(n >= 0, "n must be non-negative, got {n}");
        Ok(n)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(-1),
            Err(Error::Precondition("n must be non-negative, got -1".into()))
        );
    }

    #[test]
    fn year_out_of_range_message() {
        let e = Error::YearOutOfRange {
            year: 1999,
            min: 2000,
            max: 2030,
        };
        assert!(e.is_year_out_of_range());
        assert_eq!(e.to_string(), "year 1999 outside supported range [2000, 2030]");
        assert!(!Error::Date("bad".into()).is_year_out_of_range());
    }
}
