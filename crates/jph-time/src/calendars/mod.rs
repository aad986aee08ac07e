//! Concrete holiday calendars.

/// Japanese national holidays (国民の祝日).
pub mod japan;
