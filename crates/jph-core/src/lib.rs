//! # jph-core
//!
//! Error definitions shared across the jpholiday workspace.
//!
//! This crate holds the pieces every other crate needs: the [`Error`] enum,
//! the [`Result`] alias, and the `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
