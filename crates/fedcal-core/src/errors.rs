//! Error types for fedcal.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  Invalid
//! input is always rejected, never clamped or silently corrected, and an
//! error never leaves anything behind that could affect a later call.

use thiserror::Error;

/// The top-level error type used throughout fedcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date could not be constructed: the year, month or day lies outside
    /// the calendar or outside the supported date range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A range query was given an end that precedes its start.
    #[error("invalid range: end {end} precedes start {start}")]
    InvalidRange {
        /// Start of the requested range.
        start: String,
        /// End of the requested range.
        end: String,
    },

    /// Text could not be parsed into the requested value.
    #[error("parse error: {0}")]
    Parse(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),
}

/// Shorthand `Result` type used throughout fedcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fedcal_core::{ensure, errors::Error};
/// fn nth(n: u8) -> fedcal_core::errors::Result<u8> {
///     ensure!(n >= 1, "n must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(nth(1).is_ok());
/// assert!(matches!(nth(0), Err(Error::Precondition(_))));
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

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fedcal_core::{ensure_post, errors::Error};
/// fn count(items: &[u8]) -> fedcal_core::errors::Result<usize> {
///     let n = items.len();
///     ensure_post!(n == 10, "expected 10 items, got {n}");
///     Ok(n)
/// }
/// assert!(count(&[0; 10]).is_ok());
/// assert!(matches!(count(&[0; 3]), Err(Error::Postcondition(_))));
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
