//! Error types for the sambat-fiscal crate.

use sambat_calendar::CalendarError;

/// Error type for all fallible operations in the sambat-fiscal crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FiscalError {
    /// An almanac lookup for a window boundary failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a fiscal-year code is not of the form `YYYY/YY` with the
    /// suffix naming the following year.
    #[error("invalid fiscal year code: {code:?} (expected e.g. \"2082/83\")")]
    InvalidCode {
        /// The rejected code.
        code: String,
    },
}
