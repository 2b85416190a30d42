//! Error types for the sambat-calendar crate.

/// Error type for all fallible operations in the sambat-calendar crate.
///
/// `UnsupportedYear` is the hard failure raised whenever an almanac lookup
/// leaves the supported range; it means the table needs extending, not that
/// the caller typed something wrong. The other variants reject malformed
/// month/day values when a [`BsDate`](crate::BsDate) is built strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a BS year is outside `BS_MIN_YEAR..=BS_MAX_YEAR`.
    #[error("BS year {year} not supported (must be {min}..={max})", min = crate::BS_MIN_YEAR, max = crate::BS_MAX_YEAR)]
    UnsupportedYear {
        /// The year that has no almanac entry.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given BS month.
    #[error("invalid day: {day} for {year}/{month:02} (max {max_day})")]
    InvalidDay {
        /// The year of the rejected date.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The length of that month in the almanac.
        max_day: u8,
    },
}
