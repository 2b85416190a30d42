//! Bikram Sambat calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::almanac::{self, days_in_month};
use crate::convert::{bs_to_civil, civil_date_to_bs};
use crate::error::CalendarError;
use crate::parse::parse_bs_date;

/// A date in the Bikram Sambat calendar.
///
/// Ordering is lexicographic on `(year, month, day)`. A value built with
/// [`BsDate::new`] is always backed by the almanac; [`BsDate::from_parts`]
/// keeps the raw triple and leaves validation to [`BsDate::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BsDate {
    year: i32,
    month: u8,
    day: u8,
}

impl BsDate {
    /// Creates a `BsDate`, checking it against the almanac.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedYear`] if `year` has no almanac
    /// entry, [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`CalendarError::InvalidDay`] if `day` exceeds the month length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `BsDate` without consulting the almanac.
    pub const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12 for a valid date).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if the almanac backs this date. Never fails.
    pub fn is_valid(self) -> bool {
        Self::new(self.year, self.month, self.day).is_ok()
    }

    /// Returns the Gregorian civil date for this BS date.
    ///
    /// # Errors
    ///
    /// See [`bs_to_civil`].
    pub fn to_civil(self) -> Result<NaiveDate, CalendarError> {
        bs_to_civil(self)
    }

    /// Returns the weekday, 0 = Sunday through 6 = Saturday.
    ///
    /// # Errors
    ///
    /// See [`bs_to_civil`].
    pub fn weekday(self) -> Result<u8, CalendarError> {
        use chrono::Datelike;
        Ok(self.to_civil()?.weekday().num_days_from_sunday() as u8)
    }

    /// Moves the date by `days` whole days, forwards or backwards.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedYear`] if the result leaves the
    /// almanac, or any error [`BsDate::new`] would report for `self`.
    pub fn add_days(self, days: i32) -> Result<Self, CalendarError> {
        let checked = Self::new(self.year, self.month, self.day)?;
        let offset = almanac::day_offset(checked.year, checked.month, checked.day)?;
        let target = offset.checked_add(days).ok_or(CalendarError::UnsupportedYear {
            year: if days < 0 {
                almanac::BS_MIN_YEAR - 1
            } else {
                almanac::BS_MAX_YEAR + 1
            },
        })?;
        let (year, month, day) = almanac::locate(target)?;
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for BsDate {
    /// Formats as `YYYY/MM/DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BsDate {
    type Err = ParseBsDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bs_date(s).ok_or_else(|| ParseBsDateError {
            input: s.to_string(),
        })
    }
}

impl TryFrom<NaiveDate> for BsDate {
    type Error = CalendarError;

    fn try_from(civil: NaiveDate) -> Result<Self, Self::Error> {
        civil_date_to_bs(civil)
    }
}

/// Returned by `BsDate::from_str` when the text is not a valid BS date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid BS date: {input:?}")]
pub struct ParseBsDateError {
    input: String,
}
