//! Fiscal-year windows.
//!
//! A fiscal year runs from Shrawan 1 (BS month 4) to the last day of Ashar
//! (BS month 3) of the following BS year. The boundary month is fixed.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sambat_calendar::{bs_to_civil, days_in_month, BsDate, CalendarError};

use crate::error::FiscalError;

/// BS month on whose first day every fiscal year starts.
pub const FISCAL_START_MONTH: u8 = 4;

/// Returns the BS year in which the fiscal year containing `date` started.
///
/// Months from [`FISCAL_START_MONTH`] onward belong to the fiscal year that
/// starts in the same BS year; earlier months belong to the previous one.
/// Saturates at `i32::MIN`; such a year is rejected by [`fiscal_year_of`].
pub fn fiscal_start_year(date: BsDate) -> i32 {
    if date.month() >= FISCAL_START_MONTH {
        date.year()
    } else {
        date.year().saturating_sub(1)
    }
}

/// A fiscal year with its BS boundaries and their civil images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearWindow {
    /// Display code, e.g. `2082/83`.
    pub code: String,
    /// First day, Shrawan 1 of the start year.
    pub start_bs: BsDate,
    /// Last day, the end of Ashar in the following year.
    pub end_bs: BsDate,
    /// Civil date of `start_bs`.
    pub start_ad: NaiveDate,
    /// Civil date of `end_bs`.
    pub end_ad: NaiveDate,
}

impl FiscalYearWindow {
    /// BS year the window starts in.
    pub fn start_year(&self) -> i32 {
        self.start_bs.year()
    }

    /// Returns `true` if `date` lies within the window, bounds included.
    pub fn contains(&self, date: BsDate) -> bool {
        self.start_bs <= date && date <= self.end_bs
    }

    /// Number of days in the window.
    pub fn days(&self) -> i64 {
        (self.end_ad - self.start_ad).num_days() + 1
    }
}

impl fmt::Display for FiscalYearWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.code, self.start_bs, self.end_bs)
    }
}

/// Builds the fiscal-year code for a start year: the start year, a slash,
/// and the last two digits of the following year.
pub fn fiscal_year_code(start_year: i32) -> String {
    format!("{start_year}/{:02}", (i64::from(start_year) + 1).rem_euclid(100))
}

/// Returns the fiscal year starting in BS year `start_year`.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if either `start_year` or
/// `start_year + 1` is outside the almanac.
///
/// # Examples
///
/// ```
/// use sambat_fiscal::fiscal_year_of;
///
/// let fy = fiscal_year_of(2082).unwrap();
/// assert_eq!(fy.code, "2082/83");
/// ```
pub fn fiscal_year_of(start_year: i32) -> Result<FiscalYearWindow, CalendarError> {
    let start_bs = BsDate::new(start_year, FISCAL_START_MONTH, 1)?;
    // `start_year` is in the almanac, so this cannot overflow.
    let end_year = start_year + 1;
    let end_month = FISCAL_START_MONTH - 1;
    let end_bs = BsDate::new(end_year, end_month, days_in_month(end_year, end_month)?)?;
    Ok(FiscalYearWindow {
        code: fiscal_year_code(start_year),
        start_bs,
        end_bs,
        start_ad: bs_to_civil(start_bs)?,
        end_ad: bs_to_civil(end_bs)?,
    })
}

/// Returns the fiscal year containing `today`.
///
/// # Errors
///
/// See [`fiscal_year_of`].
pub fn fiscal_year_containing(today: BsDate) -> Result<FiscalYearWindow, CalendarError> {
    fiscal_year_of(fiscal_start_year(today))
}

/// Parses a code such as `2082/83` back into its window.
///
/// # Errors
///
/// Returns [`FiscalError::InvalidCode`] if the code is malformed or its
/// suffix does not name the year after the start year, and
/// [`FiscalError::Calendar`] if the window leaves the almanac.
pub fn fiscal_year_from_code(code: &str) -> Result<FiscalYearWindow, FiscalError> {
    let invalid = || FiscalError::InvalidCode {
        code: code.to_string(),
    };
    let (start, suffix) = code.trim().split_once('/').ok_or_else(invalid)?;
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if start.len() != 4 || !all_digits(start) || suffix.len() != 2 || !all_digits(suffix) {
        return Err(invalid());
    }
    let start_year: i32 = start.parse().map_err(|_| invalid())?;
    if fiscal_year_code(start_year) != format!("{start_year}/{suffix}") {
        return Err(invalid());
    }
    Ok(fiscal_year_of(start_year)?)
}
