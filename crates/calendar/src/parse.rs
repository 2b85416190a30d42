//! Parsing and validation of user-entered BS date literals.
//!
//! Both functions report bad input softly. They never return an error,
//! including for years outside the almanac.

use crate::date::BsDate;

const SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Parses `year/month/day` with `/`, `-` or `.` separators.
///
/// Returns `None` unless there are exactly three integer fields that name an
/// existing day in the almanac.
///
/// # Examples
///
/// ```
/// use sambat_calendar::{BsDate, parse_bs_date};
///
/// assert_eq!(parse_bs_date("2082.4.1"), BsDate::new(2082, 4, 1).ok());
/// assert_eq!(parse_bs_date("2082/13/01"), None);
/// ```
pub fn parse_bs_date(text: &str) -> Option<BsDate> {
    let mut fields = text.split(SEPARATORS);
    let year = fields.next()?.trim().parse::<i32>().ok()?;
    let month = fields.next()?.trim().parse::<u8>().ok()?;
    let day = fields.next()?.trim().parse::<u8>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    if !(1..=12).contains(&month) {
        return None;
    }
    BsDate::new(year, month, day).ok()
}

/// Returns `true` iff the year is supported, the month is in 1..=12 and the
/// day lies within that month's almanac length.
pub fn is_valid_bs_date(date: &BsDate) -> bool {
    date.is_valid()
}
