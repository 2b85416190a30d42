//! Day-exact conversion between Gregorian civil dates and BS dates.
//!
//! Both directions count days from one anchor pair, [`BS_EPOCH`] and
//! [`AD_EPOCH`], through the almanac. There is no independent formula for
//! either direction, which is what makes the conversion a bijection over the
//! supported range.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::almanac::{self, BS_MAX_YEAR, BS_MIN_YEAR, TOTAL_DAYS};
use crate::date::BsDate;
use crate::error::CalendarError;
use crate::zone::{Clock, LocalDateResolver, NepalZone, SystemClock};

/// BS side of the anchor: 2000/01/01.
pub const BS_EPOCH: BsDate = BsDate::from_parts(BS_MIN_YEAR, 1, 1);

/// Civil side of the anchor: 1943-04-14, the Nepal-local date of BS 2000/01/01.
pub const AD_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1943, 4, 14) {
    Some(date) => date,
    None => panic!("AD epoch is a valid civil date"),
};

/// Converts a Nepal-local civil date to its BS date.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if the date falls before BS
/// 2000/01/01 or after the last day of [`BS_MAX_YEAR`].
pub fn civil_date_to_bs(civil: NaiveDate) -> Result<BsDate, CalendarError> {
    let offset = (civil - AD_EPOCH).num_days();
    if offset < 0 {
        return Err(CalendarError::UnsupportedYear {
            year: BS_MIN_YEAR - 1,
        });
    }
    if offset >= i64::from(TOTAL_DAYS) {
        return Err(CalendarError::UnsupportedYear {
            year: BS_MAX_YEAR + 1,
        });
    }
    let (year, month, day) = almanac::locate(offset as i32)?;
    Ok(BsDate::from_parts(year, month, day))
}

/// Converts an instant to the BS date current in Nepal at that instant.
///
/// The calendar day is always the Nepal-local one, whatever the caller's
/// own time zone.
///
/// # Errors
///
/// See [`civil_date_to_bs`].
pub fn civil_to_bs(instant: DateTime<Utc>) -> Result<BsDate, CalendarError> {
    civil_to_bs_with(instant, &NepalZone::default())
}

/// Like [`civil_to_bs`], resolving the local date through `resolver`.
///
/// # Errors
///
/// See [`civil_date_to_bs`]. An instant whose local date cannot be
/// represented is reported the same way as one past the almanac.
pub fn civil_to_bs_with<R: LocalDateResolver + ?Sized>(
    instant: DateTime<Utc>,
    resolver: &R,
) -> Result<BsDate, CalendarError> {
    let local = resolver.local_date(instant).ok_or_else(|| {
        let year = if instant.date_naive() < AD_EPOCH {
            BS_MIN_YEAR - 1
        } else {
            BS_MAX_YEAR + 1
        };
        CalendarError::UnsupportedYear { year }
    })?;
    civil_date_to_bs(local)
}

/// Converts a BS date to its Gregorian civil date.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if the year is outside the
/// almanac, or [`CalendarError::InvalidMonth`] / [`CalendarError::InvalidDay`]
/// if the date does not exist in that year.
pub fn bs_to_civil(date: BsDate) -> Result<NaiveDate, CalendarError> {
    let date = BsDate::new(date.year(), date.month(), date.day())?;
    let offset = almanac::day_offset(date.year(), date.month(), date.day())?;
    Ok(AD_EPOCH + TimeDelta::days(i64::from(offset)))
}

/// Returns today's BS date in Nepal.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] once the wall clock passes the
/// end of the almanac.
pub fn current_bs_date() -> Result<BsDate, CalendarError> {
    current_bs_date_with(&SystemClock, &NepalZone::default())
}

/// Like [`current_bs_date`] with an injected clock and resolver.
///
/// # Errors
///
/// See [`civil_date_to_bs`].
pub fn current_bs_date_with<C, R>(clock: &C, resolver: &R) -> Result<BsDate, CalendarError>
where
    C: Clock + ?Sized,
    R: LocalDateResolver + ?Sized,
{
    civil_to_bs_with(clock.now(), resolver)
}
