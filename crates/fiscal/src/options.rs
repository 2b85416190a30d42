//! Current fiscal year and the selectable fiscal-year list.

use sambat_calendar::{
    current_bs_date_with, CalendarError, Clock, LocalDateResolver, NepalZone, SystemClock,
};
use tracing::debug;

use crate::fiscal_year::{fiscal_year_containing, fiscal_year_of, FiscalYearWindow};

/// How many years before the current fiscal year the option list starts.
pub const OPTIONS_LEAD_YEARS: i32 = 2;

/// Default length of the option list.
pub const DEFAULT_OPTION_COUNT: usize = 5;

/// Returns the fiscal year containing today's Nepal-local BS date.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] once today or the window end
/// is past the almanac.
pub fn current_fiscal_year() -> Result<FiscalYearWindow, CalendarError> {
    current_fiscal_year_with(&SystemClock, &NepalZone::default())
}

/// Like [`current_fiscal_year`] with an injected clock and resolver.
///
/// # Errors
///
/// See [`current_fiscal_year`].
pub fn current_fiscal_year_with<C, R>(
    clock: &C,
    resolver: &R,
) -> Result<FiscalYearWindow, CalendarError>
where
    C: Clock + ?Sized,
    R: LocalDateResolver + ?Sized,
{
    fiscal_year_containing(current_bs_date_with(clock, resolver)?)
}

/// Returns `count` fiscal years around the current one, most recent first.
///
/// # Errors
///
/// See [`fiscal_year_options_from`].
pub fn fiscal_year_options(count: usize) -> Result<Vec<FiscalYearWindow>, CalendarError> {
    fiscal_year_options_with(&SystemClock, &NepalZone::default(), count)
}

/// Like [`fiscal_year_options`] with an injected clock and resolver.
///
/// # Errors
///
/// See [`fiscal_year_options_from`].
pub fn fiscal_year_options_with<C, R>(
    clock: &C,
    resolver: &R,
    count: usize,
) -> Result<Vec<FiscalYearWindow>, CalendarError>
where
    C: Clock + ?Sized,
    R: LocalDateResolver + ?Sized,
{
    let current = current_fiscal_year_with(clock, resolver)?;
    fiscal_year_options_from(current.start_year(), count)
}

/// Returns `count` fiscal years starting [`OPTIONS_LEAD_YEARS`] before
/// `current_start`, most recent first.
///
/// With the default count of 5 the list covers two years ahead of the
/// current one down to two years behind it, so the current year sits in the
/// middle.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if any window in the list
/// leaves the almanac.
#[tracing::instrument(level = "debug")]
pub fn fiscal_year_options_from(
    current_start: i32,
    count: usize,
) -> Result<Vec<FiscalYearWindow>, CalendarError> {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    let mut windows = (-OPTIONS_LEAD_YEARS..count - OPTIONS_LEAD_YEARS)
        .map(|i| {
            let year = current_start
                .checked_add(i)
                .ok_or(CalendarError::UnsupportedYear {
                    year: current_start.saturating_add(i),
                })?;
            fiscal_year_of(year)
        })
        .collect::<Result<Vec<_>, _>>()?;
    windows.reverse();
    debug!(n = windows.len(), "built fiscal year options");
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sambat_calendar::FixedClock;

    fn codes(windows: &[FiscalYearWindow]) -> Vec<&str> {
        windows.iter().map(|w| w.code.as_str()).collect()
    }

    #[test]
    fn options_default_count() {
        let windows = fiscal_year_options_from(2082, DEFAULT_OPTION_COUNT).unwrap();
        assert_eq!(
            codes(&windows),
            vec!["2084/85", "2083/84", "2082/83", "2081/82", "2080/81"]
        );
    }

    #[test]
    fn options_small_counts() {
        assert!(fiscal_year_options_from(2082, 0).unwrap().is_empty());
        assert_eq!(
            codes(&fiscal_year_options_from(2082, 1).unwrap()),
            vec!["2080/81"]
        );
        assert_eq!(
            codes(&fiscal_year_options_from(2082, 3).unwrap()),
            vec!["2082/83", "2081/82", "2080/81"]
        );
    }

    #[test]
    fn options_most_recent_first() {
        let windows = fiscal_year_options_from(2070, 8).unwrap();
        assert_eq!(windows.len(), 8);
        for pair in windows.windows(2) {
            assert!(pair[0].start_bs > pair[1].start_bs);
        }
        assert_eq!(windows.last().unwrap().code, "2068/69");
        assert_eq!(windows[0].code, "2075/76");
    }

    #[test]
    fn options_leaving_almanac() {
        assert_eq!(
            fiscal_year_options_from(2088, 5).unwrap_err(),
            CalendarError::UnsupportedYear { year: 2091 }
        );
        assert_eq!(
            fiscal_year_options_from(2001, 5).unwrap_err(),
            CalendarError::UnsupportedYear { year: 1999 }
        );
    }

    #[test]
    fn options_at_integer_bounds() {
        assert_eq!(
            fiscal_year_options_from(i32::MIN, 5).unwrap_err(),
            CalendarError::UnsupportedYear { year: i32::MIN }
        );
        assert_eq!(
            fiscal_year_options_from(i32::MAX, 5).unwrap_err(),
            CalendarError::UnsupportedYear { year: i32::MAX - 2 }
        );
    }

    #[test]
    fn options_around_current_year() {
        let windows = fiscal_year_options(DEFAULT_OPTION_COUNT).unwrap();
        assert_eq!(windows.len(), DEFAULT_OPTION_COUNT);
        assert_eq!(windows[2], current_fiscal_year().unwrap());
    }

    #[test]
    fn options_from_fixed_clock() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 16, 6, 0, 0).unwrap());
        let windows = fiscal_year_options_with(&clock, &NepalZone::fixed(), 3).unwrap();
        assert_eq!(codes(&windows), vec!["2083/84", "2082/83", "2081/82"]);
    }

    #[test]
    fn current_from_fixed_clock() {
        // 2026-10-16 is 2083/06/29 in Nepal.
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 16, 6, 0, 0).unwrap());
        let fy = current_fiscal_year_with(&clock, &NepalZone::fixed()).unwrap();
        assert_eq!(fy.code, "2083/84");
    }

    #[test]
    fn current_before_shrawan() {
        // 2026-05-01 is in Baisakh 2083, still fiscal year 2082/83.
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 5, 1, 6, 0, 0).unwrap());
        let fy = current_fiscal_year_with(&clock, &NepalZone::new()).unwrap();
        assert_eq!(fy.code, "2082/83");
    }
}
