//! Per-year BS month lengths and the cumulative day index built from them.
//!
//! The table is published ground truth. Month lengths are irregular and cannot
//! be derived from a rule, so a single wrong entry shifts every conversion
//! that crosses it.

use crate::error::CalendarError;

/// First BS year covered by the almanac.
pub const BS_MIN_YEAR: i32 = 2000;

/// Last BS year covered by the almanac.
pub const BS_MAX_YEAR: i32 = 2090;

/// Number of years in the almanac.
pub const YEAR_COUNT: usize = (BS_MAX_YEAR - BS_MIN_YEAR + 1) as usize;

/// Days in each month, indexed by `year - BS_MIN_YEAR` then `month - 1`.
///
/// The array length is tied to the declared year range, so a table that
/// does not cover exactly `BS_MIN_YEAR..=BS_MAX_YEAR` fails to compile.
#[rustfmt::skip]
pub(crate) const MONTH_LENGTHS: [[u8; 12]; YEAR_COUNT] = [
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 30, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

const _: () = {
    let mut y = 0;
    while y < YEAR_COUNT {
        let mut m = 0;
        while m < 12 {
            let len = MONTH_LENGTHS[y][m];
            assert!(len >= 28 && len <= 32, "BS month length outside 28..=32");
            m += 1;
        }
        y += 1;
    }
};

const fn build_year_start_offsets() -> [i32; YEAR_COUNT + 1] {
    let mut offsets = [0i32; YEAR_COUNT + 1];
    let mut y = 0;
    while y < YEAR_COUNT {
        let mut total = 0i32;
        let mut m = 0;
        while m < 12 {
            total += MONTH_LENGTHS[y][m] as i32;
            m += 1;
        }
        offsets[y + 1] = offsets[y] + total;
        y += 1;
    }
    offsets
}

/// Day offset of BS day 1/1 of each year from the epoch (2000/01/01).
///
/// Entry `i` is the start of year `BS_MIN_YEAR + i`; the final entry is the
/// total number of days in the almanac.
pub(crate) const YEAR_START_OFFSET: [i32; YEAR_COUNT + 1] = build_year_start_offsets();

/// Total number of days covered by the almanac.
pub(crate) const TOTAL_DAYS: i32 = YEAR_START_OFFSET[YEAR_COUNT];

/// Returns `true` if `year` has an almanac entry.
pub fn is_supported_year(year: i32) -> bool {
    (BS_MIN_YEAR..=BS_MAX_YEAR).contains(&year)
}

fn year_index(year: i32) -> Result<usize, CalendarError> {
    if !is_supported_year(year) {
        tracing::debug!(year, "almanac lookup outside supported range");
        return Err(CalendarError::UnsupportedYear { year });
    }
    Ok((year - BS_MIN_YEAR) as usize)
}

/// Returns the twelve month lengths of a BS year.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if `year` is outside the almanac.
pub fn month_lengths(year: i32) -> Result<[u8; 12], CalendarError> {
    Ok(MONTH_LENGTHS[year_index(year)?])
}

/// Returns the number of days in a BS month.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if `year` is outside the almanac,
/// or [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let idx = year_index(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_LENGTHS[idx][usize::from(month - 1)])
}

/// Returns the number of days in a BS year (the sum of its month lengths).
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if `year` is outside the almanac.
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    let idx = year_index(year)?;
    Ok((YEAR_START_OFFSET[idx + 1] - YEAR_START_OFFSET[idx]) as u16)
}

/// Day offset of a BS date from the epoch.
///
/// The caller must have validated `month` and `day`; only the year is checked.
pub(crate) fn day_offset(year: i32, month: u8, day: u8) -> Result<i32, CalendarError> {
    let idx = year_index(year)?;
    let before: i32 = MONTH_LENGTHS[idx][..usize::from(month - 1)]
        .iter()
        .map(|&len| i32::from(len))
        .sum();
    Ok(YEAR_START_OFFSET[idx] + before + i32::from(day) - 1)
}

/// Resolves a day offset from the epoch to a BS `(year, month, day)`.
///
/// Offsets before the epoch report the year below the range, offsets past
/// the last day report the year above it.
pub(crate) fn locate(offset: i32) -> Result<(i32, u8, u8), CalendarError> {
    if offset < 0 {
        return Err(CalendarError::UnsupportedYear {
            year: BS_MIN_YEAR - 1,
        });
    }
    if offset >= TOTAL_DAYS {
        return Err(CalendarError::UnsupportedYear {
            year: BS_MAX_YEAR + 1,
        });
    }
    // First entry is 0 and offset >= 0, so partition_point is at least 1.
    let idx = YEAR_START_OFFSET.partition_point(|&start| start <= offset) - 1;
    let mut remaining = offset - YEAR_START_OFFSET[idx];
    for (m, &len) in MONTH_LENGTHS[idx].iter().enumerate() {
        let len = i32::from(len);
        if remaining < len {
            return Ok((BS_MIN_YEAR + idx as i32, m as u8 + 1, remaining as u8 + 1));
        }
        remaining -= len;
    }
    // The year's offsets bracket `offset`, so the month loop always returns.
    Err(CalendarError::UnsupportedYear {
        year: BS_MIN_YEAR + idx as i32 + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_in_month_known_values() {
        assert_eq!(days_in_month(2000, 1).unwrap(), 30);
        assert_eq!(days_in_month(2000, 2).unwrap(), 32);
        assert_eq!(days_in_month(2082, 1).unwrap(), 30);
        assert_eq!(days_in_month(2090, 12).unwrap(), 30);
    }

    #[test]
    fn days_in_month_unsupported_year() {
        assert_eq!(
            days_in_month(1999, 1).unwrap_err(),
            CalendarError::UnsupportedYear { year: 1999 }
        );
        assert_eq!(
            days_in_month(2091, 1).unwrap_err(),
            CalendarError::UnsupportedYear { year: 2091 }
        );
    }

    #[test]
    fn days_in_month_invalid_month() {
        assert_eq!(
            days_in_month(2082, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2082, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn unsupported_year_wins_over_invalid_month() {
        assert_eq!(
            days_in_month(2091, 13).unwrap_err(),
            CalendarError::UnsupportedYear { year: 2091 }
        );
    }

    #[test]
    fn days_in_year_known_values() {
        assert_eq!(days_in_year(2000).unwrap(), 365);
        assert_eq!(days_in_year(2081).unwrap(), 366);
        assert_eq!(days_in_year(2082).unwrap(), 366);
        assert_eq!(days_in_year(2090).unwrap(), 365);
    }

    #[test]
    fn table_integrity_year_offsets() {
        for (i, lengths) in MONTH_LENGTHS.iter().enumerate() {
            let sum: i32 = lengths.iter().map(|&l| i32::from(l)).sum();
            assert_eq!(
                YEAR_START_OFFSET[i] + sum,
                YEAR_START_OFFSET[i + 1],
                "YEAR_START_OFFSET mismatch at year {}",
                BS_MIN_YEAR + i as i32
            );
        }
    }

    #[test]
    fn table_year_lengths_plausible() {
        for year in BS_MIN_YEAR..=BS_MAX_YEAR {
            let days = days_in_year(year).unwrap();
            assert!((365..=366).contains(&days), "year {year} has {days} days");
        }
    }

    #[test]
    fn total_days_matches_range() {
        assert_eq!(TOTAL_DAYS, 33_239);
    }

    #[test]
    fn day_offset_epoch_is_zero() {
        assert_eq!(day_offset(2000, 1, 1).unwrap(), 0);
        assert_eq!(day_offset(2000, 2, 1).unwrap(), 30);
        assert_eq!(day_offset(2001, 1, 1).unwrap(), 365);
    }

    #[test]
    fn locate_epoch_and_edges() {
        assert_eq!(locate(0).unwrap(), (2000, 1, 1));
        assert_eq!(locate(29).unwrap(), (2000, 1, 30));
        assert_eq!(locate(30).unwrap(), (2000, 2, 1));
        assert_eq!(locate(TOTAL_DAYS - 1).unwrap(), (2090, 12, 30));
    }

    #[test]
    fn locate_out_of_range() {
        assert_eq!(
            locate(-1).unwrap_err(),
            CalendarError::UnsupportedYear { year: 1999 }
        );
        assert_eq!(
            locate(TOTAL_DAYS).unwrap_err(),
            CalendarError::UnsupportedYear { year: 2091 }
        );
    }

    #[test]
    fn locate_inverts_day_offset_for_every_day() {
        for year in BS_MIN_YEAR..=BS_MAX_YEAR {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month).unwrap() {
                    let offset = day_offset(year, month, day).unwrap();
                    assert_eq!(locate(offset).unwrap(), (year, month, day));
                }
            }
        }
    }
}
