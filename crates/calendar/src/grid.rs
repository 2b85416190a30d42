//! Week-partitioned month grids for date-picker rendering.

use serde::{Deserialize, Serialize};

use crate::almanac::{days_in_month, BS_MAX_YEAR, BS_MIN_YEAR};
use crate::date::BsDate;
use crate::error::CalendarError;

/// Number of slots in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// One grid row, Sunday first. `None` marks padding outside the month.
pub type Week = [Option<u8>; DAYS_PER_WEEK];

/// A fully materialised month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    year: i32,
    month: u8,
    first_weekday: u8,
    days_in_month: u8,
    weeks: Vec<Week>,
}

impl CalendarGrid {
    /// Returns the BS year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the BS month.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Weekday of day 1, 0 = Sunday.
    pub fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    /// Returns the month length.
    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Returns the rows of the grid.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Returns `(week, weekday)` of `day`, or `None` if it is not in the grid.
    pub fn position_of(&self, day: u8) -> Option<(usize, usize)> {
        if !(1..=self.days_in_month).contains(&day) {
            return None;
        }
        let slot = usize::from(self.first_weekday) + usize::from(day) - 1;
        Some((slot / DAYS_PER_WEEK, slot % DAYS_PER_WEEK))
    }
}

/// Builds the grid for a BS month.
///
/// The first row is padded with one empty slot per weekday before day 1, the
/// last row is padded out to seven slots.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if `year` is outside the
/// almanac, or [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
#[tracing::instrument(level = "trace")]
pub fn month_grid(year: i32, month: u8) -> Result<CalendarGrid, CalendarError> {
    let n_days = days_in_month(year, month)?;
    let first_weekday = BsDate::new(year, month, 1)?.weekday()?;

    let n_slots = usize::from(first_weekday) + usize::from(n_days);
    let n_weeks = n_slots.div_ceil(DAYS_PER_WEEK);
    let mut weeks = vec![[None; DAYS_PER_WEEK]; n_weeks];
    for day in 1..=n_days {
        let slot = usize::from(first_weekday) + usize::from(day) - 1;
        weeks[slot / DAYS_PER_WEEK][slot % DAYS_PER_WEEK] = Some(day);
    }

    Ok(CalendarGrid {
        year,
        month,
        first_weekday,
        days_in_month: n_days,
        weeks,
    })
}

/// A BS year and month, as navigated by a date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// BS year.
    pub year: i32,
    /// BS month, 1..=12.
    pub month: u8,
}

impl YearMonth {
    /// Creates a `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: BsDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The previous month; month 1 rolls back to month 12 of the prior year.
    /// `None` only when the year would overflow `i32`.
    pub fn prev(self) -> Option<Self> {
        if self.month <= 1 {
            Some(Self {
                year: self.year.checked_sub(1)?,
                month: 12,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// The next month; month 12 rolls over to month 1 of the next year.
    /// `None` only when the year would overflow `i32`.
    pub fn next(self) -> Option<Self> {
        if self.month >= 12 {
            Some(Self {
                year: self.year.checked_add(1)?,
                month: 1,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// Builds the grid for this month.
    ///
    /// # Errors
    ///
    /// See [`month_grid`].
    pub fn grid(self) -> Result<CalendarGrid, CalendarError> {
        month_grid(self.year, self.month)
    }
}

/// Years offered by a picker's year selector: `count` consecutive years
/// starting `count / 2` before `center`, dropping any without an almanac entry.
pub fn year_options(center: i32, count: usize) -> Vec<i32> {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    let first = center.saturating_sub(count / 2);
    (0..count)
        .map_while(|i| first.checked_add(i))
        .filter(|y| (BS_MIN_YEAR..=BS_MAX_YEAR).contains(y))
        .collect()
}
