//! # sambat-calendar
//!
//! Bikram Sambat (BS) calendar arithmetic over a published almanac of
//! per-year month lengths.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["almanac (BS 2000..=2090)"] -->|"days_in_month()"| B["BsDate::new()"]
//!     A -->|"day offsets"| C["civil_date_to_bs() / bs_to_civil()"]
//!     Z["NepalZone"] -->|"local_date()"| C
//!     B --> P["parse_bs_date()"]
//!     C -->|"weekday of day 1"| G["month_grid()"]
//!     B --> F["format_bs()"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use sambat_calendar::{BsDate, BsFormat, bs_to_civil, civil_date_to_bs, format_bs, month_grid};
//!
//! let new_year = BsDate::new(2082, 1, 1).unwrap();
//! let civil = bs_to_civil(new_year).unwrap();
//! assert_eq!(civil, NaiveDate::from_ymd_opt(2025, 4, 14).unwrap());
//! assert_eq!(civil_date_to_bs(civil).unwrap(), new_year);
//!
//! assert_eq!(format_bs(new_year, BsFormat::Short), "2082/01/01");
//!
//! let grid = month_grid(2082, 4).unwrap();
//! assert_eq!(grid.weeks()[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `almanac` | Month-length table, supported range, cumulative day index |
//! | `date` | `BsDate` value type |
//! | `convert` | Anchored AD/BS conversion |
//! | `zone` | Nepal-local date resolution and clocks |
//! | `parse` | Soft-failing parser and validator |
//! | `grid` | Month grids and picker navigation |
//! | `format` | Numeral substitution and date rendering |
//! | `error` | Error types |

mod almanac;
mod convert;
mod date;
mod error;
mod format;
mod grid;
mod parse;
mod zone;

pub use almanac::{
    days_in_month, days_in_year, is_supported_year, month_lengths, BS_MAX_YEAR, BS_MIN_YEAR,
    YEAR_COUNT,
};
pub use convert::{
    bs_to_civil, civil_date_to_bs, civil_to_bs, civil_to_bs_with, current_bs_date,
    current_bs_date_with, AD_EPOCH, BS_EPOCH,
};
pub use date::{BsDate, ParseBsDateError};
pub use error::CalendarError;
pub use format::{
    format_ad, format_bs, month_name, nepali_numeral, to_nepali_digits, weekday_name, BsFormat,
    Script, UnknownFormatError, BS_MONTHS_EN, BS_MONTHS_NP, NEPALI_DIGITS, WEEKDAYS_EN,
    WEEKDAYS_NP,
};
pub use grid::{month_grid, year_options, CalendarGrid, Week, YearMonth, DAYS_PER_WEEK};
pub use parse::{is_valid_bs_date, parse_bs_date};
pub use zone::{
    Clock, FixedClock, LocalDateResolver, NepalZone, SystemClock, NEPAL_TZ_NAME,
    NEPAL_UTC_OFFSET_SECS,
};
