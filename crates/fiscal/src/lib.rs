//! # sambat-fiscal
//!
//! Fiscal-year windows on the Bikram Sambat calendar.
//!
//! ## Quick Start
//!
//! ```
//! use sambat_calendar::BsDate;
//! use sambat_fiscal::{fiscal_year_containing, fiscal_year_of, fiscal_year_options_from};
//!
//! let fy = fiscal_year_of(2082).unwrap();
//! assert_eq!(fy.code, "2082/83");
//!
//! // Ashar is the last month of a fiscal year, Shrawan the first.
//! let ashar = BsDate::new(2082, 3, 31).unwrap();
//! assert_eq!(fiscal_year_containing(ashar).unwrap().code, "2081/82");
//!
//! let options = fiscal_year_options_from(2082, 5).unwrap();
//! assert_eq!(options[2].code, "2082/83");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `fiscal_year` | Window construction, boundary rule, code parsing |
//! | `options` | Current fiscal year and option lists |
//! | `error` | Error types |

mod error;
mod fiscal_year;
mod options;

pub use error::FiscalError;
pub use fiscal_year::{
    fiscal_start_year, fiscal_year_code, fiscal_year_containing, fiscal_year_from_code,
    fiscal_year_of, FiscalYearWindow, FISCAL_START_MONTH,
};
pub use options::{
    current_fiscal_year, current_fiscal_year_with, fiscal_year_options, fiscal_year_options_from,
    fiscal_year_options_with,
    DEFAULT_OPTION_COUNT, OPTIONS_LEAD_YEARS,
};
