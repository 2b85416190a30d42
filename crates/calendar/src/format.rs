//! Localized rendering of BS and AD dates.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::BsDate;

/// Devanagari digits, indexed by ASCII digit value.
pub const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// BS month names in Devanagari, Baisakh first.
pub const BS_MONTHS_NP: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "श्रावण", "भाद्र", "आश्विन", "कार्तिक", "मंसिर", "पौष", "माघ", "फाल्गुन", "चैत्र",
];

/// BS month names transliterated, Baisakh first.
pub const BS_MONTHS_EN: [&str; 12] = [
    "Baisakh", "Jestha", "Ashar", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Short weekday names in Devanagari, Sunday first.
pub const WEEKDAYS_NP: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिही", "शुक्र", "शनि"];

/// Short weekday names in English, Sunday first.
pub const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Rendering style for [`format_bs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BsFormat {
    /// Devanagari numerals with the month name, e.g. `२०८२ श्रावण १`.
    Full,
    /// Zero-padded ASCII, e.g. `2082/04/01`.
    #[default]
    Short,
    /// Devanagari numerals without padding, e.g. `२०८२/४/१`.
    Numeric,
}

impl fmt::Display for BsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// Returned when a format name is not one of `full`, `short`, `numeric`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown BS format: {0:?} (expected full, short or numeric)")]
pub struct UnknownFormatError(String);

impl FromStr for BsFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "short" => Ok(Self::Short),
            "numeric" => Ok(Self::Numeric),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

/// Script used for month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Devanagari names.
    #[default]
    Nepali,
    /// Latin transliteration.
    English,
}

/// Replaces every ASCII digit in `text` with its Devanagari counterpart.
///
/// Pure character substitution: no grouping, rounding or reordering, and
/// non-digit characters pass through unchanged.
pub fn to_nepali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => NEPALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Renders a number with Devanagari digits.
pub fn nepali_numeral<N: fmt::Display>(n: N) -> String {
    to_nepali_digits(&n.to_string())
}

/// Name of BS month `month` (1..=12), or `None` outside that range.
pub fn month_name(month: u8, script: Script) -> Option<&'static str> {
    let idx = usize::from(month.checked_sub(1)?);
    match script {
        Script::Nepali => BS_MONTHS_NP.get(idx).copied(),
        Script::English => BS_MONTHS_EN.get(idx).copied(),
    }
}

/// Short name of `weekday` (0 = Sunday), or `None` past 6.
pub fn weekday_name(weekday: u8, script: Script) -> Option<&'static str> {
    let idx = usize::from(weekday);
    match script {
        Script::Nepali => WEEKDAYS_NP.get(idx).copied(),
        Script::English => WEEKDAYS_EN.get(idx).copied(),
    }
}

/// Renders a BS date in the given style.
///
/// The date is not checked against the almanac; a `full` rendering of a
/// month outside 1..=12 shows the month number instead of a name.
pub fn format_bs(date: BsDate, style: BsFormat) -> String {
    match style {
        BsFormat::Full => {
            let month = month_name(date.month(), Script::Nepali)
                .map_or_else(|| nepali_numeral(date.month()), str::to_string);
            format!(
                "{} {} {}",
                nepali_numeral(date.year()),
                month,
                nepali_numeral(date.day())
            )
        }
        BsFormat::Short => format!("{}/{:02}/{:02}", date.year(), date.month(), date.day()),
        BsFormat::Numeric => format!(
            "{}/{}/{}",
            nepali_numeral(date.year()),
            nepali_numeral(date.month()),
            nepali_numeral(date.day())
        ),
    }
}

/// Renders a civil date as day, abbreviated month and year, e.g. `14 Apr 2025`.
pub fn format_ad(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
