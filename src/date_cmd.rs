//! Date commands: `to-bs`, `to-ad`, `today` and `validate`.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info_span};

use sambat_calendar::{
    bs_to_civil, civil_date_to_bs, current_bs_date_with, format_ad, format_bs, parse_bs_date,
    BsDate, SystemClock,
};

use crate::cli::{ToAdArgs, ToBsArgs, ValidateArgs};
use crate::convert::Settings;

/// One converted date, as printed by the date commands.
#[derive(Debug, Serialize)]
struct DatePair {
    bs: BsDate,
    bs_text: String,
    ad: NaiveDate,
    ad_text: String,
    weekday: u8,
}

impl DatePair {
    fn new(bs: BsDate, ad: NaiveDate, settings: &Settings) -> Result<Self> {
        Ok(Self {
            bs,
            bs_text: format_bs(bs, settings.style),
            ad,
            ad_text: format_ad(ad),
            weekday: bs.weekday()?,
        })
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            println!("{} BS = {} AD", self.bs_text, self.ad_text);
        }
        Ok(())
    }
}

fn today_in_nepal(settings: &Settings) -> Result<(BsDate, NaiveDate)> {
    let bs = current_bs_date_with(&SystemClock, &settings.zone)
        .context("today is outside the supported BS range")?;
    let ad = bs_to_civil(bs)?;
    debug!(%bs, %ad, fixed = settings.zone.is_fixed(), "resolved Nepal-local date");
    Ok((bs, ad))
}

/// Convert a Gregorian date (default today) to BS.
pub fn to_bs(args: ToBsArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("to_bs").entered();
    let (bs, ad) = match args.date {
        Some(ad) => {
            let bs = civil_date_to_bs(ad).with_context(|| format!("cannot convert {ad} to BS"))?;
            (bs, ad)
        }
        None => today_in_nepal(settings)?,
    };
    DatePair::new(bs, ad, settings)?.print(settings.json)
}

/// Convert a BS date literal to Gregorian.
pub fn to_ad(args: ToAdArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("to_ad").entered();
    let bs = parse_bs_date(&args.date)
        .ok_or_else(|| anyhow!("not a valid BS date: {:?}", args.date))?;
    let ad = bs_to_civil(bs).with_context(|| format!("cannot convert {bs} to AD"))?;
    DatePair::new(bs, ad, settings)?.print(settings.json)
}

/// Print today's date in Nepal.
pub fn today(settings: &Settings) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let (bs, ad) = today_in_nepal(settings)?;
    DatePair::new(bs, ad, settings)?.print(settings.json)
}

#[derive(Debug, Serialize)]
struct Validation<'a> {
    input: &'a str,
    valid: bool,
    date: Option<BsDate>,
}

/// Report whether the argument is a valid BS date.
pub fn validate(args: ValidateArgs, settings: &Settings) -> Result<()> {
    let parsed = parse_bs_date(&args.date);
    let report = Validation {
        input: &args.date,
        valid: parsed.is_some(),
        date: parsed,
    };
    if settings.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match parsed {
            Some(date) => println!("valid: {}", format_bs(date, settings.style)),
            None => println!("invalid: {}", args.date),
        }
    }
    Ok(())
}
