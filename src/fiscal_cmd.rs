//! Fiscal command: show one fiscal year or the option list.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sambat_calendar::{format_ad, format_bs, SystemClock};
use sambat_fiscal::{
    current_fiscal_year_with, fiscal_year_from_code, fiscal_year_of, fiscal_year_options_with,
    FiscalYearWindow,
};

use crate::cli::FiscalArgs;
use crate::convert::Settings;

/// Run the fiscal command.
pub fn run(args: FiscalArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("fiscal").entered();
    let windows = if let Some(code) = &args.code {
        vec![fiscal_year_from_code(code)?]
    } else if let Some(year) = args.year {
        vec![fiscal_year_of(year).with_context(|| format!("no fiscal year starting {year}"))?]
    } else if args.list {
        let count = args.count.unwrap_or(settings.option_count);
        fiscal_year_options_with(&SystemClock, &settings.zone, count)
            .context("cannot list fiscal years around today")?
    } else {
        vec![current_fiscal_year_with(&SystemClock, &settings.zone)
            .context("today is outside the supported fiscal range")?]
    };
    info!(n = windows.len(), "fiscal years resolved");

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else {
        for window in &windows {
            println!("{}", describe(window, settings));
        }
    }
    Ok(())
}

fn describe(window: &FiscalYearWindow, settings: &Settings) -> String {
    format!(
        "{}  {} - {}  ({} - {})",
        window.code,
        format_bs(window.start_bs, settings.style),
        format_bs(window.end_bs, settings.style),
        format_ad(window.start_ad),
        format_ad(window.end_ad),
    )
}
