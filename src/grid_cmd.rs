//! Grid command: print a BS month as a calendar.

use anyhow::{Context, Result};
use tracing::info_span;

use sambat_calendar::{
    current_bs_date_with, month_grid, month_name, nepali_numeral, weekday_name, CalendarGrid,
    Script, SystemClock,
};

use crate::cli::GridArgs;
use crate::convert::Settings;

/// Run the grid command.
pub fn run(args: GridArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("grid").entered();
    let (year, month) = match (args.year, args.month) {
        (Some(y), Some(m)) => (y, m),
        (year, month) => {
            let today = current_bs_date_with(&SystemClock, &settings.zone)
                .context("today is outside the supported BS range")?;
            (year.unwrap_or(today.year()), month.unwrap_or(today.month()))
        }
    };
    let grid = month_grid(year, month)
        .with_context(|| format!("cannot build grid for {year}/{month}"))?;

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        let script = if args.english {
            Script::English
        } else {
            Script::Nepali
        };
        print!("{}", render(&grid, script));
    }
    Ok(())
}

/// Renders the grid as text, one row per week, Sunday first.
pub fn render(grid: &CalendarGrid, script: Script) -> String {
    let number = |n: i64| match script {
        Script::Nepali => nepali_numeral(n),
        Script::English => n.to_string(),
    };
    let name = month_name(grid.month(), script).unwrap_or_default();
    let title = format!("{name} {}", number(i64::from(grid.year())));
    let header: String = (0..7u8)
        .map(|d| format!("{:>5}", weekday_name(d, script).unwrap_or_default()))
        .collect();
    let rows = grid.weeks().iter().map(|week| {
        week.iter()
            .map(|slot| match slot {
                Some(day) => format!("{:>5}", number(i64::from(*day))),
                None => " ".repeat(5),
            })
            .collect::<String>()
    });

    let mut lines = vec![title, header];
    lines.extend(rows);
    lines
        .iter()
        .map(|line| format!("{}\n", line.trim_end()))
        .collect()
}
