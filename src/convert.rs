//! Pure conversion functions: TOML config + CLI flags -> library settings.

use anyhow::{Context, Result};

use sambat_calendar::{BsFormat, NepalZone};

use crate::config::SambatConfig;

/// Effective settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub style: BsFormat,
    pub json: bool,
    pub option_count: usize,
    pub zone: NepalZone,
}

/// Parses a BS rendering style name.
pub fn parse_style(s: &str) -> Result<BsFormat> {
    s.parse::<BsFormat>()
        .with_context(|| format!("invalid display style {s:?}"))
}

/// Builds the [`NepalZone`] from the `[zone]` table.
pub fn build_zone(fixed_offset: bool) -> NepalZone {
    if fixed_offset {
        NepalZone::fixed()
    } else {
        NepalZone::new()
    }
}

/// Merges the config file with CLI overrides. CLI flags win.
pub fn build_settings(
    config: &SambatConfig,
    style_override: Option<&str>,
    json_flag: bool,
) -> Result<Settings> {
    let style = parse_style(style_override.unwrap_or(&config.display.style))?;
    Ok(Settings {
        style,
        json: json_flag || config.display.json,
        option_count: config.fiscal.options,
        zone: build_zone(config.zone.fixed_offset),
    })
}
