use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sambat.toml";

/// Top-level sambat configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SambatConfig {
    /// Output settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Fiscal-year settings.
    #[serde(default)]
    pub fiscal: FiscalToml,

    /// Time-zone settings.
    #[serde(default)]
    pub zone: ZoneToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            style: default_style(),
            json: false,
        }
    }
}

fn default_style() -> String {
    "short".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiscalToml {
    #[serde(default = "default_options")]
    pub options: usize,
}

impl Default for FiscalToml {
    fn default() -> Self {
        Self {
            options: default_options(),
        }
    }
}

fn default_options() -> usize {
    sambat_fiscal::DEFAULT_OPTION_COUNT
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ZoneToml {
    /// Skip the time-zone database and use the fixed +05:45 offset.
    #[serde(default)]
    pub fixed_offset: bool,
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `sambat.toml` in the working
/// directory is used when present, otherwise defaults apply.
pub fn load(path: Option<&Path>) -> Result<SambatConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(SambatConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SambatConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: SambatConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.style, "short");
        assert!(!config.display.json);
        assert_eq!(config.fiscal.options, 5);
        assert!(!config.zone.fixed_offset);
    }

    #[test]
    fn full_toml() {
        let config: SambatConfig = toml::from_str(
            r#"
            [display]
            style = "full"
            json = true

            [fiscal]
            options = 7

            [zone]
            fixed_offset = true
            "#,
        )
        .unwrap();
        assert_eq!(config.display.style, "full");
        assert!(config.display.json);
        assert_eq!(config.fiscal.options, 7);
        assert!(config.zone.fixed_offset);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = toml::from_str::<SambatConfig>("[display]\ncolour = \"red\"\n").unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sambat.toml");
        std::fs::write(&path, "[fiscal]\noptions = 3\n").unwrap();
        let config = load(Some(path.as_path())).unwrap();
        assert_eq!(config.fiscal.options, 3);
        assert_eq!(config.display.style, "short");
    }
}
