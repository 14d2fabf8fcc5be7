// SPDX-License-Identifier: MPL-2.0
//! This module handles the showcase's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Container geometry overrides are read once at startup and baked into the
//! manager that is built from them; changing them requires a restart, which
//! is the remount-to-reconfigure policy of the toast container.

use crate::error::Result;
use crate::ui::toasts::{ContainerConfig, MaxWidth};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SatelliteToast";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Maximum toast width: fixed pixels (`"360px"` or `"360"`) or a
    /// percentage of the viewport (`"100%"`).
    #[serde(default)]
    pub max_width: Option<String>,
    #[serde(default)]
    pub horizontal_margin_adjustment: Option<f32>,
    #[serde(default)]
    pub vertical_gap_adjustment: Option<f32>,
    #[serde(default)]
    pub first_start_margin_adjustment: Option<f32>,
}

impl Config {
    /// Builds the container geometry for the manager, falling back to
    /// defaults for anything unset or unparseable.
    #[must_use]
    pub fn container_config(&self) -> ContainerConfig {
        let defaults = ContainerConfig::default();
        ContainerConfig {
            max_width: self
                .max_width
                .as_deref()
                .and_then(parse_max_width)
                .unwrap_or(defaults.max_width),
            horizontal_margin_adjustment: self
                .horizontal_margin_adjustment
                .unwrap_or(defaults.horizontal_margin_adjustment),
            vertical_gap_adjustment: self
                .vertical_gap_adjustment
                .unwrap_or(defaults.vertical_gap_adjustment),
            first_start_margin_adjustment: self
                .first_start_margin_adjustment
                .unwrap_or(defaults.first_start_margin_adjustment),
        }
    }
}

/// Parses a width string: `"100%"` is a percentage, `"360px"` or `"360"` are
/// fixed pixels. Anything else is ignored.
#[must_use]
pub fn parse_max_width(value: &str) -> Option<MaxWidth> {
    let value = value.trim();
    if let Some(pct) = value.strip_suffix('%') {
        return pct.trim().parse::<f32>().ok().map(MaxWidth::Percent);
    }
    let px = value.strip_suffix("px").unwrap_or(value);
    px.trim().parse::<f32>().ok().map(MaxWidth::Px)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            max_width: Some("100%".to_string()),
            horizontal_margin_adjustment: Some(15.0),
            vertical_gap_adjustment: Some(56.0),
            first_start_margin_adjustment: Some(32.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.max_width, config.max_width);
        assert_eq!(
            loaded.vertical_gap_adjustment,
            config.vertical_gap_adjustment
        );
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn parse_max_width_accepts_both_unit_forms() {
        assert_eq!(parse_max_width("360px"), Some(MaxWidth::Px(360.0)));
        assert_eq!(parse_max_width("360"), Some(MaxWidth::Px(360.0)));
        assert_eq!(parse_max_width("100%"), Some(MaxWidth::Percent(100.0)));
        assert_eq!(parse_max_width("42.5 %"), Some(MaxWidth::Percent(42.5)));
        assert_eq!(parse_max_width("wide"), None);
    }

    #[test]
    fn container_config_falls_back_to_defaults() {
        let config = Config::default();
        assert_eq!(config.container_config(), ContainerConfig::default());
    }

    #[test]
    fn container_config_applies_overrides() {
        let config = Config {
            max_width: Some("100%".to_string()),
            vertical_gap_adjustment: Some(56.0),
            ..Config::default()
        };
        let container = config.container_config();
        assert_eq!(container.max_width, MaxWidth::Percent(100.0));
        assert_eq!(container.vertical_gap_adjustment, 56.0);
    }
}
