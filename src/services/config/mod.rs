//! Settings persistence.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing or unreadable file yields defaults so the app always starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "baseball-scheduler")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn load() -> Settings {
    let Some(path) = config_path() else {
        log::warn!("No config directory available; using default settings");
        return Settings::default();
    };

    if !path.exists() {
        return Settings::default();
    }

    match load_from(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "Failed to load settings from {}: {:#}; using defaults",
                path.display(),
                err
            );
            Settings::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn save(settings: &Settings) -> Result<()> {
    let path = config_path().context("No config directory available")?;
    save_to(&path, settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, raw)
        .with_context(|| format!("Failed to write config file {}", path.display()))
}
