use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;

use super::mapper::{settings_from_toml, settings_to_toml};
use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "config.toml";

/// File-backed settings store.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform configuration directory, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "CalendarWidget")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings = settings_from_toml(&content)
            .with_context(|| format!("Failed to load settings from {}", self.path.display()))?;

        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write the default settings, refusing to replace an existing file.
    pub fn init_default(&self) -> Result<()> {
        if self.path.exists() {
            log::warn!("Settings file {} already exists", self.path.display());
            bail!(
                "Settings file {} already exists; remove it first to reset",
                self.path.display()
            );
        }

        self.save(&Settings::default())
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = settings_to_toml(settings)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
