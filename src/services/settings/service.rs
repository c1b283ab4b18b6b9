use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "ACTIVITY_CALENDAR_API_URL";

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("org", "ActivityCalendar", "activity-calendar")
            .ok_or_else(|| anyhow!("Could not determine the configuration directory"))?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings. A missing file means defaults; the environment
    /// override is applied last.
    pub fn load(&self) -> Result<Settings> {
        let mut settings = if self.path.exists() {
            let raw = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?
        } else {
            log::debug!("No settings file at {}, using defaults", self.path.display());
            Settings::default()
        };

        apply_env_overrides(&mut settings);

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Write the settings as TOML, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        let url = url.trim();
        if !url.is_empty() {
            log::debug!("Using API URL from {}", API_URL_ENV);
            settings.api_base_url = url.to_string();
        }
    }
}
