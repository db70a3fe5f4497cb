use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::mapper::parse_options;
use super::{ConfigError, PartialConfig, PartialOptions};
use crate::models::settings::CalendarConfig;

pub const CONFIG_FILE_NAME: &str = "calendar.toml";

/// Reads and writes calendar option files.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config file, when a config directory exists.
    pub fn user_default() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    /// `<config dir>/rust-week-calendar/calendar.toml`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(dirs) = ProjectDirs::from("com", "Ken24T", "rust-week-calendar") {
            Some(dirs.config_dir().join(CONFIG_FILE_NAME))
        } else {
            log::warn!("Unable to resolve project directory; no default calendar options");
            None
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load options from the file.
    pub fn load(&self) -> Result<PartialOptions, ConfigError> {
        let content = std::fs::read_to_string(&self.path)?;
        let options = parse_options(&content)?;
        log::debug!(
            "Loaded calendar options from {:?} ({} unknown)",
            self.path,
            options.unknown.len()
        );
        Ok(options)
    }

    /// Load options if the file exists, otherwise return empty options.
    pub fn load_or_default(&self) -> Result<PartialOptions, ConfigError> {
        if self.path.exists() {
            self.load()
        } else {
            log::info!("No calendar options at {:?}; using defaults", self.path);
            Ok(PartialOptions::default())
        }
    }

    /// Validate and write a full config, creating parent directories.
    pub fn save(&self, config: &CalendarConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&PartialConfig::from(config.clone()))?;
        std::fs::write(&self.path, content)?;
        log::info!("Saved calendar options to {:?}", self.path);
        Ok(())
    }
}
