//! Layered configuration for the study tracker.
//!
//! Sources, highest priority first:
//! 1. Command-line flags (applied by the caller after loading)
//! 2. Environment variables (`STUDY_TRACKER_*`, `__` between sections)
//! 3. `./study-tracker.toml`
//! 4. `~/.config/study-tracker/config.toml`
//! 5. Built-in defaults
//!
//! `STUDY_TRACKER_RULES__MAX_MINUTES=120` maps to `rules.max_minutes`.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use study_core::model::{DurationBounds, ValidationRules};
use thiserror::Error;

const ENV_PREFIX: &str = "STUDY_TRACKER_";
const LOCAL_CONFIG_FILE: &str = "study-tracker.toml";
/// `STUDY_TRACKER_LOG` is the log filter, not the `[log]` section.
pub const LOG_FILTER_ENV: &str = "STUDY_TRACKER_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// CSV file holding the study log.
    pub path: PathBuf,
    /// Where the UI export action writes its copy.
    pub export_path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("study_log.csv"),
            export_path: PathBuf::from("study_log_export.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub require_notes: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let bounds = DurationBounds::default();
        Self {
            min_minutes: bounds.min(),
            max_minutes: bounds.max(),
            require_notes: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

impl TrackerConfig {
    /// Load from every file and environment source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("study-tracker").join("config.toml"))
    }

    /// The entry validation rules these settings describe.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or inverted range.
    pub fn validation_rules(&self) -> Result<ValidationRules, ConfigError> {
        let bounds = DurationBounds::new(self.rules.min_minutes, self.rules.max_minutes).map_err(
            |err| ConfigError::InvalidValue {
                field: "rules.max_minutes".into(),
                reason: err.to_string(),
            },
        )?;
        Ok(ValidationRules {
            bounds,
            require_notes: self.rules.require_notes,
        })
    }
}
