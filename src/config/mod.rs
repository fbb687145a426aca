use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{currency::Locale, errors::TrackerError, utils};

const TMP_SUFFIX: &str = "tmp";

/// User preferences for the tracker.
///
/// Limits are kept as loose JSON values; they pass through the same
/// self-correcting validation as limits given in code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "Config::default_calories_limit")]
    pub calories_limit: Value,
    #[serde(default = "Config::default_cash_limit")]
    pub cash_limit: Value,
    #[serde(default = "Config::default_currency_value")]
    pub default_currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            calories_limit: Self::default_calories_limit(),
            cash_limit: Self::default_cash_limit(),
            default_currency: Self::default_currency_value(),
        }
    }
}

impl Config {
    pub fn default_calories_limit() -> Value {
        Value::from(2000)
    }

    pub fn default_cash_limit() -> Value {
        Value::from(1000)
    }

    pub fn default_currency_value() -> String {
        "rub".into()
    }
}

/// Loads and stores [`Config`] as pretty JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for the default location (see [`utils::config_file`]).
    pub fn new() -> Self {
        Self::with_path(utils::config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing files yield the defaults; malformed files are an error.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
