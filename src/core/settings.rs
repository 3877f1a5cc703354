// src/core/settings.rs

//! # Settings
//!
//! User preferences persisted as TOML in the configuration directory. A missing
//! file means "all defaults"; the file is only written by `devbuddy config set`.

use crate::{
    constants::ALL_CATEGORIES,
    core::paths::{self, PathError},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// Errors loading, saving or editing settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("Could not read settings file '{path}': {source}")]
    Read {
        /// The settings file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The settings file or its directory could not be written.
    #[error("Could not write settings file '{path}': {source}")]
    Write {
        /// The file or directory being written.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`Settings`].
    #[error("Settings file '{path}' is not valid TOML: {source}")]
    Parse {
        /// The settings file.
        path: String,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The settings could not be turned into TOML.
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// `get`/`set` was given a key not in [`SETTING_KEYS`].
    #[error("Unknown setting '{0}'.")]
    UnknownKey(String),
    /// `set` was given a value the key does not accept.
    #[error("Invalid value '{value}' for '{key}' (expected {expected}).")]
    InvalidValue {
        /// The setting being changed.
        key: String,
        /// The rejected value.
        value: String,
        /// What the key accepts.
        expected: &'static str,
    },
    /// The config directory could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Result of a settings operation.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Every key accepted by [`Settings::get`] and [`Settings::set`].
pub const SETTING_KEYS: &[&str] = &["theme", "default_category", "confirm_default", "templates_dir"];

/// Prompt styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// `dialoguer`'s `ColorfulTheme`.
    #[default]
    #[serde(alias = "default")]
    Colorful,
    /// `dialoguer`'s `SimpleTheme`, for terminals without color.
    Simple,
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colorful => f.write_str("colorful"),
            Self::Simple => f.write_str("simple"),
        }
    }
}

impl FromStr for ThemeKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "default" is the name the first releases used.
            "colorful" | "default" => Ok(Self::Colorful),
            "simple" => Ok(Self::Simple),
            _ => Err(SettingsError::InvalidValue {
                key: "theme".to_string(),
                value: s.to_string(),
                expected: "'colorful' or 'simple'",
            }),
        }
    }
}

/// The contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prompt styling.
    pub theme: ThemeKind,
    /// Category shown at the root of the main menu, or `"All"`.
    #[serde(alias = "defaultCategory")]
    pub default_category: String,
    /// Pre-selected answer of "Return to menu?".
    #[serde(alias = "confirmDefault")]
    pub confirm_default: bool,
    /// Where menu templates are saved. Supports `~` and `$VAR`.
    #[serde(alias = "templatesDir", skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            default_category: ALL_CATEGORIES.to_string(),
            confirm_default: true,
            templates_dir: None,
        }
    }
}

/// Accepts both `default_category` and the legacy `defaultCategory` spelling.
fn normalize_key(key: &str) -> SettingsResult<&'static str> {
    match key.trim() {
        "theme" => Ok("theme"),
        "default_category" | "defaultCategory" => Ok("default_category"),
        "confirm_default" | "confirmDefault" => Ok("confirm_default"),
        "templates_dir" | "templatesDir" => Ok("templates_dir"),
        other => Err(SettingsError::UnknownKey(other.to_string())),
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            log::debug!("No settings file at '{}'; using defaults.", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads settings from the standard location.
    pub fn load_default() -> SettingsResult<Self> {
        Self::load(&paths::get_settings_path()?)
    }

    /// Writes the settings to `path`, creating its directory.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// The string form of one setting. `templates_dir` is empty when unset.
    pub fn get(&self, key: &str) -> SettingsResult<String> {
        Ok(match normalize_key(key)? {
            "theme" => self.theme.to_string(),
            "default_category" => self.default_category.clone(),
            "confirm_default" => self.confirm_default.to_string(),
            _ => self.templates_dir.clone().unwrap_or_default(),
        })
    }

    /// Updates one setting from its string form. An empty `templates_dir`
    /// resets it to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        match normalize_key(key)? {
            "theme" => self.theme = value.parse()?,
            "default_category" => {
                let value = value.trim();
                self.default_category = if value.is_empty() {
                    ALL_CATEGORIES.to_string()
                } else {
                    value.to_string()
                };
            }
            "confirm_default" => {
                self.confirm_default = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "y" | "1" => true,
                    "false" | "no" | "n" | "0" => false,
                    _ => {
                        return Err(SettingsError::InvalidValue {
                            key: "confirm_default".to_string(),
                            value: value.to_string(),
                            expected: "true or false",
                        });
                    }
                }
            }
            _ => {
                let value = value.trim();
                self.templates_dir = (!value.is_empty()).then(|| value.to_string());
            }
        }
        Ok(())
    }

    /// All settings as `(key, value)` pairs, in [`SETTING_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        SETTING_KEYS
            .iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }

    /// The directory holding saved menu templates.
    pub fn templates_dir(&self) -> SettingsResult<PathBuf> {
        match &self.templates_dir {
            Some(dir) => Ok(paths::expand_path(dir)?),
            None => Ok(paths::default_templates_dir()?),
        }
    }
}
