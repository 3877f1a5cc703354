// src/core/paths.rs

//! Locations of DevBuddy's files on disk.

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV, SETTINGS_FILENAME, TEMPLATES_SUBDIR};
use lazy_static::lazy_static;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

lazy_static! {
    static ref DEVBUDDY_CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Errors resolving DevBuddy's directories.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The config directory could not be created.
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        /// The directory that was being created.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// `~` or a `$VAR` in a configured path could not be expanded.
    #[error("Failed to expand path '{template}': {message}")]
    Expansion {
        /// The path as written in the settings.
        template: String,
        /// Why expansion failed.
        message: String,
    },
}

/// Returns the DevBuddy configuration directory (`~/.config/devbuddy`, or
/// `$DEVBUDDY_CONFIG_DIR` when set). Creates it if it doesn't exist.
///
/// Memoized: the first call computes and caches the path, later calls return
/// the cached value.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    let mut cached_path_guard = DEVBUDDY_CONFIG_DIR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let override_dir = std::env::var(CONFIG_DIR_ENV).ok();
    let config_path = resolve_config_dir(override_dir.as_deref())?;
    *cached_path_guard = Some(config_path.clone());

    Ok(config_path)
}

/// Computes and creates the configuration directory, honouring an optional override.
pub fn resolve_config_dir(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    // 1. Pick the location.
    let config_path = match override_dir.filter(|s| !s.trim().is_empty()) {
        Some(dir) => expand_path(dir)?,
        None => dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join(APP_DIR_NAME),
    };

    // 2. Ensure it exists.
    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|e| PathError::ConfigDirCreation {
            path: config_path.display().to_string(),
            source: e,
        })?;
    }

    Ok(config_path)
}

/// Path of the settings file inside the configuration directory.
pub fn get_settings_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILENAME))
}

/// Default directory for saved menu templates.
pub fn default_templates_dir() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(TEMPLATES_SUBDIR))
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path.
pub fn expand_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_config_dir_creates_override() {
        let root = tempdir().unwrap();
        let target = root.path().join("nested").join("devbuddy");
        let target_str = target.to_str().unwrap();

        let resolved = resolve_config_dir(Some(target_str)).unwrap();

        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_expand_path_keeps_plain_paths() {
        let expanded = expand_path("/tmp/devbuddy/templates").unwrap();
        assert_eq!(expanded, PathBuf::from("/tmp/devbuddy/templates"));
    }

    #[test]
    fn test_expand_path_reports_undefined_variables() {
        let result = expand_path("$DEVBUDDY_SURELY_UNDEFINED_VAR_42/x");
        assert!(matches!(result, Err(PathError::Expansion { .. })));
    }
}
