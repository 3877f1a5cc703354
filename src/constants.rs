// src/constants.rs

//! Names and reserved strings shared across the crate.

/// The name of the DevBuddy configuration directory (inside the system config dir).
pub const APP_DIR_NAME: &str = "devbuddy";

/// The name of the settings file (inside the configuration directory).
pub const SETTINGS_FILENAME: &str = "config.toml";

/// Default location of saved menu templates, relative to the configuration directory.
pub const TEMPLATES_SUBDIR: &str = "templates/menus";

/// File extension used for saved menu templates.
pub const TEMPLATE_EXTENSION: &str = "json";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "DEVBUDDY_CONFIG_DIR";

/// Environment variable read by the logger (falls back to `RUST_LOG`).
pub const LOG_ENV: &str = "DEVBUDDY_LOG";

/// Display value of the synthetic "Go Back" entry.
pub const BACK_VALUE: &str = "__back";

/// Display value of the synthetic "Exit" entry.
pub const EXIT_VALUE: &str = "__exit";

/// Separator placed between breadcrumb labels.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// The category name that means "show every category".
pub const ALL_CATEGORIES: &str = "All";
