// src/errors.rs

//! Application-level errors that carry a hint for the user.

use thiserror::Error;

/// Errors the binary reports with a tailored message or exit code.
#[derive(Error, Debug)]
pub enum AppError {
    /// `devbuddy run` was given an unknown name.
    #[error("Plugin '{name}' not found.")]
    PluginNotFound {
        /// The name the user typed.
        name: String,
        /// Every registered plugin name.
        available: Vec<String>,
    },
    /// `menu create` got an empty name.
    #[error("Menu template name is required.")]
    MissingTemplateName,
    /// The user backed out of a one-shot prompt. Exits with status 130.
    #[error("Operation cancelled by user.")]
    Cancelled,
}

impl AppError {
    /// A follow-up suggestion printed under the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::PluginNotFound { available, .. } => Some(format!(
                t!("error.hint.available_plugins"),
                plugins = available.join(", ")
            )),
            Self::MissingTemplateName => Some(t!("error.hint.template_name").to_string()),
            Self::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_not_found_hint_lists_plugins() {
        let err = AppError::PluginNotFound {
            name: "turso".into(),
            available: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "Plugin 'turso' not found.");
        assert!(err.hint().unwrap().contains("a, b"));
        assert!(AppError::Cancelled.hint().is_none());
    }
}
