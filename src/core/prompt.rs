// src/core/prompt.rs

//! Capability contracts the navigator consumes.
//!
//! The navigator never touches the terminal. It hands a list of
//! [`MenuOption`]s to a [`Prompter`] and asks a [`Confirmer`] for yes/no
//! answers. Cancellation is an explicit [`PromptOutcome::Cancelled`] value,
//! not an error and not a process exit.

use crate::constants::{BACK_VALUE, EXIT_VALUE};
use thiserror::Error;

/// Failures of a prompt itself, as opposed to the user backing out.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal Error: {0}")]
    Io(#[from] std::io::Error),
    /// `dialoguer` reported an error.
    #[error("User Interface Error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    /// The blocking prompt task panicked or was aborted.
    #[error("The prompt task stopped unexpectedly: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// The terminal returned an index outside the offered options.
    #[error("The selected index {0} is out of range.")]
    OutOfRange(usize),
}

/// Result of a prompt.
pub type PromptResult<T> = Result<T, PromptError>;

/// The answer to a prompt: a value, or the user backed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    /// The user answered.
    Selected(T),
    /// The user pressed Esc or Ctrl+C.
    Cancelled,
}

impl<T> PromptOutcome<T> {
    /// Returns the selected value, or `None` on cancellation.
    pub fn selected(self) -> Option<T> {
        match self {
            Self::Selected(value) => Some(value),
            Self::Cancelled => None,
        }
    }
}

impl<T> From<Option<T>> for PromptOutcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Cancelled, Self::Selected)
    }
}

/// Identifies an entry of the display list.
///
/// The synthetic entries are separate variants, so a caller-chosen value such
/// as `"__exit"` selects the caller's item and never the synthetic one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceKey {
    /// A real item of the current level, by its `value`.
    Item(String),
    /// Go up one level.
    Back,
    /// Stop the navigator.
    Exit,
}

impl ChoiceKey {
    /// The string form of the key, as shown in debug output.
    pub fn value(&self) -> &str {
        match self {
            Self::Item(value) => value,
            Self::Back => BACK_VALUE,
            Self::Exit => EXIT_VALUE,
        }
    }
}

/// A `{value, label, hint}` triple handed to the prompter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// What the prompter returns when this option is picked.
    pub key: ChoiceKey,
    /// Display text.
    pub label: String,
    /// Dimmed text shown after the label.
    pub hint: Option<String>,
}

impl MenuOption {
    /// Creates an option.
    pub fn new(key: ChoiceKey, label: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            key,
            label: label.into(),
            hint,
        }
    }
}

/// Presents a list of options and returns the one the user picked.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    async fn select(
        &mut self,
        message: &str,
        options: &[MenuOption],
    ) -> PromptResult<PromptOutcome<ChoiceKey>>;

    /// Shows the breadcrumb trail before a prompt.
    fn announce(&mut self, trail: &str) {
        log::info!("{}", trail);
    }
}

/// Asks a yes/no question.
#[allow(async_fn_in_trait)]
pub trait Confirmer {
    async fn confirm(&mut self, message: &str, default: bool) -> PromptResult<PromptOutcome<bool>>;
}

/// Asks for a line of free text. Only the template builder needs this.
#[allow(async_fn_in_trait)]
pub trait TextPrompter {
    async fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
    ) -> PromptResult<PromptOutcome<String>>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_key_values_render_reserved_strings() {
        assert_eq!(ChoiceKey::Back.value(), "__back");
        assert_eq!(ChoiceKey::Exit.value(), "__exit");
        assert_eq!(ChoiceKey::Item("__exit".into()).value(), "__exit");
        // Same text, different key: no collision.
        assert_ne!(ChoiceKey::Item("__exit".into()), ChoiceKey::Exit);
    }

    #[test]
    fn test_outcome_from_option() {
        assert_eq!(PromptOutcome::from(Some(3)), PromptOutcome::Selected(3));
        assert_eq!(PromptOutcome::<u8>::from(None), PromptOutcome::Cancelled);
        assert_eq!(PromptOutcome::Selected("x").selected(), Some("x"));
    }
}
