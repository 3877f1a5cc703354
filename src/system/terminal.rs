// src/system/terminal.rs

//! `dialoguer`-backed implementations of the prompt capabilities.
//!
//! `dialoguer` blocks on stdin, so every prompt runs on tokio's blocking pool
//! and the navigator simply awaits it.

use crate::{
    core::{
        prompt::{
            ChoiceKey, Confirmer, MenuOption, PromptError, PromptOutcome, PromptResult, Prompter,
            TextPrompter,
        },
        settings::ThemeKind,
    },
    system::output,
};
use colored::Colorize;
use dialoguer::{
    Confirm, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use std::io::ErrorKind;

/// The interactive terminal. Implements every prompt trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    theme: ThemeKind,
}

impl Terminal {
    /// A terminal using `theme` for every prompt.
    pub fn new(theme: ThemeKind) -> Self {
        Self { theme }
    }
}

fn build_theme(kind: ThemeKind) -> Box<dyn Theme> {
    match kind {
        ThemeKind::Colorful => Box::new(ColorfulTheme::default()),
        ThemeKind::Simple => Box::new(SimpleTheme),
    }
}

/// Renders an option as a single line: the label followed by a dimmed hint.
fn render_option(option: &MenuOption) -> String {
    match &option.hint {
        Some(hint) if !hint.is_empty() => format!("{}  {}", option.label, hint.dimmed()),
        _ => option.label.clone(),
    }
}

/// Runs a blocking `dialoguer` interaction and maps Esc/Ctrl+C to `Cancelled`.
async fn run_blocking<T, F>(interaction: F) -> PromptResult<PromptOutcome<T>>
where
    F: FnOnce() -> dialoguer::Result<Option<T>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(interaction).await? {
        Ok(answer) => Ok(answer.into()),
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
            log::debug!("Prompt interrupted: {}", e);
            Ok(PromptOutcome::Cancelled)
        }
        Err(e) => Err(PromptError::from(e)),
    }
}

impl Prompter for Terminal {
    async fn select(
        &mut self,
        message: &str,
        options: &[MenuOption],
    ) -> PromptResult<PromptOutcome<ChoiceKey>> {
        let items: Vec<String> = options.iter().map(render_option).collect();
        let message = message.to_string();
        let kind = self.theme;

        let outcome = run_blocking(move || {
            let theme = build_theme(kind);
            Select::with_theme(theme.as_ref())
                .with_prompt(message)
                .items(&items)
                .default(0)
                .interact_opt()
        })
        .await?;

        match outcome {
            PromptOutcome::Selected(index) => options
                .get(index)
                .map(|option| PromptOutcome::Selected(option.key.clone()))
                .ok_or(PromptError::OutOfRange(index)),
            PromptOutcome::Cancelled => Ok(PromptOutcome::Cancelled),
        }
    }

    fn announce(&mut self, trail: &str) {
        output::info(trail);
    }
}

impl Confirmer for Terminal {
    async fn confirm(&mut self, message: &str, default: bool) -> PromptResult<PromptOutcome<bool>> {
        let message = message.to_string();
        let kind = self.theme;

        run_blocking(move || {
            let theme = build_theme(kind);
            Confirm::with_theme(theme.as_ref())
                .with_prompt(message)
                .default(default)
                .interact_opt()
        })
        .await
    }
}

impl TextPrompter for Terminal {
    async fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
    ) -> PromptResult<PromptOutcome<String>> {
        let message = message.to_string();
        let default = default.map(str::to_string);
        let kind = self.theme;

        run_blocking(move || {
            let theme = build_theme(kind);
            let mut input = Input::<String>::with_theme(theme.as_ref())
                .with_prompt(message)
                .allow_empty(true);
            if let Some(default) = default {
                input = input.default(default);
            }
            input.interact_text().map(Some)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_option_appends_hint() {
        colored::control::set_override(false);
        let with_hint = MenuOption::new(ChoiceKey::Exit, "Exit", Some("Exit the menu".into()));
        assert_eq!(render_option(&with_hint), "Exit  Exit the menu");

        let bare = MenuOption::new(ChoiceKey::Item("a".into()), "A", None);
        assert_eq!(render_option(&bare), "A");

        let empty_hint = MenuOption::new(ChoiceKey::Back, "Back", Some(String::new()));
        assert_eq!(render_option(&empty_hint), "Back");
    }

    #[tokio::test]
    async fn test_interrupted_interaction_maps_to_cancelled() {
        let outcome: PromptOutcome<usize> = run_blocking(|| {
            Err(dialoguer::Error::IO(std::io::Error::new(
                ErrorKind::Interrupted,
                "ctrl-c",
            )))
        })
        .await
        .unwrap();
        assert_eq!(outcome, PromptOutcome::Cancelled);

        let escaped: PromptOutcome<usize> = run_blocking(|| Ok(None)).await.unwrap();
        assert_eq!(escaped, PromptOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_other_io_errors_propagate() {
        let result: PromptResult<PromptOutcome<bool>> = run_blocking(|| {
            Err(dialoguer::Error::IO(std::io::Error::new(
                ErrorKind::BrokenPipe,
                "gone",
            )))
        })
        .await;
        assert!(matches!(result, Err(PromptError::Dialoguer(_))));
    }
}
