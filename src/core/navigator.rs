// src/core/navigator.rs

//! # Menu Navigator
//!
//! Drives a tree of [`MenuItem`]s as a loop of prompts. The navigator keeps a
//! stack of visited levels, shows a breadcrumb trail, appends the synthetic
//! "Go Back" and "Exit" entries, and dispatches the user's choice:
//!
//! - a **branch** pushes its children as the new current level;
//! - a **leaf** runs its action, then asks "Return to menu?";
//! - **Go Back** pops one level, **Exit** or a cancelled prompt stops the loop.
//!
//! The navigator is single threaded and strictly sequential: it only ever
//! awaits the prompter, a leaf action, or the confirmer, one at a time.

use crate::{
    constants::BREADCRUMB_SEPARATOR,
    core::prompt::{ChoiceKey, Confirmer, MenuOption, PromptError, PromptOutcome, Prompter},
    models::{MenuItem, MenuItemKind, MenuLevel},
};
use thiserror::Error;

/// Why [`MenuNavigator::run`] failed.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// The prompter or confirmer failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// A leaf action returned an error.
    #[error("Action '{label}' failed: {source}")]
    Action {
        /// Label of the item whose action failed.
        label: String,
        /// The action's error.
        #[source]
        source: anyhow::Error,
    },
}

/// Result of a navigation run.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Why [`MenuNavigator::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user chose "Exit".
    Exited,
    /// The user cancelled a prompt or the post-action confirmation.
    Cancelled,
    /// The user answered "no" to "Return to menu?".
    Declined,
}

// --- Navigation State ---

/// The levels the user has descended through.
///
/// The root level is stored apart from the descended levels, and every
/// descended level is stored together with its breadcrumb label, so the
/// history can never be empty and there is always exactly one breadcrumb per
/// non-root level.
#[derive(Debug, Clone)]
pub struct NavigationState {
    root: MenuLevel,
    descended: Vec<(String, MenuLevel)>,
}

impl NavigationState {
    /// A state positioned at `root`.
    pub fn new(root: MenuLevel) -> Self {
        Self {
            root,
            descended: Vec::new(),
        }
    }

    /// The level at the top of the history.
    pub fn current(&self) -> &MenuLevel {
        self.descended
            .last()
            .map(|(_, level)| level)
            .unwrap_or(&self.root)
    }

    /// Number of levels on the history, root included.
    pub fn depth(&self) -> usize {
        self.descended.len() + 1
    }

    /// True when nothing has been descended into.
    pub fn is_at_root(&self) -> bool {
        self.descended.is_empty()
    }

    /// Breadcrumb labels, outermost first.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        self.descended.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// The breadcrumbs joined for display, or `None` at the root.
    pub fn trail(&self) -> Option<String> {
        if self.is_at_root() {
            return None;
        }
        Some(self.breadcrumbs().join(BREADCRUMB_SEPARATOR))
    }

    /// Pushes `level` as the current level, labelled `label`.
    pub fn descend(&mut self, label: impl Into<String>, level: MenuLevel) {
        self.descended.push((label.into(), level));
    }

    /// Pops the current level. Returns `false` (and does nothing) at the root.
    pub fn ascend(&mut self) -> bool {
        self.descended.pop().is_some()
    }

    /// Builds the display list for the current level: its items in order,
    /// then "Go Back" when not at the root, then "Exit".
    pub fn display_options(&self) -> Vec<MenuOption> {
        let current = self.current();
        let mut options: Vec<MenuOption> = current
            .iter()
            .map(|item| {
                MenuOption::new(
                    ChoiceKey::Item(item.value.clone()),
                    item.label.clone(),
                    item.description.clone(),
                )
            })
            .collect();

        if !self.is_at_root() {
            options.push(MenuOption::new(
                ChoiceKey::Back,
                t!("menu.choice.back"),
                Some(t!("menu.choice.back_hint").to_string()),
            ));
        }

        options.push(MenuOption::new(
            ChoiceKey::Exit,
            t!("menu.choice.exit"),
            Some(t!("menu.choice.exit_hint").to_string()),
        ));

        options
    }
}

// --- Navigator ---

/// Runs a menu tree until the user exits, cancels, or declines to return.
#[derive(Debug, Clone)]
pub struct MenuNavigator {
    state: NavigationState,
    confirm_default: bool,
}

impl MenuNavigator {
    /// Creates a navigator positioned at `root`. An empty root only offers "Exit".
    pub fn new(root: impl Into<Vec<MenuItem>>) -> Self {
        let root: Vec<MenuItem> = root.into();
        Self::from_level(root.into())
    }

    /// Like [`MenuNavigator::new`], for a level that is already shared.
    pub fn from_level(root: MenuLevel) -> Self {
        Self {
            state: NavigationState::new(root),
            confirm_default: true,
        }
    }

    /// Sets the pre-selected answer of the "Return to menu?" question.
    pub fn with_confirm_default(mut self, confirm_default: bool) -> Self {
        self.confirm_default = confirm_default;
        self
    }

    /// The main loop. Consumes the navigator: its state lives exactly as long
    /// as one run.
    ///
    /// # Errors
    /// Prompter failures and leaf action failures are returned as-is; the
    /// navigator does not retry or swallow them.
    pub async fn run<P, C>(mut self, prompter: &mut P, confirmer: &mut C) -> NavigationResult<Termination>
    where
        P: Prompter,
        C: Confirmer,
    {
        loop {
            // 1. Breadcrumbs.
            if let Some(trail) = self.state.trail() {
                prompter.announce(&format!(t!("menu.info.location"), trail = trail));
            }

            // 2. Snapshot the level being offered. Dispatch resolves against it.
            let level = self.state.current().clone();
            let options = self.state.display_options();

            // 3. Prompt.
            let selected = match prompter.select(t!("menu.prompt.select"), &options).await? {
                PromptOutcome::Selected(key) => key,
                PromptOutcome::Cancelled => {
                    log::debug!("Menu prompt cancelled at depth {}.", self.state.depth());
                    return Ok(Termination::Cancelled);
                }
            };

            // 4. Dispatch.
            match selected {
                ChoiceKey::Back => {
                    if !self.state.ascend() {
                        log::debug!("'Go Back' received at the root level; ignoring.");
                    }
                }
                ChoiceKey::Exit => return Ok(Termination::Exited),
                ChoiceKey::Item(value) => {
                    // Duplicate values resolve to the first match.
                    let Some(item) = level.iter().find(|item| item.value == value) else {
                        log::debug!("No menu item matches '{}'; ignoring selection.", value);
                        continue;
                    };

                    match &item.kind {
                        MenuItemKind::Branch(children) => {
                            log::debug!("Descending into '{}'.", item.label);
                            self.state.descend(item.label.clone(), children.clone());
                        }
                        MenuItemKind::Leaf(action) => {
                            log::debug!("Running action for '{}'.", item.label);
                            action().await.map_err(|source| NavigationError::Action {
                                label: item.label.clone(),
                                source,
                            })?;

                            match confirmer
                                .confirm(t!("menu.prompt.return_to_menu"), self.confirm_default)
                                .await?
                            {
                                PromptOutcome::Selected(true) => {}
                                PromptOutcome::Selected(false) => return Ok(Termination::Declined),
                                PromptOutcome::Cancelled => return Ok(Termination::Cancelled),
                            }
                        }
                        MenuItemKind::Inert => {
                            log::debug!("'{}' has no action or submenu.", item.label);
                        }
                    }
                }
            }
        }
    }
}
