// src/core/templates.rs

//! # Menu Templates
//!
//! User-defined menu trees saved as JSON. A template can be browsed with the
//! regular navigator: submenus become branches, actions become leaves that
//! print their message, and links are inert entries.

use crate::{
    constants::TEMPLATE_EXTENSION,
    core::prompt::{
        ChoiceKey, Confirmer, MenuOption, PromptError, PromptOutcome, Prompter, TextPrompter,
    },
    models::{self, MenuItem},
    system::output,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("static regex is valid");
    static ref TEMPLATE_NAME: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex is valid");
}

/// Errors reading, writing or authoring templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Reading or writing a template file failed.
    #[error("Filesystem Error on '{path}': {source}")]
    Io {
        /// The file or directory involved.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A template file is not valid template JSON.
    #[error("Template '{path}' is not valid JSON: {source}")]
    Parse {
        /// The template file.
        path: String,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A template could not be turned into JSON.
    #[error("Could not serialize template: {0}")]
    Serialize(#[source] serde_json::Error),
    /// No `<name>.json` in the templates directory.
    #[error("Menu template '{name}' not found in '{dir}'.")]
    NotFound {
        /// The requested template.
        name: String,
        /// The directory searched.
        dir: String,
    },
    /// The name has characters outside `[A-Za-z0-9_-]`.
    #[error("Invalid template name '{0}'. Use letters, digits, '-' and '_' only.")]
    InvalidName(String),
    /// A prompt failed while authoring.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Result of a template operation.
pub type TemplateResult<T> = Result<T, TemplateError>;

// --- Data Model ---

/// A saved menu tree, stored as `<name>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTemplate {
    /// File stem and display name.
    pub name: String,
    /// Root level items.
    pub items: Vec<TemplateItem>,
}

/// One entry of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateItem {
    /// Identifier among siblings.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Optional hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// What selecting the item does.
    #[serde(flatten)]
    pub kind: TemplateKind,
}

/// The `"type"` of a template item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TemplateKind {
    /// Prints `message` when selected.
    Action {
        /// The text to print.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Opens `items` as a nested menu.
    Submenu {
        /// The nested items.
        #[serde(default)]
        items: Vec<TemplateItem>,
    },
    /// A placeholder that does nothing when selected.
    Link,
}

impl MenuTemplate {
    /// Converts the template into navigator items.
    pub fn to_menu_items(&self) -> Vec<MenuItem> {
        to_menu_items(&self.items)
    }

    /// Total number of items, nested ones included.
    pub fn item_count(&self) -> usize {
        fn count(items: &[TemplateItem]) -> usize {
            items
                .iter()
                .map(|item| match &item.kind {
                    TemplateKind::Submenu { items } => 1 + count(items),
                    _ => 1,
                })
                .sum()
        }
        count(&self.items)
    }
}

fn to_menu_items(items: &[TemplateItem]) -> Vec<MenuItem> {
    items
        .iter()
        .map(|item| {
            let menu_item = match &item.kind {
                TemplateKind::Submenu { items } => {
                    MenuItem::branch(item.value.clone(), item.label.clone(), to_menu_items(items))
                }
                TemplateKind::Action { message } => {
                    let label = item.label.clone();
                    let message = message.clone();
                    MenuItem::leaf(
                        item.value.clone(),
                        item.label.clone(),
                        models::action(move || {
                            let label = label.clone();
                            let message = message.clone();
                            async move {
                                match message {
                                    Some(message) => output::info(&message),
                                    None => output::warning(&format!(
                                        t!("templates.info.no_action"),
                                        label = label
                                    )),
                                }
                                Ok(())
                            }
                        }),
                    )
                }
                TemplateKind::Link => MenuItem::inert(item.value.clone(), item.label.clone()),
            };
            match &item.description {
                Some(description) => menu_item.with_description(description.clone()),
                None => menu_item,
            }
        })
        .collect()
}

// --- Naming ---

/// Derives an item value from its label: lowercase, whitespace runs become `_`.
pub fn slugify(label: &str) -> String {
    WHITESPACE_RUN
        .replace_all(label.trim(), "_")
        .to_lowercase()
}

/// Checks that `name` is usable as a file stem.
pub fn validate_template_name(name: &str) -> TemplateResult<()> {
    if TEMPLATE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(TemplateError::InvalidName(name.to_string()))
    }
}

fn template_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
}

// --- Storage ---

/// Names of the templates saved in `dir`, sorted. A missing directory is empty.
///
/// Files whose stem is not a valid template name are left out, since
/// [`load_template`] would reject them.
pub fn list_templates(dir: &Path) -> TemplateResult<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| TemplateError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(TEMPLATE_EXTENSION)
        })
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
        .filter(|name| {
            let usable = TEMPLATE_NAME.is_match(name);
            if !usable {
                log::debug!("Ignoring '{}.{}': not a valid template name.", name, TEMPLATE_EXTENSION);
            }
            usable
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Reads `<dir>/<name>.json`.
pub fn load_template(dir: &Path, name: &str) -> TemplateResult<MenuTemplate> {
    validate_template_name(name)?;
    let path = template_path(dir, name);
    if !path.exists() {
        return Err(TemplateError::NotFound {
            name: name.to_string(),
            dir: dir.display().to_string(),
        });
    }

    let content = fs::read_to_string(&path).map_err(|source| TemplateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Writes `template` to `<dir>/<name>.json`, creating `dir` if needed.
pub fn save_template(dir: &Path, template: &MenuTemplate) -> TemplateResult<PathBuf> {
    validate_template_name(&template.name)?;
    fs::create_dir_all(dir).map_err(|source| TemplateError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let path = template_path(dir, &template.name);
    let content = serde_json::to_string_pretty(template).map_err(TemplateError::Serialize)?;
    fs::write(&path, content).map_err(|source| TemplateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Saved menu template to '{}'.", path.display());
    Ok(path)
}

// --- Interactive Authoring ---

fn item_type_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new(ChoiceKey::Item("action".into()), t!("templates.type.action"), None),
        MenuOption::new(ChoiceKey::Item("submenu".into()), t!("templates.type.submenu"), None),
        MenuOption::new(ChoiceKey::Item("link".into()), t!("templates.type.link"), None),
    ]
}

/// Asks for the items of one menu level, recursing into submenus.
///
/// Cancelling any question ends the current level and keeps the items that
/// were completed so far.
pub async fn author_items<P, C, T>(
    prompter: &mut P,
    confirmer: &mut C,
    input: &mut T,
) -> TemplateResult<Vec<TemplateItem>>
where
    P: Prompter,
    C: Confirmer,
    T: TextPrompter,
{
    let mut items = Vec::new();

    loop {
        // 1. Label (required).
        let Some(label) = input.input(t!("templates.prompt.label"), None).await?.selected() else {
            break;
        };
        let label = label.trim().to_string();
        if label.is_empty() {
            output::warning(t!("templates.warning.label_required"));
            continue;
        }

        // 2. Value, defaulting to the slug of the label.
        let suggested = slugify(&label);
        let Some(value) = input
            .input(t!("templates.prompt.value"), Some(&suggested))
            .await?
            .selected()
        else {
            break;
        };
        let value = match value.trim() {
            "" => suggested,
            v => v.to_string(),
        };

        // 3. Optional description.
        let Some(description) = input
            .input(t!("templates.prompt.description"), None)
            .await?
            .selected()
        else {
            break;
        };
        let description = Some(description.trim().to_string()).filter(|d| !d.is_empty());

        // 4. Item type.
        let PromptOutcome::Selected(kind_key) = prompter
            .select(t!("templates.prompt.type"), &item_type_options())
            .await?
        else {
            break;
        };

        let kind = match kind_key.value() {
            "submenu" => {
                output::info(&format!(t!("templates.info.adding_submenu"), label = label));
                let children = Box::pin(author_items(prompter, confirmer, input)).await?;
                TemplateKind::Submenu { items: children }
            }
            "link" => TemplateKind::Link,
            _ => {
                let Some(message) = input
                    .input(t!("templates.prompt.message"), None)
                    .await?
                    .selected()
                else {
                    break;
                };
                TemplateKind::Action {
                    message: Some(message.trim().to_string()).filter(|m| !m.is_empty()),
                }
            }
        };

        items.push(TemplateItem {
            value,
            label,
            description,
            kind,
        });

        // 5. Another one?
        match confirmer.confirm(t!("templates.prompt.add_another"), true).await? {
            PromptOutcome::Selected(true) => {}
            _ => break,
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::scripted::{ScriptedConfirmer, ScriptedInput, ScriptedPrompter};
    use crate::models::MenuItemKind;
    use tempfile::tempdir;

    fn sample() -> MenuTemplate {
        MenuTemplate {
            name: "sample".into(),
            items: vec![
                TemplateItem {
                    value: "db".into(),
                    label: "Database".into(),
                    description: Some("Database helpers".into()),
                    kind: TemplateKind::Submenu {
                        items: vec![TemplateItem {
                            value: "create".into(),
                            label: "Create".into(),
                            description: None,
                            kind: TemplateKind::Action {
                                message: Some("creating".into()),
                            },
                        }],
                    },
                },
                TemplateItem {
                    value: "docs".into(),
                    label: "Docs".into(),
                    description: None,
                    kind: TemplateKind::Link,
                },
            ],
        }
    }

    fn text(s: &str) -> PromptOutcome<String> {
        PromptOutcome::Selected(s.to_string())
    }

    fn kind(s: &str) -> PromptOutcome<ChoiceKey> {
        PromptOutcome::Selected(ChoiceKey::Item(s.to_string()))
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Create New Menu"), "create_new_menu");
        assert_eq!(slugify("  Tabs\tand   spaces "), "tabs_and_spaces");
        assert_eq!(slugify("single"), "single");
    }

    #[test]
    fn test_template_names_are_validated() {
        assert!(validate_template_name("my-menu_2").is_ok());
        assert!(validate_template_name("").is_err());
        assert!(validate_template_name("../escape").is_err());
        assert!(validate_template_name("with space").is_err());
    }

    #[test]
    fn test_json_uses_type_tag() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["items"][0]["type"], "submenu");
        assert_eq!(json["items"][0]["items"][0]["type"], "action");
        assert_eq!(json["items"][0]["items"][0]["message"], "creating");
        assert_eq!(json["items"][1]["type"], "link");
        assert!(json["items"][1].get("description").is_none());
    }

    #[test]
    fn test_action_without_message_parses() {
        let parsed: TemplateItem =
            serde_json::from_str(r#"{"value":"a","label":"A","type":"action"}"#).unwrap();
        assert_eq!(parsed.kind, TemplateKind::Action { message: None });
    }

    #[test]
    fn test_save_list_and_load() {
        let dir = tempdir().unwrap();
        let templates_dir = dir.path().join("menus");
        assert!(list_templates(&templates_dir).unwrap().is_empty());

        let path = save_template(&templates_dir, &sample()).unwrap();
        assert!(path.ends_with("sample.json"));
        fs::write(templates_dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(list_templates(&templates_dir).unwrap(), vec!["sample"]);
        assert_eq!(load_template(&templates_dir, "sample").unwrap(), sample());
    }

    #[test]
    fn test_list_skips_files_that_cannot_be_loaded_by_name() {
        let dir = tempdir().unwrap();
        save_template(dir.path(), &sample()).unwrap();
        let content = fs::read_to_string(dir.path().join("sample.json")).unwrap();
        fs::write(dir.path().join("my menu.json"), content).unwrap();

        let names = list_templates(dir.path()).unwrap();

        assert_eq!(names, vec!["sample"]);
        for name in &names {
            assert!(load_template(dir.path(), name).is_ok());
        }
    }

    #[test]
    fn test_load_missing_and_corrupt_templates() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_template(dir.path(), "ghost"),
            Err(TemplateError::NotFound { .. })
        ));

        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        assert!(matches!(
            load_template(dir.path(), "broken"),
            Err(TemplateError::Parse { .. })
        ));
    }

    #[test]
    fn test_conversion_to_menu_items() {
        let template = sample();
        let items = template.to_menu_items();
        assert_eq!(template.item_count(), 3);
        assert_eq!(items.len(), 2);

        match &items[0].kind {
            MenuItemKind::Branch(children) => {
                assert_eq!(children.len(), 1);
                assert!(children[0].is_leaf());
                assert_eq!(children[0].value, "create");
            }
            other => panic!("expected a branch, got {:?}", other),
        }
        assert_eq!(items[0].description.as_deref(), Some("Database helpers"));
        assert!(matches!(items[1].kind, MenuItemKind::Inert));
    }

    #[tokio::test]
    async fn test_author_items_builds_nested_levels() {
        // Root: "Database" submenu containing one action, then a root link.
        let mut prompter = ScriptedPrompter::new(vec![kind("submenu"), kind("action"), kind("link")]);
        let mut confirmer = ScriptedConfirmer::new(vec![
            PromptOutcome::Selected(false), // no more items inside "Database"
            PromptOutcome::Selected(true),  // another root item
            PromptOutcome::Selected(false), // done
        ]);
        let mut input = ScriptedInput::new(vec![
            text("Database"),
            text(""), // accept the suggested value
            text("Database helpers"),
            text("Create Table"),
            text("make_table"),
            text(""),
            text("Table created"),
            text("Docs"),
            text(""),
            text(""),
        ]);

        let items = author_items(&mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, "database");
        assert_eq!(items[0].description.as_deref(), Some("Database helpers"));
        match &items[0].kind {
            TemplateKind::Submenu { items: children } => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].value, "make_table");
                assert_eq!(children[0].description, None);
                assert_eq!(
                    children[0].kind,
                    TemplateKind::Action {
                        message: Some("Table created".into())
                    }
                );
            }
            other => panic!("expected a submenu, got {:?}", other),
        }
        assert_eq!(items[1].kind, TemplateKind::Link);
        assert_eq!(items[1].value, "docs");
    }

    #[tokio::test]
    async fn test_author_items_stops_on_cancel_and_keeps_finished_items() {
        let mut prompter = ScriptedPrompter::new(vec![kind("link")]);
        let mut confirmer = ScriptedConfirmer::new(vec![PromptOutcome::Selected(true)]);
        let mut input = ScriptedInput::new(vec![
            text("Home"),
            text(""),
            text(""),
            PromptOutcome::Cancelled,
        ]);

        let items = author_items(&mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Home");
    }

    #[tokio::test]
    async fn test_author_items_requires_a_label() {
        let mut prompter = ScriptedPrompter::new(vec![kind("link")]);
        let mut confirmer = ScriptedConfirmer::new(vec![PromptOutcome::Selected(false)]);
        let mut input = ScriptedInput::new(vec![text("   "), text("Real"), text(""), text("")]);

        let items = author_items(&mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value, "real");
    }
}
