// src/plugins/mod.rs

//! # Plugins
//!
//! Every tool DevBuddy offers is a plugin: a name, a category and an async
//! action. The registry below is the single source of truth; the main menu,
//! `devbuddy list` and `devbuddy run <plugin>` are all derived from it.
//!
//! To add a plugin, write an `fn() -> ActionFuture` in one of the submodules
//! and add a `PluginDefinition` entry to [`PLUGIN_REGISTRY`].

use crate::models::{Action, ActionFuture, MenuItem};
use std::sync::Arc;

pub mod guides;
pub mod tools;

/// Describes a plugin and the action it runs.
#[derive(Debug)]
pub struct PluginDefinition {
    /// Canonical name, used as the menu value and by `devbuddy run`.
    pub name: &'static str,
    /// Other names accepted by `devbuddy run`.
    pub aliases: &'static [&'static str],
    /// One line shown as the menu hint and in `devbuddy list`.
    pub description: &'static str,
    /// Main menu group.
    pub category: &'static str,
    /// Builds the plugin's future.
    pub action: fn() -> ActionFuture,
}

impl PluginDefinition {
    /// The plugin as a leaf of the main menu.
    pub fn to_menu_item(&self) -> MenuItem {
        let action: Action = Arc::new(self.action);
        MenuItem::leaf(self.name, self.name, action).with_description(self.description)
    }

    /// True when `name` is the plugin's name or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

/// All built-in plugins, in menu order.
pub static PLUGIN_REGISTRY: &[PluginDefinition] = &[
    PluginDefinition {
        name: "project-structure",
        aliases: &["structure"],
        description: "Show how the DevBuddy source tree is organised",
        category: "Guides",
        action: guides::show_project_structure,
    },
    PluginDefinition {
        name: "best-practices",
        aliases: &[],
        description: "Best practices for writing DevBuddy plugins",
        category: "Guides",
        action: guides::show_best_practices,
    },
    PluginDefinition {
        name: "add-plugin",
        aliases: &["new-plugin"],
        description: "Step-by-step instructions for adding a plugin",
        category: "Guides",
        action: guides::show_add_plugin_instructions,
    },
    PluginDefinition {
        name: "show-config",
        aliases: &["settings"],
        description: "Display the current DevBuddy settings",
        category: "Tools",
        action: tools::show_config,
    },
    PluginDefinition {
        name: "menu-templates",
        aliases: &["menus"],
        description: "Browse your saved menu templates",
        category: "Tools",
        action: tools::browse_menu_templates,
    },
];

/// Finds a plugin by name or alias.
pub fn find_plugin(name: &str) -> Option<&'static PluginDefinition> {
    find_in(PLUGIN_REGISTRY, name)
}

/// Finds a plugin by name or alias in `registry`.
pub fn find_in<'a>(registry: &'a [PluginDefinition], name: &str) -> Option<&'a PluginDefinition> {
    registry.iter().find(|plugin| plugin.matches(name))
}

/// Category names in order of first appearance.
pub fn categories(registry: &[PluginDefinition]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for plugin in registry {
        if !seen.contains(&plugin.category) {
            seen.push(plugin.category);
        }
    }
    seen
}

/// The plugins of one category, in registry order.
pub fn in_category<'a>(
    registry: &'a [PluginDefinition],
    category: &str,
) -> Vec<&'a PluginDefinition> {
    registry
        .iter()
        .filter(|plugin| plugin.category.eq_ignore_ascii_case(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for plugin in PLUGIN_REGISTRY {
            assert!(seen.insert(plugin.name), "duplicate name {}", plugin.name);
            for alias in plugin.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_find_plugin_by_name_and_alias() {
        assert_eq!(find_plugin("best-practices").map(|p| p.name), Some("best-practices"));
        assert_eq!(find_plugin("menus").map(|p| p.name), Some("menu-templates"));
        assert!(find_plugin("turso").is_none());
    }

    #[test]
    fn test_categories_keep_registry_order() {
        assert_eq!(categories(PLUGIN_REGISTRY), vec!["Guides", "Tools"]);
        assert_eq!(in_category(PLUGIN_REGISTRY, "guides").len(), 3);
        assert!(in_category(PLUGIN_REGISTRY, "Nope").is_empty());
    }

    #[test]
    fn test_menu_item_is_a_described_leaf() {
        let item = PLUGIN_REGISTRY[0].to_menu_item();
        assert!(item.is_leaf());
        assert_eq!(item.value, "project-structure");
        assert_eq!(item.description.as_deref(), Some(PLUGIN_REGISTRY[0].description));
    }
}
