// src/core/menu_tree.rs

//! Builds the menu trees DevBuddy hands to the navigator: the main menu (from
//! the plugin registry), the help menu and the saved-templates browser.

use crate::{
    constants::ALL_CATEGORIES,
    core::{settings::Settings, templates::MenuTemplate},
    models::{self, MenuItem},
    plugins::{self, PluginDefinition},
    system::output,
};
use colored::Colorize;

/// A static help page.
#[derive(Debug)]
pub struct HelpTopic {
    /// Menu label and page heading.
    pub title: &'static str,
    /// Page body.
    pub content: &'static str,
}

/// The general help pages, in menu order.
pub static HELP_TOPICS: &[HelpTopic] = &[
    HelpTopic {
        title: "Getting Started",
        content: "To get started with DevBuddy, run `devbuddy` in your terminal and choose a tool from the menu. \
                  Use \"Go Back\" to leave a submenu and \"Exit\" (or Esc) to quit.",
    },
    HelpTopic {
        title: "Adding Plugins",
        content: "To add a new plugin, write an action in `src/plugins` and register it in `PLUGIN_REGISTRY`. \
                  Run the `add-plugin` guide for a step-by-step walkthrough.",
    },
    HelpTopic {
        title: "Settings",
        content: "Settings live in `config.toml` inside the DevBuddy config directory. \
                  Use `devbuddy config list` to see them and `devbuddy config set <key> <value>` to change them.",
    },
    HelpTopic {
        title: "Menu Templates",
        content: "Create your own menus with `devbuddy menu create` and open them with `devbuddy menu show <name>` \
                  or the `menu-templates` plugin.",
    },
];

/// Resolves the configured default category against the registry.
///
/// Returns `None` for "All" and for unknown categories (the latter with a
/// warning); otherwise the category's canonical spelling.
fn resolve_category(registry: &[PluginDefinition], wanted: &str) -> Option<&'static str> {
    let wanted = wanted.trim();
    if wanted.is_empty() || wanted.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return None;
    }

    let found = plugins::categories(registry)
        .into_iter()
        .find(|category| category.eq_ignore_ascii_case(wanted));
    if found.is_none() {
        log::warn!("Unknown default category '{}'; showing all categories.", wanted);
    }
    found
}

/// The main menu.
///
/// With the default category "All", each category is a submenu of its
/// plugins. With a specific category, that category's plugins sit at the
/// root. A "Help" submenu is always last.
pub fn build_main_menu(registry: &[PluginDefinition], settings: &Settings) -> Vec<MenuItem> {
    let mut root: Vec<MenuItem> = match resolve_category(registry, &settings.default_category) {
        Some(category) => plugins::in_category(registry, category)
            .into_iter()
            .map(PluginDefinition::to_menu_item)
            .collect(),
        None => plugins::categories(registry)
            .into_iter()
            .map(|category| {
                let children: Vec<MenuItem> = plugins::in_category(registry, category)
                    .into_iter()
                    .map(PluginDefinition::to_menu_item)
                    .collect();
                let hint = format!(t!("menu.category.hint"), count = children.len());
                MenuItem::branch(category.to_lowercase(), category, children).with_description(hint)
            })
            .collect(),
    };

    root.push(
        MenuItem::branch("help", t!("menu.help.label"), build_help_menu(registry))
            .with_description(t!("menu.help.hint")),
    );
    root
}

/// The help menu: general topics followed by one entry per plugin.
pub fn build_help_menu(registry: &[PluginDefinition]) -> Vec<MenuItem> {
    let topics = HELP_TOPICS.iter().map(|topic| {
        let (title, content) = (topic.title, topic.content);
        MenuItem::leaf(
            format!("topic:{}", title.to_lowercase().replace(' ', "-")),
            title,
            models::action(move || async move {
                println!("\n{}", title.cyan());
                println!("{}\n", content.white());
                Ok(())
            }),
        )
    });

    let plugin_pages = registry.iter().map(|plugin| {
        let (name, description, category, aliases) =
            (plugin.name, plugin.description, plugin.category, plugin.aliases);
        MenuItem::leaf(
            format!("plugin:{}", name),
            format!("Plugin: {}", name),
            models::action(move || async move {
                println!("\n{}", format!("Plugin: {}", name).cyan());
                println!("{}", description.white());
                println!("  {:<10} {}", "Category:".blue(), category);
                if !aliases.is_empty() {
                    println!("  {:<10} {}", "Aliases:".blue(), aliases.join(", "));
                }
                println!("  {:<10} devbuddy {}\n", "Run:".blue(), name);
                Ok(())
            }),
        )
    });

    topics.chain(plugin_pages).collect()
}

/// One submenu per saved template.
pub fn build_templates_menu(templates: &[MenuTemplate]) -> Vec<MenuItem> {
    templates
        .iter()
        .map(|template| {
            let hint = format!(t!("templates.info.item_count"), count = template.item_count());
            MenuItem::branch(template.name.clone(), template.name.clone(), template.to_menu_items())
                .with_description(hint)
        })
        .collect()
}

/// Prints the registry grouped by category.
pub fn print_plugin_list(registry: &[PluginDefinition]) {
    for category in plugins::categories(registry) {
        println!("\n{}", category.green().bold());
        for plugin in plugins::in_category(registry, category) {
            let aliases = if plugin.aliases.is_empty() {
                String::new()
            } else {
                format!(" ({})", plugin.aliases.join(", ")).dimmed().to_string()
            };
            println!("  {:<20}{} {}", plugin.name.cyan(), aliases, plugin.description);
        }
    }
    output::line("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItemKind;
    use crate::plugins::PLUGIN_REGISTRY;

    fn values(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.value.as_str()).collect()
    }

    #[test]
    fn test_all_categories_become_branches() {
        let root = build_main_menu(PLUGIN_REGISTRY, &Settings::default());

        assert_eq!(values(&root), vec!["guides", "tools", "help"]);
        assert!(root.iter().all(MenuItem::is_branch));
        match &root[0].kind {
            MenuItemKind::Branch(children) => {
                assert_eq!(
                    values(children),
                    vec!["project-structure", "best-practices", "add-plugin"]
                );
            }
            other => panic!("expected a branch, got {:?}", other),
        }
        assert_eq!(root[0].description.as_deref(), Some("3 tools"));
    }

    #[test]
    fn test_default_category_flattens_root() {
        let settings = Settings {
            default_category: "tools".into(),
            ..Settings::default()
        };
        let root = build_main_menu(PLUGIN_REGISTRY, &settings);
        assert_eq!(values(&root), vec!["show-config", "menu-templates", "help"]);
    }

    #[test]
    fn test_unknown_default_category_falls_back_to_all() {
        let settings = Settings {
            default_category: "Databases".into(),
            ..Settings::default()
        };
        let root = build_main_menu(PLUGIN_REGISTRY, &settings);
        assert_eq!(values(&root), vec!["guides", "tools", "help"]);
    }

    #[test]
    fn test_help_menu_lists_topics_then_plugins() {
        let help = build_help_menu(PLUGIN_REGISTRY);
        assert_eq!(help.len(), HELP_TOPICS.len() + PLUGIN_REGISTRY.len());
        assert_eq!(help[0].value, "topic:getting-started");
        assert_eq!(help[0].label, "Getting Started");
        assert_eq!(help[HELP_TOPICS.len()].label, "Plugin: project-structure");
        assert!(help.iter().all(MenuItem::is_leaf));
    }

    #[tokio::test]
    async fn test_help_pages_print_without_error() {
        for item in build_help_menu(PLUGIN_REGISTRY) {
            if let MenuItemKind::Leaf(action) = &item.kind {
                action().await.unwrap();
            }
        }
    }
}
