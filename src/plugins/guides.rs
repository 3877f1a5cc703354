// src/plugins/guides.rs

//! Informational plugins about DevBuddy itself.

use crate::{models::ActionFuture, system::output};

const PROJECT_TREE: &str = r#"
devbuddy/
├── build.rs                  # Compiles locales/*.toml into the t! macro
├── locales/                  # User-facing strings
└── src/
    ├── bin/devbuddy.rs       # Entry point, centralized error handling
    ├── cli/                  # Argument parsing and command handlers
    ├── core/
    │   ├── navigator.rs      # Nested menu loop (breadcrumbs, back, exit)
    │   ├── prompt.rs         # Prompter / Confirmer contracts
    │   ├── menu_tree.rs      # Builds the main and help menus
    │   ├── settings.rs       # config.toml
    │   └── templates.rs      # Saved menu templates
    ├── plugins/              # Add your plugins here
    └── system/               # Terminal prompts and styled output
"#;

const PLUGIN_SNIPPET: &str = r#"
pub fn show_greeting() -> ActionFuture {
    Box::pin(async {
        output::success("Hello from my plugin!");
        anyhow::Ok(())
    })
}
"#;

const REGISTRY_SNIPPET: &str = r#"
PluginDefinition {
    name: "greeting",
    aliases: &["hello"],
    description: "Say hello",
    category: "Tools",
    action: my_plugin::show_greeting,
},
"#;

/// Prints the layout of the source tree.
pub fn show_project_structure() -> ActionFuture {
    Box::pin(async {
        output::heading("DevBuddy Project Structure");
        output::block(PROJECT_TREE);

        output::subheading("Key Directories and Files:");
        output::line("- src/plugins/: Add your new plugins here");
        output::line("- src/core/: Menu navigation, settings and templates");
        output::line("- src/system/: Terminal prompts and output helpers");
        output::line("- src/bin/devbuddy.rs: Main entry point, initializes the CLI");

        output::tip("Tip: Keep your plugin files modular and well-organized for easy maintenance.");
        anyhow::Ok(())
    })
}

/// Prints plugin authoring guidelines.
pub fn show_best_practices() -> ActionFuture {
    Box::pin(async {
        output::heading("DevBuddy Development Best Practices");

        let sections: [(&str, &[&str]); 6] = [
            (
                "1. Modular Design",
                &[
                    "- Keep each plugin in its own module",
                    "- Break down complex functionality into smaller, reusable functions",
                ],
            ),
            (
                "2. Consistent Naming",
                &[
                    "- Use kebab-case for plugin names and aliases",
                    "- Use snake_case for modules and functions, PascalCase for types",
                ],
            ),
            (
                "3. Error Handling",
                &[
                    "- Return errors with `?` instead of panicking",
                    "- Add context to errors so the user knows what failed",
                ],
            ),
            (
                "4. User Experience",
                &[
                    "- Use the prompt traits for interaction so flows stay testable",
                    "- Use `system::output` for consistent, colorized messages",
                ],
            ),
            (
                "5. Documentation",
                &[
                    "- Document public functions and types",
                    "- Give every plugin a clear one-line description",
                ],
            ),
            (
                "6. Testing",
                &[
                    "- Unit test plugin logic in a #[cfg(test)] module",
                    "- Drive interactive flows with scripted prompters",
                ],
            ),
        ];

        for (title, lines) in sections {
            output::subheading(title);
            for line in lines {
                output::line(line);
            }
        }

        output::tip(
            "Remember: The goal is to create plugins that are easy to use, maintain, and extend!",
        );
        anyhow::Ok(())
    })
}

/// Walks through adding a plugin to the registry.
pub fn show_add_plugin_instructions() -> ActionFuture {
    Box::pin(async {
        output::heading("How to Add a New Plugin to DevBuddy");

        output::subheading("Step 1: Create a new module");
        output::line("Create a new file in the `src/plugins` directory, e.g. `my_plugin.rs`,");
        output::line("and declare it in `src/plugins/mod.rs`.");

        output::subheading("Step 2: Write the action");
        output::line("An action is a function returning an `ActionFuture`:");
        output::block(PLUGIN_SNIPPET);

        output::subheading("Step 3: Register the plugin");
        output::line("Add an entry to `PLUGIN_REGISTRY`:");
        output::block(REGISTRY_SNIPPET);

        output::subheading("Step 4: Rebuild DevBuddy");
        output::line("Your plugin now appears in the main menu, in `devbuddy list`,");
        output::line("and can be run directly with `devbuddy <name>`.");

        output::tip("Tip: For complex plugins, create a directory under `src/plugins`");
        output::line("and split the functionality into multiple files for better organization.");
        anyhow::Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_guides_complete_successfully() {
        show_project_structure().await.unwrap();
        show_best_practices().await.unwrap();
        show_add_plugin_instructions().await.unwrap();
    }
}
