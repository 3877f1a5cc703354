// src/plugins/tools.rs

//! Plugins that inspect DevBuddy's own state.

use crate::{
    core::{
        menu_tree,
        navigator::MenuNavigator,
        paths,
        settings::Settings,
        templates::{self, MenuTemplate},
    },
    models::ActionFuture,
    system::{output, terminal::Terminal},
};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// Prints every setting and the settings file path.
pub fn show_config() -> ActionFuture {
    Box::pin(async {
        let path = paths::get_settings_path()?;
        let settings = Settings::load(&path)?;

        output::heading("DevBuddy Settings");
        for (key, value) in settings.entries() {
            let shown = if value.is_empty() {
                "(default)".dimmed().to_string()
            } else {
                value.cyan().to_string()
            };
            println!("  {:<18} {}", format!("{}:", key).blue(), shown);
        }
        println!("\n  {:<18} {}", "File:".blue(), path.display());
        anyhow::Ok(())
    })
}

/// Loads every template in `dir`, skipping (and reporting) unreadable ones.
pub fn load_all_templates(dir: &Path) -> anyhow::Result<Vec<MenuTemplate>> {
    let names = templates::list_templates(dir)?;
    let mut loaded = Vec::with_capacity(names.len());
    for name in names {
        match templates::load_template(dir, &name) {
            Ok(template) => loaded.push(template),
            Err(e) => {
                log::warn!("Skipping template '{}': {}", name, e);
                output::warning(&format!(t!("templates.warning.skipped"), name = name));
            }
        }
    }
    Ok(loaded)
}

/// Opens the saved templates in a nested navigator.
pub fn browse_menu_templates() -> ActionFuture {
    Box::pin(async {
        let settings = Settings::load_default()?;
        let dir = settings.templates_dir()?;
        let loaded = load_all_templates(&dir)
            .with_context(|| format!("Failed to read templates from '{}'", dir.display()))?;

        if loaded.is_empty() {
            output::info(t!("templates.info.none_saved"));
            return Ok(());
        }

        let mut prompter = Terminal::new(settings.theme);
        let mut confirmer = prompter;
        let termination = MenuNavigator::new(menu_tree::build_templates_menu(&loaded))
            .with_confirm_default(settings.confirm_default)
            .run(&mut prompter, &mut confirmer)
            .await?;
        log::debug!("Template browser finished: {:?}", termination);
        anyhow::Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::{TemplateItem, TemplateKind};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_all_templates_skips_broken_files() {
        let dir = tempdir().unwrap();
        let template = MenuTemplate {
            name: "good".into(),
            items: vec![TemplateItem {
                value: "a".into(),
                label: "A".into(),
                description: None,
                kind: TemplateKind::Link,
            }],
        };
        templates::save_template(dir.path(), &template).unwrap();
        fs::write(dir.path().join("bad.json"), "[").unwrap();

        let loaded = load_all_templates(dir.path()).unwrap();

        assert_eq!(loaded, vec![template]);
    }

    #[test]
    fn test_load_all_templates_from_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(load_all_templates(&dir.path().join("absent")).unwrap().is_empty());
    }
}
