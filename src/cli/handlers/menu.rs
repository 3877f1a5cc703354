// src/cli/handlers/menu.rs

use crate::{
    cli::{
        MenuAction,
        handlers::interactive::{farewell, navigate},
    },
    core::{
        prompt::{Confirmer, PromptOutcome, Prompter, TextPrompter},
        settings::Settings,
        templates::{self, MenuTemplate},
    },
    errors::AppError,
    plugins::tools,
    system::{output, terminal::Terminal},
};
use anyhow::Result;
use colored::Colorize;

/// The main handler for `menu list|show|create`.
pub async fn handle(action: MenuAction) -> Result<()> {
    let settings = Settings::load_default()?;
    let dir = settings.templates_dir()?;

    match action {
        MenuAction::List => {
            let loaded = tools::load_all_templates(&dir)?;
            if loaded.is_empty() {
                output::info(t!("templates.info.none_saved"));
                return Ok(());
            }
            output::heading(t!("templates.header.saved"));
            for template in &loaded {
                println!(
                    "  {:<20} {}",
                    template.name.cyan(),
                    format!(t!("templates.info.item_count"), count = template.item_count()).dimmed()
                );
            }
            println!("\n  {:<20} {}", "Directory:".blue(), dir.display());
        }
        MenuAction::Show { name } => {
            let template = templates::load_template(&dir, &name)?;
            output::intro(&template.name);
            let termination = navigate(template.to_menu_items(), &settings).await?;
            farewell(termination);
        }
        MenuAction::Create { name } => {
            let mut prompter = Terminal::new(settings.theme);
            let (mut confirmer, mut input) = (prompter, prompter);

            output::intro(t!("templates.intro.create"));
            let template = build_template(name, &mut prompter, &mut confirmer, &mut input).await?;
            if template.items.is_empty() {
                output::warning(t!("templates.warning.empty"));
                return Ok(());
            }

            let path = templates::save_template(&dir, &template)?;
            output::success(&format!(
                t!("templates.success.saved"),
                name = template.name,
                path = path.display()
            ));
            output::outro(&format!(t!("templates.info.show_hint"), name = template.name));
        }
    }
    Ok(())
}

/// Asks for a name (unless one was given) and then for the template's items.
async fn build_template<P, C, T>(
    name: Option<String>,
    prompter: &mut P,
    confirmer: &mut C,
    input: &mut T,
) -> Result<MenuTemplate>
where
    P: Prompter,
    C: Confirmer,
    T: TextPrompter,
{
    let name = match name {
        Some(name) => name,
        None => match input.input(t!("templates.prompt.name"), None).await? {
            PromptOutcome::Selected(name) => name,
            PromptOutcome::Cancelled => return Err(AppError::Cancelled.into()),
        },
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::MissingTemplateName.into());
    }
    templates::validate_template_name(&name)?;

    let items = templates::author_items(prompter, confirmer, input).await?;
    Ok(MenuTemplate { name, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::{
        ChoiceKey,
        scripted::{ScriptedConfirmer, ScriptedInput, ScriptedPrompter},
    };
    use crate::core::templates::TemplateKind;

    #[tokio::test]
    async fn test_build_template_with_given_name() {
        let mut prompter =
            ScriptedPrompter::new(vec![PromptOutcome::Selected(ChoiceKey::Item("link".into()))]);
        let mut confirmer = ScriptedConfirmer::new(vec![PromptOutcome::Selected(false)]);
        let mut input = ScriptedInput::new(Vec::from(["Docs", "", ""].map(|t| PromptOutcome::Selected(t.to_string()))));

        let template = build_template(Some("dev".into()), &mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap();

        assert_eq!(template.name, "dev");
        assert_eq!(template.items.len(), 1);
        assert_eq!(template.items[0].value, "docs");
        assert_eq!(template.items[0].kind, TemplateKind::Link);
    }

    #[tokio::test]
    async fn test_cancelled_name_prompt_is_app_cancelled() {
        let mut prompter = ScriptedPrompter::new(vec![]);
        let mut confirmer = ScriptedConfirmer::new(vec![]);
        let mut input = ScriptedInput::new(vec![]);

        let err = build_template(None, &mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Cancelled)));
    }

    #[tokio::test]
    async fn test_blank_and_invalid_names_are_rejected() {
        let mut prompter = ScriptedPrompter::new(vec![]);
        let mut confirmer = ScriptedConfirmer::new(vec![]);
        let mut input = ScriptedInput::new(vec![]);

        let err = build_template(Some("  ".into()), &mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::MissingTemplateName)));

        let err = build_template(Some("my menu".into()), &mut prompter, &mut confirmer, &mut input)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid template name"));
    }
}
