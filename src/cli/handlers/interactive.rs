// src/cli/handlers/interactive.rs

use crate::{
    core::{
        menu_tree,
        navigator::{MenuNavigator, Termination},
        settings::Settings,
    },
    models::MenuItem,
    plugins::PLUGIN_REGISTRY,
    system::{output, terminal::Terminal},
};
use anyhow::Result;

/// Runs `root` in the navigator on the real terminal, honouring the user's
/// theme and confirmation default.
pub(crate) async fn navigate(root: Vec<MenuItem>, settings: &Settings) -> Result<Termination> {
    let mut prompter = Terminal::new(settings.theme);
    let mut confirmer = prompter;

    let termination = MenuNavigator::new(root)
        .with_confirm_default(settings.confirm_default)
        .run(&mut prompter, &mut confirmer)
        .await?;
    log::debug!("Navigator finished: {:?}", termination);
    Ok(termination)
}

/// Prints the closing line that matches how the session ended.
pub(crate) fn farewell(termination: Termination) {
    match termination {
        Termination::Cancelled => output::outro(t!("common.info.operation_cancelled")),
        Termination::Exited | Termination::Declined => output::outro(t!("app.outro")),
    }
}

/// The main entry point for `devbuddy` and `devbuddy interactive`.
pub async fn handle() -> Result<()> {
    let settings = Settings::load_default()?;

    output::intro(t!("app.intro"));
    let termination = navigate(menu_tree::build_main_menu(PLUGIN_REGISTRY, &settings), &settings).await?;
    farewell(termination);
    Ok(())
}
