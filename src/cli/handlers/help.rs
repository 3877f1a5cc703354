// src/cli/handlers/help.rs

use crate::{
    cli::handlers::interactive::{farewell, navigate},
    core::{menu_tree, settings::Settings},
    plugins::PLUGIN_REGISTRY,
    system::output,
};
use anyhow::Result;

/// The main handler for the `help` command: the help menu on its own.
pub async fn handle() -> Result<()> {
    let settings = Settings::load_default()?;

    output::intro(t!("help.intro"));
    let termination = navigate(menu_tree::build_help_menu(PLUGIN_REGISTRY), &settings).await?;
    farewell(termination);
    Ok(())
}
