// src/cli/handlers/config.rs

use crate::{
    cli::ConfigAction,
    core::{paths, settings::Settings},
    plugins::tools,
    system::output,
};
use anyhow::Result;

/// The main handler for `config get|set|list|path`.
pub async fn handle(action: ConfigAction) -> Result<()> {
    let path = paths::get_settings_path()?;

    match action {
        ConfigAction::Get { key } => {
            let settings = Settings::load(&path)?;
            println!("{}", settings.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load(&path)?;
            settings.set(&key, &value)?;
            settings.save(&path)?;
            output::success(&format!(
                t!("config.success.updated"),
                key = key,
                value = settings.get(&key)?
            ));
        }
        ConfigAction::List => tools::show_config().await?,
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}
