// src/cli/dispatcher.rs

use anyhow::Result;

use crate::cli::{
    Cli, Commands,
    handlers::{self, config, menu},
};

/// Routes a parsed command line to its handler.
///
/// No subcommand means interactive mode; an unknown bare word is treated as
/// a plugin name (`devbuddy best-practices` == `devbuddy run best-practices`).
pub async fn dispatch(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => handlers::interactive::handle().await,
        Commands::Help => handlers::help::handle().await,
        Commands::List => handlers::list::handle(),
        Commands::Run { plugin } => handlers::run::handle(&plugin).await,
        Commands::External(args) => {
            let Some((plugin, extra)) = args.split_first() else {
                return handlers::interactive::handle().await;
            };
            if !extra.is_empty() {
                log::warn!("Ignoring extra arguments for '{}': {:?}", plugin, extra);
            }
            handlers::run::handle(plugin).await
        }
        Commands::Config { action } => config::handle(action).await,
        Commands::Menu { action } => menu::handle(action).await,
    }
}
