// src/bin/devbuddy.rs

use clap::Parser;
use colored::*;
use devbuddy::{
    cli::{Cli, dispatcher},
    constants::LOG_ENV,
    errors::AppError,
};

/// The main entry point of the `devbuddy` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = dispatcher::dispatch(cli).await {
        // --- Centralized Error Handling ---
        let app_error = e.downcast_ref::<AppError>();
        if let Some(AppError::Cancelled) = app_error {
            eprintln!("\n{}", AppError::Cancelled.to_string().yellow());
            std::process::exit(130);
        }

        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        if let Some(hint) = app_error.and_then(AppError::hint) {
            eprintln!("{}", hint.yellow());
        }
        std::process::exit(1);
    }
}
