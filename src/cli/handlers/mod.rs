// src/cli/handlers/mod.rs

// One module per CLI command.

/// `devbuddy config`.
pub mod config;
/// `devbuddy help`.
pub mod help;
/// `devbuddy` and `devbuddy interactive`.
pub mod interactive;
/// `devbuddy list`.
pub mod list;
/// `devbuddy menu`.
pub mod menu;
/// `devbuddy run` and `devbuddy <plugin>`.
pub mod run;
