// src/cli/handlers/run.rs

use crate::{
    errors::AppError,
    plugins::{self, PLUGIN_REGISTRY},
};
use anyhow::{Context, Result};

/// Runs a single plugin by name or alias, bypassing the menus.
pub async fn handle(name: &str) -> Result<()> {
    let plugin = plugins::find_plugin(name).ok_or_else(|| AppError::PluginNotFound {
        name: name.to_string(),
        available: PLUGIN_REGISTRY.iter().map(|p| p.name.to_string()).collect(),
    })?;

    log::info!("Running plugin '{}'", plugin.name);
    (plugin.action)()
        .await
        .with_context(|| format!("Plugin '{}' failed", plugin.name))
}
