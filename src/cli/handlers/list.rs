// src/cli/handlers/list.rs

use crate::{core::menu_tree, plugins::PLUGIN_REGISTRY, system::output};
use anyhow::Result;

/// The main handler for `list`.
pub fn handle() -> Result<()> {
    output::heading(t!("list.header"));
    menu_tree::print_plugin_list(PLUGIN_REGISTRY);
    Ok(())
}
