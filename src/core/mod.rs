// src/core/mod.rs

//! Navigation, settings and templates. Nothing here talks to the terminal
//! directly; prompts go through [`prompt`].

pub mod menu_tree;
pub mod navigator;
pub mod paths;
pub mod prompt;
pub mod settings;
pub mod templates;
