//! # DevBuddy
//!
//! A CLI toolbox for developers. Every tool is a small plugin reachable from a
//! nested interactive menu; the menu itself is driven by
//! [`core::navigator::MenuNavigator`], which knows nothing about terminals and
//! talks to the user only through the capability traits in [`core::prompt`].

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod errors;
pub mod models;
pub mod plugins;
pub mod system;
