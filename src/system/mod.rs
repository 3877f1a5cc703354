//! # System Interaction Layer
//!
//! This module is the boundary between the application logic and the user's
//! terminal.
//!
//! ## Modules
//!
//! - **`terminal`**: `dialoguer` implementations of the prompt traits in
//!   [`crate::core::prompt`]. Prompts run on tokio's blocking pool; Esc and
//!   `Ctrl+C` become explicit cancellations.
//! - **`output`**: Styled console messages (info, success, warnings, headings).

pub mod output;
pub mod terminal;
