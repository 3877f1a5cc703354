// src/system/output.rs

//! User-facing console messages.
//!
//! Diagnostics go through the `log` facade; everything the user is meant to
//! read goes through here so the styling stays consistent.

use colored::Colorize;

/// A neutral status line.
pub fn info(message: &str) {
    println!("{} {}", "│".dimmed(), message.blue());
}

/// A completed operation.
pub fn success(message: &str) {
    println!("{} {}", "✔".green(), message.green());
}

/// Something the user should notice; not fatal.
pub fn warning(message: &str) {
    println!("{} {}", "▲".yellow(), message.yellow());
}

/// A bold section title with an underline.
pub fn heading(title: &str) {
    println!("\n{}", title.green().bold());
    println!("{}", "=".repeat(title.chars().count()).yellow());
}

/// A numbered or titled sub-section.
pub fn subheading(title: &str) {
    println!("\n{}", title.blue().bold());
}

/// A plain, dimmed body line.
pub fn line(text: &str) {
    println!("{}", text.dimmed());
}

/// A block of literal text, such as a code sample or a tree.
pub fn block(text: &str) {
    println!("{}", text.cyan());
}

/// A highlighted closing hint.
pub fn tip(text: &str) {
    println!("\n{}", text.yellow().bold());
}

/// Opens an interactive session with a banner.
pub fn intro(title: &str) {
    println!("\n{} {}", "┌".dimmed(), format!(" {} ", title).on_cyan().black().bold());
}

/// Closes an interactive session.
pub fn outro(message: &str) {
    println!("{} {}\n", "└".dimmed(), message.cyan());
}
