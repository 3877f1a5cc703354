// src/cli/mod.rs

//! Command line parsing and routing.

use clap::{Parser, Subcommand};

/// Maps a parsed [`Cli`] to its handler.
pub mod dispatcher;
/// One handler per command.
pub mod handlers;

/// Builds the dynamic, color-aware full help string at runtime.
fn build_help_string() -> &'static str {
    // Mini-renderer for the semantic help template: `<title>` and friends
    // become ANSI styles, or nothing when colors are disabled.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan (for highlights)
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan (for commands)
    let group = if use_colors { "\x1b[1;32m" } else { "" }; // Bold Green
    let dim = if use_colors { "\x1b[2m" } else { "" }; // Dim
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<group>", group)
        .replace("</group>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// devbuddy: A modern, scalable CLI toolbox for developers.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    help_template = { build_help_string() },
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
// `help` is our interactive help menu, not clap's help subcommand.
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// What to do. Without a command, the interactive menu starts.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start interactive mode.
    #[command(alias = "i")]
    Interactive,

    /// Show the interactive help menu.
    Help,

    /// List the available plugins.
    #[command(alias = "ls")]
    List,

    /// Run a plugin directly.
    Run {
        /// The plugin name or alias.
        plugin: String,
    },

    /// Inspect or change settings.
    Config {
        /// What to do with the settings.
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage saved menu templates.
    Menu {
        /// What to do with the templates.
        #[command(subcommand)]
        action: MenuAction,
    },

    /// `devbuddy <plugin>` is a shortcut for `devbuddy run <plugin>`.
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// `devbuddy config` subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the value of one setting.
    Get {
        /// Setting name.
        key: String,
    },
    /// Change one setting and save it.
    Set {
        /// Setting name.
        key: String,
        /// New value.
        value: String,
    },
    /// Print every setting.
    #[command(alias = "ls")]
    List,
    /// Print the path of the settings file.
    Path,
}

/// `devbuddy menu` subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// List saved menu templates.
    #[command(alias = "ls")]
    List,
    /// Open a saved menu template in the navigator.
    Show {
        /// Template name.
        name: String,
    },
    /// Build a new menu template interactively.
    Create {
        /// The template name. Asked interactively when omitted.
        #[arg(long, short)]
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("devbuddy").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_plugin_name_is_an_external_subcommand() {
        let cli = parse(&["best-practices"]);
        assert_eq!(
            cli.command,
            Some(Commands::External(vec!["best-practices".to_string()]))
        );
    }

    #[test]
    fn test_nested_subcommands_and_global_flag() {
        let cli = parse(&["config", "set", "theme", "simple", "--no-color"]);
        assert!(cli.no_color);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Set {
                    key: "theme".into(),
                    value: "simple".into()
                }
            })
        );

        let cli = parse(&["menu", "create", "-n", "db"]);
        assert_eq!(
            cli.command,
            Some(Commands::Menu {
                action: MenuAction::Create {
                    name: Some("db".into())
                }
            })
        );
    }

    #[test]
    fn test_help_is_our_subcommand() {
        assert_eq!(parse(&["help"]).command, Some(Commands::Help));
    }
}
