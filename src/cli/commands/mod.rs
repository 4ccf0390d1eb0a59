//! Subcommands module for the Wsprobe CLI
//!
//! This module contains the subcommand implementations.

pub mod identify;

use crate::cli::output::OutputFormatter;
use crate::config::Config;
use is_terminal::IsTerminal;

/// Common context shared between commands
pub struct CommandContext {
    /// Configuration
    pub config: Config,
    /// Output formatter
    pub output: OutputFormatter,
    /// Verbosity level
    pub verbosity: u8,
}

impl CommandContext {
    /// Create a new command context from CLI arguments
    pub fn new(cli: &crate::cli::Cli, config: Config) -> Self {
        let use_color =
            !cli.no_color && config.colors.enabled && std::io::stdout().is_terminal();
        let output = OutputFormatter::new(use_color, cli.is_json(), cli.verbosity());

        Self {
            config,
            output,
            verbosity: cli.verbosity(),
        }
    }
}
