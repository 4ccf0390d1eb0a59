//! CLI module for Wsprobe
//!
//! This module provides the command-line interface for Wsprobe,
//! including argument parsing, output formatting, and subcommand handling.

pub mod commands;
pub mod completions;
pub mod output;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Wsprobe - A WS-Management endpoint connectivity probe
///
/// Verifies that a target host exposes a reachable, correctly-speaking
/// WSMAN/WinRM endpoint.
#[derive(Parser, Debug, Clone)]
#[command(name = "wsprobe")]
#[command(author = "Wsprobe Contributors")]
#[command(version)]
#[command(about = "A WS-Management (WinRM) endpoint connectivity probe", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v emits structured results, -vv adds debug logging)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, env = "WSPROBE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Probe a host's WSMAN endpoint with a WS-Identify request
    Identify(commands::identify::IdentifyArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for the completions command
#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }

    /// Check if structured (JSON) reporting was requested
    pub fn is_json(&self) -> bool {
        self.verbose >= 1
    }
}
