//! Wsprobe - A WS-Management endpoint connectivity probe
//!
//! Verifies that a target host exposes a reachable, correctly-speaking
//! WSMAN/WinRM endpoint before remote management is attempted against it.
//!
//! This is the main entry point for the Wsprobe CLI.

mod cli;
mod config;

use anyhow::Result;
use cli::commands::CommandContext;
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application version information
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).unwrap_or_else(|e| {
        if cli.verbosity() >= 1 {
            eprintln!("Warning: Failed to load config: {}", e);
        }
        Config::default()
    });

    // Initialize logging based on verbosity
    init_logging(cli.verbosity(), &config.logging.log_level);

    // Display version if verbose
    if cli.verbosity() >= 2 {
        eprintln!("Wsprobe v{} by {}", VERSION, AUTHORS);
    }

    // Create command context
    let mut ctx = CommandContext::new(&cli, config);

    // Execute the appropriate command
    let exit_code = match &cli.command {
        Commands::Identify(args) => args.execute(&mut ctx).await?,
        Commands::Completions(args) => {
            cli::completions::generate_completions(args.shell);
            0
        }
    };

    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level
///
/// Log output goes to stderr so that stdout stays reserved for the probe's
/// own report.
fn init_logging(verbosity: u8, default_level: &str) {
    let filter = match verbosity {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbosity >= 3)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}
