//! Wells-Riley CLI - airborne infection risk from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Standard classroom: 5 x 4 x 3 m, medium ventilation, winter, 2 h, 5 persons
//! wellsriley assess
//!
//! # Stagnant air in a small office, JSON output
//! wellsriley --format json assess -l 4 -w 3 -H 2.5 --ventilation none -n 3
//!
//! # Show the calibration tables
//! wellsriley tables
//!
//! # Make JSON the default output format
//! wellsriley config set format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::{config_path, Config};
use output::OutputOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::load(config_path(cli.config.clone())?)?;

    if !config.use_colors() {
        colored::control::set_override(false);
    }

    let options = OutputOptions {
        format: cli.format.unwrap_or_else(|| config.default_format()),
        precision: config.decimal_precision(),
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Assess(args) => commands::assess::execute(args, options)?,
        Commands::Tables => commands::tables::execute(options)?,
        Commands::Config(args) => commands::config::execute(args, config, options)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with machine-readable output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
