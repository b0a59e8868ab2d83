//! Calculator CLI
//!
//! Thin command-line shell over the `calculator` crate.
//!
//! # Usage
//!
//! ```bash
//! calculator add 2 -5
//! calculator subtract-multiple 10 2 3 4
//! calculator --json add-multiple 1 2 3 4
//! calculator --config calc.yaml -vv subtract 7 9
//! ```

mod commands;
mod config;
mod error;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::Commands;
use crate::config::AppConfig;

/// Integer calculator
#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("configuration error")?;
    config.apply_cli_overrides(cli.verbose, cli.json);

    logging::init(&config.logging);
    tracing::debug!(
        level = %config.logging.level,
        config_file = cli.config.is_some(),
        "configuration loaded"
    );

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("no command given (try --help)");
    };

    command.run(&config)
}
