//! Coach CLI - Personal finance coach
//!
//! Usage:
//!   coach analyze --file march.csv   Analyze a transaction file
//!   coach sample > sample.json       Write the sample transactions
//!   coach config                     Show the rules in effect
//!   coach serve --port 8000          Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so `--json` and `sample` output stays pipeable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Analyze { file, format, json } => {
            let rules = commands::load_rules(config_path)?;
            commands::cmd_analyze(&rules, &file, format.as_deref(), json)
        }
        Commands::Sample { table } => commands::cmd_sample(table),
        Commands::Config { path } => {
            let rules = commands::load_rules(config_path)?;
            commands::cmd_config(&rules, config_path, path)
        }
        Commands::Serve {
            port,
            host,
            static_dir,
            allow_origins,
        } => {
            let rules = commands::load_rules(config_path)?;
            commands::cmd_serve(rules, &host, port, static_dir.as_deref(), allow_origins).await
        }
    }
}
