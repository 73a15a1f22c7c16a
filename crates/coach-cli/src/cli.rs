//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Coach - Turn a list of transactions into spending advice and a weekly budget
#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Personal finance coach: spending analysis, advice, and weekly budgets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rule config file (defaults to ~/.local/share/coach/config/rules.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze transactions from a JSON or CSV file
    Analyze {
        /// Transaction file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// File format: json, csv (detected from extension if not specified)
        #[arg(long)]
        format: Option<String>,

        /// Print the report as JSON (same shape as the API response)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in sample transactions
    Sample {
        /// Print a table instead of JSON
        #[arg(long)]
        table: bool,
    },

    /// Show the rule configuration in effect
    Config {
        /// Only print the override file location
        #[arg(long)]
        path: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing the frontend (index.html and assets)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Allowed CORS origin (repeatable; any origin if omitted)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },
}
