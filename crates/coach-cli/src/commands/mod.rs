//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Run the analysis pipeline on a transaction file
//! - `config` - Show the rule configuration in effect
//! - `sample` - Print the built-in sample transactions
//! - `serve` - Web server command

pub mod analyze;
pub mod config;
pub mod sample;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use coach_core::RuleConfig;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use sample::*;
pub use serve::*;

/// Load rules from `--config`, the default override location, or the
/// embedded defaults
pub fn load_rules(config_path: Option<&Path>) -> Result<RuleConfig> {
    RuleConfig::load(config_path).context("Failed to load rule config")
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount with two decimals and a dollar sign
pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}
