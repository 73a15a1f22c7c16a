//! Config command implementation

use std::path::Path;

use anyhow::Result;
use coach_core::rules::default_config_path;
use coach_core::RuleConfig;

pub fn cmd_config(rules: &RuleConfig, explicit: Option<&Path>, path_only: bool) -> Result<()> {
    let location = override_location(explicit);

    if path_only {
        match location {
            Some(p) => println!("{}", p.display()),
            None => println!("(no data directory available)"),
        }
        return Ok(());
    }

    match location {
        Some(p) if p.exists() => println!("# Loaded from {}", p.display()),
        Some(p) => println!("# Built-in defaults (override at {})", p.display()),
        None => println!("# Built-in defaults"),
    }
    print!("{}", rules.to_toml()?);

    Ok(())
}

/// The file that overrides the built-in rules, if one can be located
pub fn override_location(explicit: Option<&Path>) -> Option<std::path::PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}
