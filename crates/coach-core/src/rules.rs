//! Rule configuration for the advisor and planner
//!
//! Every threshold and baseline amount the pipeline applies lives here so the
//! rule set can be audited and tested on its own.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/coach/config/rules.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::WeeklyBudget;

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/rules.toml");

/// Category whose total drives the dining rule
pub const DINING_CATEGORY: &str = "dining";

/// Category whose total drives the entertainment rule
pub const ENTERTAINMENT_CATEGORY: &str = "entertainment";

/// Thresholds for the advisory rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvisorRules {
    pub dining_threshold: f64,
    pub entertainment_threshold: f64,
    pub total_spending_threshold: f64,
}

impl Default for AdvisorRules {
    fn default() -> Self {
        Self {
            dining_threshold: 200.0,
            entertainment_threshold: 150.0,
            total_spending_threshold: 1000.0,
        }
    }
}

/// Baseline budget and the high-spending adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannerRules {
    pub high_spending_threshold: f64,
    pub savings_increase: f64,
    pub dining_reduction: f64,
    pub dining_floor: f64,
    pub baseline: WeeklyBudget,
}

impl Default for PlannerRules {
    fn default() -> Self {
        Self {
            high_spending_threshold: 1200.0,
            savings_increase: 50.0,
            dining_reduction: 25.0,
            dining_floor: 50.0,
            baseline: WeeklyBudget::default(),
        }
    }
}

/// Complete rule set applied by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RuleConfig {
    pub advisor: AdvisorRules,
    pub planner: PlannerRules,
}

impl RuleConfig {
    /// Load rules, preferring `path`, then the default override location,
    /// then the embedded defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let override_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        match override_path {
            Some(p) if p.exists() => {
                tracing::debug!(path = %p.display(), "Loading rule config override");
                let content = fs::read_to_string(&p)
                    .map_err(|e| Error::Config(format!("Failed to read {}: {}", p.display(), e)))?;
                parse_config(&content)
            }
            _ => parse_config(DEFAULT_CONFIG),
        }
    }

    /// Render the rule set as TOML in the same layout as the config file
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to render config: {}", e)))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("coach").join("config").join("rules.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    advisor: Option<RawAdvisor>,
    planner: Option<RawPlanner>,
}

#[derive(Debug, Deserialize)]
struct RawAdvisor {
    dining_threshold: Option<f64>,
    entertainment_threshold: Option<f64>,
    total_spending_threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawPlanner {
    high_spending_threshold: Option<f64>,
    savings_increase: Option<f64>,
    dining_reduction: Option<f64>,
    dining_floor: Option<f64>,
    baseline: Option<RawBaseline>,
}

#[derive(Debug, Deserialize)]
struct RawBaseline {
    groceries: Option<f64>,
    dining: Option<f64>,
    entertainment: Option<f64>,
    transportation: Option<f64>,
    savings: Option<f64>,
    total_weekly: Option<f64>,
}

/// Parse config from TOML content
///
/// Integers and floats are both accepted for amounts.
pub fn parse_config(content: &str) -> Result<RuleConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = RuleConfig::default();

    if let Some(advisor) = raw.advisor {
        let rules = &mut config.advisor;
        apply(&mut rules.dining_threshold, advisor.dining_threshold);
        apply(
            &mut rules.entertainment_threshold,
            advisor.entertainment_threshold,
        );
        apply(
            &mut rules.total_spending_threshold,
            advisor.total_spending_threshold,
        );
    }

    if let Some(planner) = raw.planner {
        let rules = &mut config.planner;
        apply(
            &mut rules.high_spending_threshold,
            planner.high_spending_threshold,
        );
        apply(&mut rules.savings_increase, planner.savings_increase);
        apply(&mut rules.dining_reduction, planner.dining_reduction);
        apply(&mut rules.dining_floor, planner.dining_floor);

        if let Some(baseline) = planner.baseline {
            let budget = &mut rules.baseline;
            apply(&mut budget.groceries, baseline.groceries);
            apply(&mut budget.dining, baseline.dining);
            apply(&mut budget.entertainment, baseline.entertainment);
            apply(&mut budget.transportation, baseline.transportation);
            apply(&mut budget.savings, baseline.savings);
            apply(&mut budget.total_weekly, baseline.total_weekly);
        }
    }

    Ok(config)
}

fn apply(target: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *target = v;
    }
}
