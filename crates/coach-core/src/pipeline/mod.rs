//! Analysis Pipeline - aggregation, advice, and budget planning
//!
//! Three stages run in a fixed order over an accumulating record:
//!
//! - **Aggregator** - totals per category, overall total, top category
//! - **Advisor** - threshold rules producing recommendations and alerts
//! - **Planner** - weekly budget allocation
//!
//! Each stage reads the previous snapshot and returns only its own fields.
//! The record types below enforce the order `Start -> Aggregated -> Advised
//! -> Planned`: a stage's output can only be read once that stage has run.
//!
//! ## Usage
//!
//! ```rust
//! use coach_core::{analyze, Transaction};
//!
//! let record = analyze(vec![Transaction::new("Restaurant", 250.0, "dining")]);
//! assert_eq!(record.total_spent, 250.0);
//! assert_eq!(record.alerts, vec!["High dining expenses detected"]);
//! ```

pub mod advisor;
pub mod aggregator;
pub mod planner;

use serde::Serialize;

use crate::models::{SpendingPatterns, Transaction, WeeklyBudget};
use crate::rules::RuleConfig;

pub use advisor::{advise, Advice};
pub use aggregator::{aggregate, Aggregation};
pub use planner::plan;

/// Pipeline state after aggregation
#[derive(Debug, Clone)]
pub struct Aggregated {
    transactions: Vec<Transaction>,
    aggregation: Aggregation,
}

impl Aggregated {
    /// Run the aggregation stage
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let aggregation = aggregate(&transactions);
        Self {
            transactions,
            aggregation,
        }
    }

    pub fn spending_patterns(&self) -> &SpendingPatterns {
        &self.aggregation.spending_patterns
    }

    /// Run the advice stage
    pub fn advise(self, rules: &RuleConfig) -> Advised {
        let advice = advise(&self.aggregation.spending_patterns, &rules.advisor);
        Advised {
            aggregated: self,
            advice,
        }
    }
}

/// Pipeline state after advice
#[derive(Debug, Clone)]
pub struct Advised {
    aggregated: Aggregated,
    advice: Advice,
}

impl Advised {
    pub fn advice(&self) -> &Advice {
        &self.advice
    }

    /// Run the planning stage, producing the finished record
    pub fn plan(self, rules: &RuleConfig) -> AnalysisRecord {
        let weekly_budget = plan(self.aggregated.aggregation.total_spent, &rules.planner);
        let Aggregated {
            transactions,
            aggregation,
        } = self.aggregated;

        AnalysisRecord {
            transactions,
            total_spent: aggregation.total_spent,
            spending_patterns: aggregation.spending_patterns,
            savings_recommendations: self.advice.savings_recommendations,
            alerts: self.advice.alerts,
            weekly_budget,
        }
    }
}

/// Completed analysis of one transaction list
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub transactions: Vec<Transaction>,
    pub total_spent: f64,
    pub spending_patterns: SpendingPatterns,
    pub savings_recommendations: Vec<String>,
    pub alerts: Vec<String>,
    pub weekly_budget: WeeklyBudget,
}

impl AnalysisRecord {
    /// Wire view of the record (everything except the input transactions)
    pub fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport {
            total_spent: self.total_spent,
            spending_patterns: &self.spending_patterns,
            savings_recommendations: &self.savings_recommendations,
            weekly_budget: &self.weekly_budget,
            alerts: &self.alerts,
        }
    }
}

/// Serialized analysis result
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub total_spent: f64,
    pub spending_patterns: &'a SpendingPatterns,
    pub savings_recommendations: &'a [String],
    pub weekly_budget: &'a WeeklyBudget,
    pub alerts: &'a [String],
}

/// Analyze transactions with the default rule set
pub fn analyze(transactions: Vec<Transaction>) -> AnalysisRecord {
    analyze_with(&RuleConfig::default(), transactions)
}

/// Analyze transactions with a custom rule set
pub fn analyze_with(rules: &RuleConfig, transactions: Vec<Transaction>) -> AnalysisRecord {
    let record = Aggregated::new(transactions).advise(rules).plan(rules);

    tracing::debug!(
        total_spent = record.total_spent,
        recommendations = record.savings_recommendations.len(),
        alerts = record.alerts.len(),
        "Analysis complete"
    );

    record
}
