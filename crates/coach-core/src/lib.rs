//! Coach Core Library
//!
//! Shared functionality for the Coach personal finance analyzer:
//! - Transaction and report models
//! - Analysis pipeline (aggregation, advisory rules, weekly budget planning)
//! - Rule configuration with embedded defaults and file overrides
//! - JSON and CSV transaction file readers
//! - Built-in sample data

pub mod error;
pub mod import;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod sample;

pub use error::{Error, Result};
pub use import::{read_transactions, FileFormat};
pub use models::{CategoryBreakdown, SpendingPatterns, Transaction, WeeklyBudget};
pub use pipeline::{analyze, analyze_with, AnalysisRecord, AnalysisReport};
pub use rules::{AdvisorRules, PlannerRules, RuleConfig};
pub use sample::sample_transactions;
