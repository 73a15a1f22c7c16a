//! Domain models for Coach

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Category used when a transaction arrives without one
pub const DEFAULT_CATEGORY: &str = "other";

/// Placeholder for `highest_spending` when there are no transactions
pub const NO_HIGHEST_SPENDING: &str = "None";

/// A single spending record
///
/// Categories are free-form labels. Unknown categories are valid and are
/// aggregated under their literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    /// May be negative or zero
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    pub fn new(description: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}

/// Summed amounts per category, in order of first occurrence
///
/// Serializes as a JSON object whose key order follows the input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    entries: Vec<(String, f64)>,
    /// Position of each category in `entries`
    index: HashMap<String, usize>,
}

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, appending the category if it is new
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    /// Summed amount for a category, if present
    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&pos| self.entries[pos].1)
    }

    /// Summed amount for a category, treating absent categories as zero
    pub fn amount_for(&self, category: &str) -> f64 {
        self.get(category).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Category with the largest total; the earliest category wins ties
    pub fn highest(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, total) in self.iter() {
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((name, total)),
            }
        }
        best.map(|(name, _)| name)
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, total) in &self.entries {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

/// Aggregated view of a transaction list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingPatterns {
    pub total_spent: f64,
    pub category_breakdown: CategoryBreakdown,
    /// Top category, or [`NO_HIGHEST_SPENDING`] for an empty list
    pub highest_spending: String,
}

/// Proposed per-category allocation for the coming week
///
/// `total_weekly` is a fixed line, not the sum of the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBudget {
    pub groceries: f64,
    pub dining: f64,
    pub entertainment: f64,
    pub transportation: f64,
    pub savings: f64,
    pub total_weekly: f64,
}

impl WeeklyBudget {
    /// Budget lines as (name, amount) pairs in display order
    pub fn lines(&self) -> [(&'static str, f64); 6] {
        [
            ("groceries", self.groceries),
            ("dining", self.dining),
            ("entertainment", self.entertainment),
            ("transportation", self.transportation),
            ("savings", self.savings),
            ("total_weekly", self.total_weekly),
        ]
    }
}

impl Default for WeeklyBudget {
    fn default() -> Self {
        Self {
            groceries: 150.0,
            dining: 75.0,
            entertainment: 50.0,
            transportation: 100.0,
            savings: 200.0,
            total_weekly: 575.0,
        }
    }
}
