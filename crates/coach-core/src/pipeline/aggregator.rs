//! Aggregator - groups transactions by category and totals them

use crate::models::{CategoryBreakdown, SpendingPatterns, Transaction, NO_HIGHEST_SPENDING};

/// Fields produced by the aggregation stage
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub total_spent: f64,
    pub spending_patterns: SpendingPatterns,
}

/// Sum amounts per category and overall
///
/// Never fails. An empty list yields zero totals and a `highest_spending`
/// of `"None"`.
pub fn aggregate(transactions: &[Transaction]) -> Aggregation {
    let mut breakdown = CategoryBreakdown::new();
    let mut total = 0.0;

    for tx in transactions {
        breakdown.add(&tx.category, tx.amount);
        total += tx.amount;
    }

    let highest_spending = breakdown
        .highest()
        .unwrap_or(NO_HIGHEST_SPENDING)
        .to_string();

    tracing::debug!(
        transactions = transactions.len(),
        categories = breakdown.len(),
        total_spent = total,
        highest = %highest_spending,
        "Aggregated spending"
    );

    Aggregation {
        total_spent: total,
        spending_patterns: SpendingPatterns {
            total_spent: total,
            category_breakdown: breakdown,
            highest_spending,
        },
    }
}
