//! Built-in sample transactions for demos and the web UI

use crate::models::Transaction;

/// A small month of everyday spending
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("Grocery Store", 85.0, "groceries"),
        Transaction::new("Restaurant", 65.0, "dining"),
        Transaction::new("Movie Tickets", 40.0, "entertainment"),
        Transaction::new("Gas Station", 55.0, "transportation"),
        Transaction::new("Online Shopping", 120.0, "shopping"),
    ]
}
