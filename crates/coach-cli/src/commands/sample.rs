//! Sample data command

use anyhow::Result;
use coach_core::{sample_transactions, Transaction};

use super::{money, truncate};

pub fn cmd_sample(table: bool) -> Result<()> {
    let transactions = sample_transactions();

    if table {
        print!("{}", render_table(&transactions));
    } else {
        let doc = serde_json::json!({ "transactions": transactions });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }

    Ok(())
}

pub fn render_table(transactions: &[Transaction]) -> String {
    let mut out = format!(
        "{:<24} {:<16} {:>10}\n",
        "Description", "Category", "Amount"
    );
    out.push_str(&format!("{}\n", "─".repeat(52)));
    for tx in transactions {
        out.push_str(&format!(
            "{:<24} {:<16} {:>10}\n",
            truncate(&tx.description, 24),
            truncate(&tx.category, 16),
            money(tx.amount)
        ));
    }
    out
}
