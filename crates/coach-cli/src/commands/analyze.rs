//! Analyze command implementation

use std::path::Path;

use anyhow::{Context, Result};
use coach_core::{analyze_with, read_transactions, AnalysisRecord, FileFormat, RuleConfig};

use super::money;

pub fn cmd_analyze(
    rules: &RuleConfig,
    file: &Path,
    format: Option<&str>,
    json: bool,
) -> Result<()> {
    let format: Option<FileFormat> = format
        .map(|f| f.parse().map_err(|e: String| anyhow::anyhow!(e)))
        .transpose()?;

    let transactions = read_transactions(file, format)
        .with_context(|| format!("Failed to read transactions from {}", file.display()))?;

    tracing::debug!(count = transactions.len(), "Loaded transactions");

    let record = analyze_with(rules, transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&record.report())?);
    } else {
        print!("{}", render_report(&record));
    }

    Ok(())
}

/// Human-readable report
pub fn render_report(record: &AnalysisRecord) -> String {
    let patterns = &record.spending_patterns;

    let mut out = String::from("📊 Spending Summary\n");
    out.push_str("   ─────────────────────────────\n");
    out.push_str(&format!(
        "   Transactions:     {}\n",
        record.transactions.len()
    ));
    out.push_str(&format!(
        "   Total spent:      {}\n",
        money(record.total_spent)
    ));
    out.push_str(&format!(
        "   Highest category: {}\n",
        patterns.highest_spending
    ));

    if !patterns.category_breakdown.is_empty() {
        out.push_str(&format!("\n   {:<20} {:>12}\n", "Category", "Amount"));
        for (category, total) in patterns.category_breakdown.iter() {
            out.push_str(&format!("   {:<20} {:>12}\n", category, money(total)));
        }
    }

    out.push_str("\n💡 Recommendations\n");
    for rec in &record.savings_recommendations {
        out.push_str(&format!("   • {}\n", rec));
    }

    if record.alerts.is_empty() {
        out.push_str("\n✅ No alerts\n");
    } else {
        out.push_str("\n⚠️  Alerts\n");
        for alert in &record.alerts {
            out.push_str(&format!("   • {}\n", alert));
        }
    }

    out.push_str("\n📅 Weekly Budget\n");
    for (line, amount) in record.weekly_budget.lines() {
        out.push_str(&format!("   {:<20} {:>12}\n", line, money(amount)));
    }

    out
}
