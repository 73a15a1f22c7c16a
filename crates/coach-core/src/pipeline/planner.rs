//! Planner - weekly budget allocation

use crate::models::WeeklyBudget;
use crate::rules::PlannerRules;

/// Build the weekly budget from the baseline, shifting money from dining to
/// savings when total spending is high
///
/// `total_weekly` keeps its baseline value even when other lines change.
pub fn plan(total_spent: f64, rules: &PlannerRules) -> WeeklyBudget {
    let mut budget = rules.baseline;

    if total_spent > rules.high_spending_threshold {
        budget.savings += rules.savings_increase;
        budget.dining = (budget.dining - rules.dining_reduction).max(rules.dining_floor);
        tracing::debug!(
            total_spent,
            savings = budget.savings,
            dining = budget.dining,
            "Adjusted weekly budget for high spending"
        );
    }

    budget
}
