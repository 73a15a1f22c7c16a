//! Advisor - threshold rules over the spending patterns
//!
//! Rules are independent: each one is checked against the same snapshot and
//! any number may fire. Output order follows rule order.

use crate::models::SpendingPatterns;
use crate::rules::{AdvisorRules, DINING_CATEGORY, ENTERTAINMENT_CATEGORY};

pub const REDUCE_DINING: &str = "Reduce dining out expenses by cooking at home more";
pub const FREE_ENTERTAINMENT: &str = "Consider free entertainment options";
pub const EMERGENCY_FUND: &str = "Create emergency fund with 20% of monthly income";
pub const GOOD_HABITS: &str = "Good spending habits! Consider increasing investments";

pub const HIGH_DINING_ALERT: &str = "High dining expenses detected";

/// Fields produced by the advice stage
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Advice {
    pub savings_recommendations: Vec<String>,
    pub alerts: Vec<String>,
}

/// Alert text for the overall spending rule
///
/// Renders as "Monthly spending exceeds $1000" with the default threshold.
pub fn total_spending_alert(threshold: f64) -> String {
    format!("Monthly spending exceeds ${}", threshold)
}

/// Apply the advisory rules
pub fn advise(patterns: &SpendingPatterns, rules: &AdvisorRules) -> Advice {
    let categories = &patterns.category_breakdown;
    let mut advice = Advice::default();

    if categories.amount_for(DINING_CATEGORY) > rules.dining_threshold {
        advice.savings_recommendations.push(REDUCE_DINING.to_string());
        advice.alerts.push(HIGH_DINING_ALERT.to_string());
    }

    if categories.amount_for(ENTERTAINMENT_CATEGORY) > rules.entertainment_threshold {
        advice
            .savings_recommendations
            .push(FREE_ENTERTAINMENT.to_string());
    }

    if patterns.total_spent > rules.total_spending_threshold {
        advice.savings_recommendations.push(EMERGENCY_FUND.to_string());
        advice
            .alerts
            .push(total_spending_alert(rules.total_spending_threshold));
    }

    if advice.savings_recommendations.is_empty() {
        advice.savings_recommendations.push(GOOD_HABITS.to_string());
    }

    tracing::debug!(
        recommendations = advice.savings_recommendations.len(),
        alerts = advice.alerts.len(),
        "Applied advisory rules"
    );

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryBreakdown;

    fn patterns(entries: &[(&str, f64)]) -> SpendingPatterns {
        let mut breakdown = CategoryBreakdown::new();
        let mut total = 0.0;
        for (name, amount) in entries {
            breakdown.add(name, *amount);
            total += amount;
        }
        SpendingPatterns {
            total_spent: total,
            highest_spending: breakdown.highest().unwrap_or("None").to_string(),
            category_breakdown: breakdown,
        }
    }

    #[test]
    fn test_total_spending_alert_text() {
        assert_eq!(total_spending_alert(1000.0), "Monthly spending exceeds $1000");
        assert_eq!(total_spending_alert(750.5), "Monthly spending exceeds $750.5");
    }

    #[test]
    fn test_no_rules_fire_gives_default() {
        let advice = advise(&patterns(&[("shopping", 120.0)]), &AdvisorRules::default());
        assert_eq!(advice.savings_recommendations, vec![GOOD_HABITS]);
        assert!(advice.alerts.is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let advice = advise(
            &patterns(&[("dining", 200.0), ("entertainment", 150.0), ("rent", 650.0)]),
            &AdvisorRules::default(),
        );
        // dining == 200, entertainment == 150, total == 1000: nothing fires
        assert_eq!(advice.savings_recommendations, vec![GOOD_HABITS]);
        assert!(advice.alerts.is_empty());
    }

    #[test]
    fn test_entertainment_has_no_alert() {
        let advice = advise(
            &patterns(&[("entertainment", 151.0)]),
            &AdvisorRules::default(),
        );
        assert_eq!(advice.savings_recommendations, vec![FREE_ENTERTAINMENT]);
        assert!(advice.alerts.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let advice = advise(
            &patterns(&[("dining", 300.0), ("entertainment", 200.0), ("rent", 800.0)]),
            &AdvisorRules::default(),
        );
        assert_eq!(
            advice.savings_recommendations,
            vec![REDUCE_DINING, FREE_ENTERTAINMENT, EMERGENCY_FUND]
        );
        assert_eq!(
            advice.alerts,
            vec![HIGH_DINING_ALERT, "Monthly spending exceeds $1000"]
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        // "Dining" is a different category from "dining"
        let advice = advise(&patterns(&[("Dining", 500.0)]), &AdvisorRules::default());
        assert_eq!(advice.savings_recommendations, vec![GOOD_HABITS]);
    }

    #[test]
    fn test_custom_thresholds() {
        let rules = AdvisorRules {
            dining_threshold: 50.0,
            entertainment_threshold: 150.0,
            total_spending_threshold: 80.0,
        };
        let advice = advise(&patterns(&[("dining", 60.0), ("groceries", 30.0)]), &rules);
        assert_eq!(
            advice.alerts,
            vec![HIGH_DINING_ALERT, "Monthly spending exceeds $80"]
        );
    }
}
