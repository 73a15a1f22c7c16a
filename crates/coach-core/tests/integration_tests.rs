//! Integration tests for coach-core
//!
//! These tests exercise the full aggregate → advise → plan workflow.

use coach_core::{
    analyze, analyze_with,
    import::parse_csv,
    models::WeeklyBudget,
    pipeline::advisor::{EMERGENCY_FUND, GOOD_HABITS, HIGH_DINING_ALERT, REDUCE_DINING},
    RuleConfig, Transaction,
};
use proptest::prelude::*;

fn tx(category: &str, amount: f64) -> Transaction {
    Transaction::new(format!("{} purchase", category), amount, category)
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_empty_input() {
    let record = analyze(vec![]);

    assert_eq!(record.total_spent, 0.0);
    assert!(record.spending_patterns.category_breakdown.is_empty());
    assert_eq!(record.spending_patterns.highest_spending, "None");
    assert_eq!(record.savings_recommendations, vec![GOOD_HABITS]);
    assert!(record.alerts.is_empty());
    assert_eq!(record.weekly_budget, WeeklyBudget::default());
}

#[test]
fn test_high_dining() {
    let record = analyze(vec![tx("dining", 250.0)]);

    assert_eq!(record.total_spent, 250.0);
    assert!(record.alerts.iter().any(|a| a == HIGH_DINING_ALERT));
    assert!(record
        .savings_recommendations
        .iter()
        .any(|r| r == REDUCE_DINING));
}

#[test]
fn test_dining_and_total_alerts_without_budget_change() {
    let record = analyze(vec![tx("groceries", 600.0), tx("dining", 500.0)]);

    assert_eq!(record.total_spent, 1100.0);
    assert_eq!(
        record.alerts,
        vec![HIGH_DINING_ALERT, "Monthly spending exceeds $1000"]
    );
    assert_eq!(
        record.savings_recommendations,
        vec![REDUCE_DINING, EMERGENCY_FUND]
    );
    assert_eq!(record.weekly_budget.total_weekly, 575.0);
    assert_eq!(record.weekly_budget, WeeklyBudget::default());
}

#[test]
fn test_high_spending_adjusts_budget_but_not_total() {
    let record = analyze(vec![tx("dining", 1300.0)]);

    assert_eq!(record.total_spent, 1300.0);
    assert_eq!(record.weekly_budget.savings, 250.0);
    assert_eq!(record.weekly_budget.dining, 50.0);
    assert_eq!(record.weekly_budget.total_weekly, 575.0);
}

#[test]
fn test_unremarkable_spending() {
    let record = analyze(vec![tx("shopping", 120.0)]);

    assert_eq!(record.savings_recommendations, vec![GOOD_HABITS]);
    assert!(record.alerts.is_empty());
    assert_eq!(record.spending_patterns.highest_spending, "shopping");
}

#[test]
fn test_csv_to_report() {
    let csv = "description,amount,category\n\
               Steakhouse,180,dining\n\
               Sushi,90,dining\n\
               Concert,160,entertainment\n";
    let transactions = parse_csv(csv.as_bytes()).expect("Failed to parse CSV");
    let record = analyze(transactions);

    let json = serde_json::to_value(record.report()).unwrap();
    assert_eq!(json["total_spent"], 430.0);
    assert_eq!(json["spending_patterns"]["category_breakdown"]["dining"], 270.0);
    assert_eq!(json["spending_patterns"]["highest_spending"], "dining");
    assert_eq!(
        json["savings_recommendations"],
        serde_json::json!([
            "Reduce dining out expenses by cooking at home more",
            "Consider free entertainment options"
        ])
    );
    assert_eq!(json["alerts"], serde_json::json!(["High dining expenses detected"]));
    assert_eq!(json["weekly_budget"]["total_weekly"], 575.0);
}

#[test]
fn test_custom_rules_flow_through() {
    let rules = coach_core::rules::parse_config(
        r#"
        [advisor]
        total_spending_threshold = 250

        [planner]
        high_spending_threshold = 300
        savings_increase = 100
        "#,
    )
    .unwrap();

    let record = analyze_with(&rules, vec![tx("rent", 400.0)]);
    assert_eq!(
        record.alerts,
        vec!["Monthly spending exceeds $250".to_string()]
    );
    assert_eq!(record.weekly_budget.savings, 300.0);
    assert_eq!(record.weekly_budget.dining, 50.0);

    // Defaults unaffected
    let record = analyze_with(&RuleConfig::default(), vec![tx("rent", 400.0)]);
    assert!(record.alerts.is_empty());
}

// =============================================================================
// Property Tests
// =============================================================================

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dining".to_string()),
        Just("entertainment".to_string()),
        Just("groceries".to_string()),
        Just("transportation".to_string()),
        "[a-z]{1,8}",
    ]
}

// Whole cents keep rounding error far below the comparison tolerance
fn amount_strategy() -> impl Strategy<Value = f64> {
    (-50_000i64..500_000i64).prop_map(|cents| cents as f64 / 100.0)
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (category_strategy(), amount_strategy())
            .prop_map(|(category, amount)| Transaction::new("generated", amount, category)),
        0..40,
    )
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

proptest! {
    #[test]
    fn prop_total_is_sum_of_amounts(txs in transactions_strategy()) {
        let expected: f64 = txs.iter().map(|t| t.amount).sum();
        let record = analyze(txs);
        prop_assert!(approx_eq(record.total_spent, expected));
        prop_assert_eq!(record.total_spent, record.spending_patterns.total_spent);
    }

    #[test]
    fn prop_breakdown_sums_to_total(txs in transactions_strategy()) {
        let record = analyze(txs);
        let breakdown_sum: f64 = record
            .spending_patterns
            .category_breakdown
            .iter()
            .map(|(_, total)| total)
            .sum();
        prop_assert!(approx_eq(breakdown_sum, record.total_spent));
    }

    #[test]
    fn prop_highest_is_present_and_maximal(txs in transactions_strategy()) {
        let record = analyze(txs);
        let patterns = &record.spending_patterns;

        if patterns.category_breakdown.is_empty() {
            prop_assert_eq!(patterns.highest_spending.as_str(), "None");
        } else {
            let top = patterns
                .category_breakdown
                .get(&patterns.highest_spending);
            prop_assert!(top.is_some());
            let top = top.unwrap();
            for (_, total) in patterns.category_breakdown.iter() {
                prop_assert!(top >= total);
            }
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(txs in transactions_strategy()) {
        let first = analyze(txs.clone());
        let second = analyze(txs);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first.report()).unwrap(),
            serde_json::to_string(&second.report()).unwrap()
        );
    }

    #[test]
    fn prop_always_some_recommendation(txs in transactions_strategy()) {
        let record = analyze(txs);
        prop_assert!(!record.savings_recommendations.is_empty());
        prop_assert!(record.alerts.len() <= 2);
        prop_assert_eq!(record.weekly_budget.total_weekly, 575.0);
    }
}
