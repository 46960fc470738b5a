//! Savings Advisor stage
//!
//! Evaluates threshold rules against the aggregated spending snapshot and
//! emits ordered alerts and savings recommendations. Rules run in a fixed
//! order over the same snapshot; no rule reads another rule's output and no
//! rule removes or rewrites an earlier entry.

use crate::error::Result;
use crate::models::Category;
use crate::policy::Policy;

use super::engine::Stage;
use super::types::AnalysisState;

/// Issued when no threshold was breached.
pub const GOOD_HABITS_RECOMMENDATION: &str =
    "Good spending habits! Consider increasing investments";

/// Issued whenever at least one alert fired.
pub const EMERGENCY_FUND_RECOMMENDATION: &str =
    "Build an emergency fund covering 3 to 6 months of expenses";

/// Alert text for a category that breached its monthly limit.
pub fn category_alert(category: Category) -> String {
    format!("High {} expenses detected", category)
}

/// Alert text for a breached overall monthly limit.
pub fn monthly_alert(limit: f64) -> String {
    format!("Monthly spending exceeds ${:.0}", limit)
}

/// Second pipeline stage: rule-based alerts and advice.
pub struct SavingsAdvisor;

impl Stage for SavingsAdvisor {
    fn name(&self) -> &'static str {
        "savings_advisor"
    }

    fn run(&self, mut state: AnalysisState, policy: &Policy) -> Result<AnalysisState> {
        let mut alerts = Vec::new();
        let mut recommendations = Vec::new();

        // Rule 1: overall monthly total
        if state.total_spent > policy.monthly_spending_limit {
            alerts.push(monthly_alert(policy.monthly_spending_limit));
        }

        // Rule 2: each recognized category, in the fixed ordering
        for category in Category::all() {
            let spent = state
                .category_breakdown
                .get(category.as_str())
                .copied()
                .unwrap_or(0.0);
            if spent > policy.category_limit(*category) {
                alerts.push(category_alert(*category));
                recommendations.push(category.recommendation().to_string());
            }
        }

        // Rules 3 and 4 key off whether anything breached, computed from the
        // same snapshot the rules above saw
        if alerts.is_empty() {
            recommendations.push(GOOD_HABITS_RECOMMENDATION.to_string());
        } else {
            recommendations.push(EMERGENCY_FUND_RECOMMENDATION.to_string());
        }

        state.alerts = alerts;
        state.savings_recommendations = recommendations;

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::spending::SpendingAnalyzer;
    use crate::models::{sample_transactions, Transaction};

    fn advise(transactions: Vec<Transaction>) -> AnalysisState {
        let policy = Policy::default();
        let state = SpendingAnalyzer
            .run(AnalysisState::new(transactions), &policy)
            .unwrap();
        SavingsAdvisor.run(state, &policy).unwrap()
    }

    #[test]
    fn test_quiet_month_gets_only_positive_reinforcement() {
        let state = advise(sample_transactions());
        assert!(state.alerts.is_empty());
        assert_eq!(
            state.savings_recommendations,
            vec![GOOD_HABITS_RECOMMENDATION.to_string()]
        );
    }

    #[test]
    fn test_category_breach_raises_alert_and_advice() {
        let state = advise(vec![Transaction::new("steakhouse", 180.0, "dining")]);
        assert_eq!(state.alerts, vec!["High dining expenses detected"]);
        assert_eq!(
            state.savings_recommendations,
            vec![
                Category::Dining.recommendation().to_string(),
                EMERGENCY_FUND_RECOMMENDATION.to_string(),
            ]
        );
    }

    #[test]
    fn test_monthly_breach_without_category_breach() {
        // Spread spending so no single category crosses its limit
        let state = advise(vec![
            Transaction::new("food", 390.0, "groceries"),
            Transaction::new("bus", 190.0, "transportation"),
            Transaction::new("clothes", 290.0, "shopping"),
            Transaction::new("misc", 190.0, "other"),
        ]);
        assert_eq!(state.alerts, vec!["Monthly spending exceeds $1000"]);
        assert_eq!(
            state.savings_recommendations,
            vec![EMERGENCY_FUND_RECOMMENDATION.to_string()]
        );
    }

    #[test]
    fn test_alert_order_is_total_then_fixed_category_order() {
        let state = advise(vec![
            Transaction::new("clothes", 400.0, "shopping"),
            Transaction::new("restaurants", 200.0, "dining"),
            Transaction::new("food", 500.0, "groceries"),
        ]);
        assert_eq!(
            state.alerts,
            vec![
                "Monthly spending exceeds $1000",
                "High groceries expenses detected",
                "High dining expenses detected",
                "High shopping expenses detected",
            ]
        );
    }

    #[test]
    fn test_exact_limit_does_not_breach() {
        let state = advise(vec![Transaction::new("dinner", 150.0, "dining")]);
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn test_unrecognized_categories_never_alert() {
        let state = advise(vec![Transaction::new("flight", 900.0, "travel")]);
        assert!(state.alerts.is_empty());
        assert_eq!(
            state.savings_recommendations,
            vec![GOOD_HABITS_RECOMMENDATION.to_string()]
        );
    }

    #[test]
    fn test_custom_policy_thresholds_change_rule_behavior() {
        let mut policy = Policy::default();
        policy
            .category_limits
            .insert(Category::Dining, 60.0);

        let state = SpendingAnalyzer
            .run(
                AnalysisState::new(vec![Transaction::new("dinner", 65.0, "dining")]),
                &policy,
            )
            .unwrap();
        let state = SavingsAdvisor.run(state, &policy).unwrap();
        assert_eq!(state.alerts, vec!["High dining expenses detected"]);
    }
}
