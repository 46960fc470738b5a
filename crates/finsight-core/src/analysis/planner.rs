//! Budget Planner stage
//!
//! Produces the suggested weekly allocation from the baseline policy table,
//! shifting money from alerted categories into savings.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::Category;
use crate::policy::Policy;

use super::advisor::category_alert;
use super::engine::Stage;
use super::types::AnalysisState;

/// Synthetic budget key for the savings line
pub const SAVINGS_KEY: &str = "savings";

/// Synthetic budget key for the sum of all other entries
pub const TOTAL_WEEKLY_KEY: &str = "total_weekly";

/// Third pipeline stage: weekly budget with alert-driven reallocation.
pub struct BudgetPlanner;

impl Stage for BudgetPlanner {
    fn name(&self) -> &'static str {
        "budget_planner"
    }

    fn run(&self, mut state: AnalysisState, policy: &Policy) -> Result<AnalysisState> {
        let mut budget: BTreeMap<String, f64> = Category::all()
            .iter()
            .map(|c| (c.as_str().to_string(), policy.weekly_allocation(*c)))
            .collect();
        let mut savings = policy.weekly_savings;

        // Each category alert moves the reallocation step out of that
        // category and into savings, 1:1, clamped so an allocation never
        // goes negative. The overall monthly alert maps to no category.
        for category in Category::all() {
            let alert = category_alert(*category);
            if !state.alerts.iter().any(|a| *a == alert) {
                continue;
            }
            if let Some(allocation) = budget.get_mut(category.as_str()) {
                let step = policy.reallocation_step.min(*allocation);
                *allocation -= step;
                savings += step;
            }
        }

        budget.insert(SAVINGS_KEY.to_string(), savings);
        let total: f64 = budget.values().sum();
        budget.insert(TOTAL_WEEKLY_KEY.to_string(), total);

        state.weekly_budget = budget;
        Ok(state)
    }
}
