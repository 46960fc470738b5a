//! Spending Analyzer stage
//!
//! Aggregates raw transactions into per-category totals and identifies the
//! total spent and the dominant category.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{normalize_category, Category};
use crate::policy::Policy;

use super::engine::Stage;
use super::types::AnalysisState;

/// First pipeline stage: buckets, total, dominant category.
pub struct SpendingAnalyzer;

impl Stage for SpendingAnalyzer {
    fn name(&self) -> &'static str {
        "spending_analyzer"
    }

    fn run(&self, mut state: AnalysisState, _policy: &Policy) -> Result<AnalysisState> {
        // Every recognized category reports a value, zero included, so the
        // breakdown is complete even for sparse input.
        let mut breakdown: BTreeMap<String, f64> = Category::all()
            .iter()
            .map(|c| (c.as_str().to_string(), 0.0))
            .collect();

        let mut total = 0.0;
        for tx in &state.transactions {
            let key = normalize_category(&tx.category);
            *breakdown.entry(key).or_insert(0.0) += tx.amount;
            total += tx.amount;
        }

        state.highest_spending_category = if total > 0.0 {
            highest_category(&breakdown)
        } else {
            // Nothing spent (empty input included): no dominant category
            None
        };
        state.category_breakdown = breakdown;
        state.total_spent = total;

        Ok(state)
    }
}

/// Pick the maximum bucket. Ties go to the earliest key in the fixed
/// ordering: recognized categories in declaration order, then unrecognized
/// keys lexicographically.
fn highest_category(breakdown: &BTreeMap<String, f64>) -> Option<String> {
    let recognized = Category::all().iter().map(|c| c.as_str().to_string());
    let unrecognized = breakdown
        .keys()
        .filter(|k| k.parse::<Category>().is_err())
        .cloned();

    let mut best: Option<(String, f64)> = None;
    for key in recognized.chain(unrecognized) {
        let Some(&amount) = breakdown.get(&key) else {
            continue;
        };
        match &best {
            Some((_, best_amount)) if amount <= *best_amount => {}
            _ => best = Some((key, amount)),
        }
    }
    best.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_transactions, Transaction};

    fn run(transactions: Vec<Transaction>) -> AnalysisState {
        SpendingAnalyzer
            .run(AnalysisState::new(transactions), &Policy::default())
            .unwrap()
    }

    #[test]
    fn test_empty_input_reports_zeroed_recognized_set() {
        let state = run(vec![]);
        assert_eq!(state.total_spent, 0.0);
        assert_eq!(state.highest_spending_category, None);
        assert_eq!(state.category_breakdown.len(), Category::all().len());
        assert!(state.category_breakdown.values().all(|&v| v == 0.0));
    }

    #[test]
    fn test_aggregates_sample_dataset() {
        let state = run(sample_transactions());
        assert!((state.total_spent - 365.0).abs() < 1e-9);
        assert_eq!(state.category_breakdown["shopping"], 120.0);
        assert_eq!(state.category_breakdown["groceries"], 85.0);
        assert_eq!(state.highest_spending_category.as_deref(), Some("shopping"));
    }

    #[test]
    fn test_casing_variants_share_a_bucket() {
        let state = run(vec![
            Transaction::new("lunch", 10.0, "Dining"),
            Transaction::new("dinner", 20.0, " dining "),
        ]);
        assert_eq!(state.category_breakdown["dining"], 30.0);
    }

    #[test]
    fn test_unrecognized_category_gets_own_bucket() {
        let state = run(vec![Transaction::new("flight", 300.0, "travel")]);
        assert_eq!(state.category_breakdown["travel"], 300.0);
        assert_eq!(state.highest_spending_category.as_deref(), Some("travel"));
        // the recognized set is still fully reported
        assert_eq!(state.category_breakdown["dining"], 0.0);
    }

    #[test]
    fn test_tie_breaks_on_fixed_ordering() {
        let state = run(vec![
            Transaction::new("a", 50.0, "dining"),
            Transaction::new("b", 50.0, "groceries"),
        ]);
        // groceries precedes dining in the fixed ordering
        assert_eq!(
            state.highest_spending_category.as_deref(),
            Some("groceries")
        );

        let state = run(vec![
            Transaction::new("a", 50.0, "travel"),
            Transaction::new("b", 50.0, "shopping"),
        ]);
        // recognized categories win ties against unrecognized ones
        assert_eq!(state.highest_spending_category.as_deref(), Some("shopping"));
    }

    #[test]
    fn test_all_zero_amounts_have_no_dominant_category() {
        let state = run(vec![Transaction::new("freebie", 0.0, "dining")]);
        assert_eq!(state.total_spent, 0.0);
        assert_eq!(state.highest_spending_category, None);
    }
}
