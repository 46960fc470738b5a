//! Pipeline orchestration
//!
//! The pipeline is a fixed three-stage sequence; there is no registration
//! API, no scheduler, and no branching. Each stage consumes the state and
//! returns the extended one, so stages stay independently testable.

use crate::error::Result;
use crate::models::{validate_transactions, Transaction};
use crate::policy::Policy;

use super::advisor::SavingsAdvisor;
use super::planner::BudgetPlanner;
use super::spending::SpendingAnalyzer;
use super::types::{AnalysisReport, AnalysisState};

/// One step of the analysis pipeline
pub trait Stage: Send + Sync {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// Transform the state into its extended successor
    fn run(&self, state: AnalysisState, policy: &Policy) -> Result<AnalysisState>;
}

/// The three-stage analysis pipeline
pub struct AnalysisPipeline {
    policy: Policy,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisPipeline {
    /// Pipeline with the built-in policy constants
    pub fn new() -> Self {
        Self {
            policy: Policy::default(),
        }
    }

    /// Pipeline with caller-supplied policy constants
    pub fn with_policy(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Run the full pipeline over one transaction list.
    ///
    /// Validation happens first; a malformed transaction fails the whole
    /// request and no stage runs. Deterministic for identical input and
    /// policy.
    pub fn analyze(&self, transactions: Vec<Transaction>) -> Result<AnalysisReport> {
        validate_transactions(&transactions)?;

        let stages: [&dyn Stage; 3] = [&SpendingAnalyzer, &SavingsAdvisor, &BudgetPlanner];

        let mut state = AnalysisState::new(transactions);
        for stage in stages {
            state = stage.run(state, &self.policy)?;
            tracing::debug!(stage = stage.name(), "stage complete");
        }

        tracing::debug!(
            total_spent = state.total_spent,
            alerts = state.alerts.len(),
            "analysis complete"
        );
        Ok(state.into_report())
    }
}

/// Analyze a transaction list with the built-in policy.
pub fn analyze(transactions: Vec<Transaction>) -> Result<AnalysisReport> {
    AnalysisPipeline::new().analyze(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_transactions, Transaction};

    #[test]
    fn test_validation_failure_stops_the_request() {
        let result = analyze(vec![Transaction::new("refund", -12.0, "dining")]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn test_empty_input_produces_zero_report() {
        let report = analyze(vec![]).unwrap();
        assert_eq!(report.total_spent, 0.0);
        assert_eq!(report.highest_spending_category, None);
        assert!(report.alerts.is_empty());
        assert_eq!(report.weekly_budget["total_weekly"], 700.0);
    }

    #[test]
    fn test_pipeline_populates_every_section() {
        let report = analyze(sample_transactions()).unwrap();
        assert!(report.total_spent > 0.0);
        assert!(!report.category_breakdown.is_empty());
        assert!(!report.savings_recommendations.is_empty());
        assert!(!report.weekly_budget.is_empty());
    }

    #[test]
    fn test_custom_policy_flows_through() {
        let mut policy = Policy::default();
        policy.monthly_spending_limit = 100.0;

        let report = AnalysisPipeline::with_policy(policy)
            .analyze(sample_transactions())
            .unwrap();
        assert_eq!(report.alerts, vec!["Monthly spending exceeds $100"]);
    }
}
