//! Data shapes for the analysis pipeline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// The pipeline's working record.
///
/// Created fresh per request, handed from stage to stage as a value (each
/// stage consumes the state and returns the extended one), and discarded
/// once the report is produced. Ordered maps keep iteration and
/// serialization deterministic.
#[derive(Debug, Clone)]
pub struct AnalysisState {
    /// The input sequence, unmodified
    pub transactions: Vec<Transaction>,
    /// Category key to summed amount; recognized categories always present
    pub category_breakdown: BTreeMap<String, f64>,
    /// Sum of all transaction amounts
    pub total_spent: f64,
    /// Category with the maximum bucket; None when nothing was spent
    pub highest_spending_category: Option<String>,
    /// Ordered advice strings, appended by the advisor stage
    pub savings_recommendations: Vec<String>,
    /// Ordered alert strings, appended by the advisor stage
    pub alerts: Vec<String>,
    /// Category key (plus `savings` and `total_weekly`) to weekly allocation
    pub weekly_budget: BTreeMap<String, f64>,
}

impl AnalysisState {
    /// Fresh state around an input list; every derived field starts empty.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            category_breakdown: BTreeMap::new(),
            total_spent: 0.0,
            highest_spending_category: None,
            savings_recommendations: Vec::new(),
            alerts: Vec::new(),
            weekly_budget: BTreeMap::new(),
        }
    }

    /// Finish the pipeline: keep the derived fields, drop the input list.
    pub fn into_report(self) -> AnalysisReport {
        AnalysisReport {
            total_spent: self.total_spent,
            category_breakdown: self.category_breakdown,
            highest_spending_category: self.highest_spending_category,
            savings_recommendations: self.savings_recommendations,
            alerts: self.alerts,
            weekly_budget: self.weekly_budget,
        }
    }
}

/// The externally visible analysis result.
///
/// Field names are the wire contract for any collaborator rendering or
/// transporting the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_spent: f64,
    pub category_breakdown: BTreeMap<String, f64>,
    pub highest_spending_category: Option<String>,
    pub savings_recommendations: Vec<String>,
    pub alerts: Vec<String>,
    pub weekly_budget: BTreeMap<String, f64>,
}
