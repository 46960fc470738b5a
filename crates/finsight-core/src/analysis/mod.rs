//! Three-stage spending analysis
//!
//! Raw transactions go through a strictly linear pipeline:
//!
//! - **Spending Analyzer** - per-category totals, total spent, dominant category
//! - **Savings Advisor** - threshold rules producing alerts and advice
//! - **Budget Planner** - weekly allocation with alert-driven reallocation
//!
//! Each stage reads the state the previous stage produced and returns an
//! extended copy; there is no branching, retry, or partial completion.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use finsight_core::{analyze, sample_transactions};
//!
//! let report = analyze(sample_transactions())?;
//! println!("{:?}", report.weekly_budget);
//! ```

pub mod advisor;
pub mod engine;
pub mod planner;
pub mod spending;
pub mod types;

pub use advisor::{
    category_alert, monthly_alert, SavingsAdvisor, EMERGENCY_FUND_RECOMMENDATION,
    GOOD_HABITS_RECOMMENDATION,
};
pub use engine::{analyze, AnalysisPipeline, Stage};
pub use planner::{BudgetPlanner, SAVINGS_KEY, TOTAL_WEEKLY_KEY};
pub use spending::SpendingAnalyzer;
pub use types::{AnalysisReport, AnalysisState};
