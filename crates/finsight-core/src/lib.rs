//! Finsight Core Library
//!
//! Shared functionality for the Finsight spending advisor:
//! - Transaction model, validation, and the demo dataset
//! - CSV/JSON transaction loaders for collaborators
//! - The three-stage analysis pipeline (spending -> advice -> budget)
//! - Policy constants with TOML overrides
//!
//! The library is pure synchronous computation: no clock, no network, no
//! storage. Every analysis request builds its own state, so concurrent
//! callers need no coordination.

pub mod analysis;
pub mod error;
pub mod import;
pub mod models;
pub mod policy;

pub use analysis::{
    analyze, AnalysisPipeline, AnalysisReport, AnalysisState, BudgetPlanner, SavingsAdvisor,
    SpendingAnalyzer, Stage, SAVINGS_KEY, TOTAL_WEEKLY_KEY,
};
pub use error::{Error, Result};
pub use import::{detect_format, load_transactions, parse_csv, parse_json, InputFormat};
pub use models::{
    normalize_category, sample_transactions, validate_transactions, Category, Transaction,
};
pub use policy::Policy;
