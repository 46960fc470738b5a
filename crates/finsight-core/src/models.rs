//! Domain models for Finsight

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The recognized spending categories.
///
/// The declaration order is the fixed category ordering used for rule
/// evaluation, budget table construction, and tie-breaking when two
/// categories spend the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Groceries,
    Dining,
    Entertainment,
    Transportation,
    Shopping,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Dining => "dining",
            Self::Entertainment => "entertainment",
            Self::Transportation => "transportation",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }

    /// All recognized categories, in the fixed ordering.
    pub fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Dining,
            Self::Entertainment,
            Self::Transportation,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// The savings recommendation issued when this category breaches its limit.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Groceries => "Plan meals ahead and buy groceries in bulk to cut costs",
            Self::Dining => "Reduce dining out expenses by cooking at home more often",
            Self::Entertainment => "Look for free or low-cost entertainment options",
            Self::Transportation => "Use public transit or carpool to lower transportation costs",
            Self::Shopping => "Pause non-essential shopping and wait 48 hours before buying",
            Self::Other => "Review miscellaneous expenses for recurring charges to cancel",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groceries" => Ok(Self::Groceries),
            "dining" => Ok(Self::Dining),
            "entertainment" => Ok(Self::Entertainment),
            "transportation" => Ok(Self::Transportation),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-entered expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-text description, may be empty
    pub description: String,
    /// Amount spent, non-negative, in currency units
    pub amount: f64,
    /// Category name; unrecognized values are kept as their own bucket
    pub category: String,
}

impl Transaction {
    pub fn new(description: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}

/// Normalize a raw category string into a breakdown key.
///
/// Trims and lowercases so casing variants share one bucket. Unrecognized
/// categories stay valid keys of their own.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check a transaction list before analysis.
///
/// Rejects negative and non-finite amounts and blank categories. Empty
/// descriptions are allowed. The error names the first offending entry;
/// nothing downstream runs on a list that fails here.
pub fn validate_transactions(transactions: &[Transaction]) -> Result<()> {
    for (index, tx) in transactions.iter().enumerate() {
        if !tx.amount.is_finite() {
            return Err(Error::InvalidTransaction {
                index,
                reason: format!("amount is not a finite number: {}", tx.amount),
            });
        }
        if tx.amount < 0.0 {
            return Err(Error::InvalidTransaction {
                index,
                reason: format!("amount must be non-negative, got {}", tx.amount),
            });
        }
        if tx.category.trim().is_empty() {
            return Err(Error::InvalidTransaction {
                index,
                reason: "category is missing".to_string(),
            });
        }
    }
    Ok(())
}

/// Fixed demo dataset for external testing and demos.
///
/// Performs no analysis; callers feed the result to the pipeline themselves.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("Supermarket run", 85.0, "groceries"),
        Transaction::new("Dinner with friends", 65.0, "dining"),
        Transaction::new("Movie night", 40.0, "entertainment"),
        Transaction::new("Monthly transit pass", 55.0, "transportation"),
        Transaction::new("New running shoes", 120.0, "shopping"),
    ]
}
