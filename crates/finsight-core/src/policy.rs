//! Policy constants for the analysis pipeline
//!
//! All thresholds, weekly baselines, and the savings reallocation step live
//! in one place so tests and deployments can override them without touching
//! rule logic.
//!
//! ## Configuration Resolution
//!
//! Policy is loaded with a two-layer resolution:
//! 1. An explicit override file, when one is provided
//! 2. Embedded defaults otherwise (compiled into the binary)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Category;

/// Embedded default policy (compiled into binary)
const DEFAULT_POLICY: &str = include_str!("../../../config/policy.toml");

/// Thresholds and baselines driving the advisor and planner stages
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Monthly total above which the overall spending alert fires
    pub monthly_spending_limit: f64,
    /// Per-category monthly limits
    pub category_limits: BTreeMap<Category, f64>,
    /// Baseline weekly allocation per category
    pub weekly_baseline: BTreeMap<Category, f64>,
    /// Baseline weekly savings line
    pub weekly_savings: f64,
    /// Amount moved from an alerted category's weekly allocation into savings
    pub reallocation_step: f64,
}

impl Default for Policy {
    fn default() -> Self {
        let category_limits = BTreeMap::from([
            (Category::Groceries, 400.0),
            (Category::Dining, 150.0),
            (Category::Entertainment, 100.0),
            (Category::Transportation, 200.0),
            (Category::Shopping, 300.0),
            (Category::Other, 200.0),
        ]);
        let weekly_baseline = BTreeMap::from([
            (Category::Groceries, 150.0),
            (Category::Dining, 75.0),
            (Category::Entertainment, 50.0),
            (Category::Transportation, 100.0),
            (Category::Shopping, 75.0),
            (Category::Other, 50.0),
        ]);
        Self {
            monthly_spending_limit: 1000.0,
            category_limits,
            weekly_baseline,
            weekly_savings: 200.0,
            reallocation_step: 15.0,
        }
    }
}

impl Policy {
    /// Monthly limit for a category. Categories without an entry never alert.
    pub fn category_limit(&self, category: Category) -> f64 {
        self.category_limits
            .get(&category)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Baseline weekly allocation for a category.
    pub fn weekly_allocation(&self, category: Category) -> f64 {
        self.weekly_baseline.get(&category).copied().unwrap_or(0.0)
    }

    /// Load policy: override file if given, embedded defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => parse_policy(DEFAULT_POLICY),
        }
    }

    /// Load policy from a TOML file. Keys not present keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_policy(&content)
    }
}

#[derive(Debug, Deserialize)]
struct RawPolicy {
    limits: Option<RawLimits>,
    weekly: Option<RawWeekly>,
}

#[derive(Debug, Deserialize)]
struct RawLimits {
    monthly_total: Option<f64>,
    groceries: Option<f64>,
    dining: Option<f64>,
    entertainment: Option<f64>,
    transportation: Option<f64>,
    shopping: Option<f64>,
    other: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawWeekly {
    groceries: Option<f64>,
    dining: Option<f64>,
    entertainment: Option<f64>,
    transportation: Option<f64>,
    shopping: Option<f64>,
    other: Option<f64>,
    savings: Option<f64>,
    reallocation: Option<f64>,
}

fn apply(map: &mut BTreeMap<Category, f64>, category: Category, value: Option<f64>) {
    if let Some(value) = value {
        map.insert(category, value);
    }
}

fn parse_policy(content: &str) -> Result<Policy> {
    let raw: RawPolicy = toml::from_str(content)
        .map_err(|e| Error::InvalidData(format!("Invalid policy TOML: {}", e)))?;

    let mut policy = Policy::default();

    if let Some(limits) = raw.limits {
        if let Some(total) = limits.monthly_total {
            policy.monthly_spending_limit = total;
        }
        apply(
            &mut policy.category_limits,
            Category::Groceries,
            limits.groceries,
        );
        apply(&mut policy.category_limits, Category::Dining, limits.dining);
        apply(
            &mut policy.category_limits,
            Category::Entertainment,
            limits.entertainment,
        );
        apply(
            &mut policy.category_limits,
            Category::Transportation,
            limits.transportation,
        );
        apply(
            &mut policy.category_limits,
            Category::Shopping,
            limits.shopping,
        );
        apply(&mut policy.category_limits, Category::Other, limits.other);
    }

    if let Some(weekly) = raw.weekly {
        apply(
            &mut policy.weekly_baseline,
            Category::Groceries,
            weekly.groceries,
        );
        apply(&mut policy.weekly_baseline, Category::Dining, weekly.dining);
        apply(
            &mut policy.weekly_baseline,
            Category::Entertainment,
            weekly.entertainment,
        );
        apply(
            &mut policy.weekly_baseline,
            Category::Transportation,
            weekly.transportation,
        );
        apply(
            &mut policy.weekly_baseline,
            Category::Shopping,
            weekly.shopping,
        );
        apply(&mut policy.weekly_baseline, Category::Other, weekly.other);
        if let Some(savings) = weekly.savings {
            policy.weekly_savings = savings;
        }
        if let Some(step) = weekly.reallocation {
            policy.reallocation_step = step;
        }
    }

    Ok(policy)
}
