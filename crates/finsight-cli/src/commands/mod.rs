//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Run the analysis pipeline and render the report
//! - `policy` - Show the effective policy constants
//! - `sample` - Print the built-in demo dataset

pub mod analyze;
pub mod policy;
pub mod sample;

// Re-export command functions for main.rs
pub use analyze::*;
pub use policy::*;
pub use sample::*;

use std::path::Path;

use anyhow::{Context, Result};

/// Resolve the effective policy: override file when given, built-ins otherwise.
pub fn load_policy(path: Option<&Path>) -> Result<finsight_core::Policy> {
    finsight_core::Policy::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load policy file {}", p.display()),
        None => "Failed to load built-in policy".to_string(),
    })
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
