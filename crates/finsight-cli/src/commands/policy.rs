//! Policy command implementation

use anyhow::Result;
use finsight_core::{Category, Policy};

pub fn cmd_policy(policy: &Policy) -> Result<()> {
    println!();
    println!("⚙️  Effective policy");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Monthly spending limit: ${:.2}",
        policy.monthly_spending_limit
    );
    println!(
        "   Savings reallocation per alert: ${:.2}/week",
        policy.reallocation_step
    );

    println!();
    println!(
        "   {:16} │ {:>13} │ {:>13}",
        "Category", "Monthly limit", "Weekly budget"
    );
    println!("   ─────────────────┼───────────────┼───────────────");
    for category in Category::all() {
        println!(
            "   {:16} │ {:>13.2} │ {:>13.2}",
            category.as_str(),
            policy.category_limit(*category),
            policy.weekly_allocation(*category)
        );
    }
    println!(
        "   {:16} │ {:>13} │ {:>13.2}",
        "savings", "-", policy.weekly_savings
    );
    println!();

    Ok(())
}
