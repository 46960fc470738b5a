//! Analyze command implementation

use std::path::Path;

use anyhow::{bail, Context, Result};
use finsight_core::{
    load_transactions, sample_transactions, AnalysisPipeline, AnalysisReport, Policy, SAVINGS_KEY,
    TOTAL_WEEKLY_KEY,
};

use super::truncate;

pub fn cmd_analyze(policy: Policy, file: Option<&Path>, sample: bool, json: bool) -> Result<()> {
    let transactions = if sample {
        sample_transactions()
    } else if let Some(path) = file {
        load_transactions(path)
            .with_context(|| format!("Failed to load transactions from {}", path.display()))?
    } else {
        bail!("Provide a transaction file with --file or use --sample");
    };

    let transaction_count = transactions.len();
    tracing::debug!(count = transaction_count, "loaded transactions");

    let report = AnalysisPipeline::with_policy(policy).analyze(transactions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, transaction_count);
    Ok(())
}

fn print_report(report: &AnalysisReport, transaction_count: usize) {
    let today = chrono::Local::now().date_naive();

    println!();
    println!("📊 Spending Report");
    println!(
        "   Generated: {}   Transactions: {}",
        today, transaction_count
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total spent: ${:.2}", report.total_spent);
    match &report.highest_spending_category {
        Some(category) => println!("   Top category: {}", category),
        None => println!("   Top category: (no spending)"),
    }

    println!();
    println!("   {:20} │ {:>10} │ {:>6}", "Category", "Amount", "%");
    println!("   ─────────────────────┼────────────┼────────");
    for (category, amount) in &report.category_breakdown {
        let percent = if report.total_spent > 0.0 {
            amount / report.total_spent * 100.0
        } else {
            0.0
        };
        println!(
            "   {:20} │ {:>10.2} │ {:>5.1}%",
            truncate(category, 20),
            amount,
            percent
        );
    }

    println!();
    if report.alerts.is_empty() {
        println!("✅ No alerts. Your spending looks good!");
    } else {
        println!("⚠️  Alerts");
        println!("   ─────────────────────────────────────────────────────────────");
        for alert in &report.alerts {
            println!("   • {}", alert);
        }
    }

    println!();
    println!("💡 Recommendations");
    println!("   ─────────────────────────────────────────────────────────────");
    for recommendation in &report.savings_recommendations {
        println!("   • {}", recommendation);
    }

    println!();
    println!("📅 Suggested weekly budget");
    println!("   ─────────────────────────────────────────────────────────────");
    for (key, amount) in &report.weekly_budget {
        if key.as_str() == SAVINGS_KEY || key.as_str() == TOTAL_WEEKLY_KEY {
            continue;
        }
        println!("   {:20} │ {:>10.2}", truncate(key, 20), amount);
    }
    if let Some(savings) = report.weekly_budget.get(SAVINGS_KEY) {
        println!("   {:20} │ {:>10.2}", "savings", savings);
    }
    if let Some(total) = report.weekly_budget.get(TOTAL_WEEKLY_KEY) {
        println!("   ─────────────────────┼────────────");
        println!("   {:20} │ {:>10.2}", "total weekly", total);
    }
    println!();
}
