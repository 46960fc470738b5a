//! Sample dataset command implementation

use anyhow::Result;
use finsight_core::sample_transactions;

use super::truncate;

pub fn cmd_sample(json: bool) -> Result<()> {
    let transactions = sample_transactions();

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    println!();
    println!("🧾 Demo transactions");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:25} │ {:>10} │ {:15}", "Description", "Amount", "Category");
    println!("   ──────────────────────────┼────────────┼────────────────");
    for tx in &transactions {
        println!(
            "   {:25} │ {:>10.2} │ {:15}",
            truncate(&tx.description, 25),
            tx.amount,
            tx.category
        );
    }
    println!();

    Ok(())
}
