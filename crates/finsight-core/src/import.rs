//! Transaction file loaders
//!
//! The pipeline itself never touches the filesystem; these loaders exist for
//! collaborators (the CLI) that read a transaction list from disk before
//! asking for an analysis.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Supported transaction file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Detect the input format from a file extension.
///
/// Returns None if the extension is not recognized.
pub fn detect_format(path: &Path) -> Option<InputFormat> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("csv") => Some(InputFormat::Csv),
        Some("json") => Some(InputFormat::Json),
        _ => None,
    }
}

/// Load transactions from a file, dispatching on the extension.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let format = detect_format(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    let file = File::open(path)?;
    match format {
        InputFormat::Csv => parse_csv(file),
        InputFormat::Json => parse_json(file),
    }
}

/// Parse a CSV transaction file.
///
/// Expects a header with `description`, `amount`, and `category` columns in
/// any order. Amounts tolerate currency symbols and thousands separators.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::Import(format!("Missing {} column", name)))
    };
    let description_col = column("description")?;
    let amount_col = column("amount")?;
    let category_col = column("category")?;

    let mut transactions = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let description = record.get(description_col).unwrap_or("").to_string();

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::Import("Missing amount".into()))?;
        let amount = parse_amount(amount_str)?;

        let category = record
            .get(category_col)
            .ok_or_else(|| Error::Import("Missing category".into()))?
            .to_string();

        transactions.push(Transaction {
            description,
            amount,
            category,
        });
    }

    debug!("Parsed {} transactions from CSV", transactions.len());
    Ok(transactions)
}

/// Parse a JSON array of transactions.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;
    debug!("Parsed {} transactions from JSON", transactions.len());
    Ok(transactions)
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_basic() {
        let data = "description,amount,category\n\
                    Supermarket run,85.00,groceries\n\
                    Dinner with friends,65,dining\n";
        let txs = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].description, "Supermarket run");
        assert_eq!(txs[0].amount, 85.0);
        assert_eq!(txs[1].category, "dining");
    }

    #[test]
    fn test_parse_csv_header_order_and_case() {
        let data = "Category,Amount,Description\n\
                    shopping,\"$1,120.50\",New laptop\n";
        let txs = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txs[0].amount, 1120.5);
        assert_eq!(txs[0].category, "shopping");
        assert_eq!(txs[0].description, "New laptop");
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let data = "description,amount\nlunch,12.00\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing category column"));
    }

    #[test]
    fn test_parse_csv_bad_amount() {
        let data = "description,amount,category\nlunch,abc,dining\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Unable to parse amount"));
    }

    #[test]
    fn test_parse_json_array() {
        let data = r#"[
            {"description": "Movie night", "amount": 40.0, "category": "entertainment"},
            {"description": "", "amount": 12.5, "category": "other"}
        ]"#;
        let txs = parse_json(data.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].amount, 40.0);
        assert_eq!(txs[1].description, "");
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("txs.CSV")),
            Some(InputFormat::Csv)
        );
        assert_eq!(
            detect_format(Path::new("txs.json")),
            Some(InputFormat::Json)
        );
        assert_eq!(detect_format(Path::new("txs.xlsx")), None);
    }

    #[test]
    fn test_load_transactions_unsupported_extension() {
        let err = load_transactions(Path::new("spending.xlsx")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
