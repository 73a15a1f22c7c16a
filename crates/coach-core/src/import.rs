//! Transaction file readers (JSON and CSV)

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, DEFAULT_CATEGORY};

/// Supported transaction file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl std::str::FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown file format: {}", s)),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction as it may appear in a file, with every field optional
#[derive(Debug, Deserialize)]
struct RawTransaction {
    description: Option<String>,
    amount: Option<f64>,
    category: Option<String>,
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        Transaction {
            description: raw.description.unwrap_or_default(),
            amount: raw.amount.unwrap_or(0.0),
            category: raw
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

/// Either a bare list or the `{"transactions": [...]}` request shape
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    List(Vec<RawTransaction>),
    Wrapped { transactions: Vec<RawTransaction> },
}

/// Read transactions from a file, using `format` or else the file extension
pub fn read_transactions(path: &Path, format: Option<FileFormat>) -> Result<Vec<Transaction>> {
    let format = format
        .or_else(|| FileFormat::from_path(path))
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

    let file = File::open(path)?;
    let transactions = match format {
        FileFormat::Json => parse_json(file)?,
        FileFormat::Csv => parse_csv(file)?,
    };

    debug!(
        path = %path.display(),
        format = %format,
        count = transactions.len(),
        "Read transactions"
    );
    Ok(transactions)
}

/// Parse a JSON transaction document
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let doc: JsonDocument = serde_json::from_reader(reader)?;
    let raw = match doc {
        JsonDocument::List(list) => list,
        JsonDocument::Wrapped { transactions } => transactions,
    };
    Ok(raw.into_iter().map(Transaction::from).collect())
}

/// Column positions resolved from the header row
struct Columns {
    description: Option<usize>,
    amount: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        Self {
            description: find("description"),
            amount: find("amount"),
            category: find("category"),
        }
    }
}

/// Get a non-empty cell
fn cell(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i)).filter(|s| !s.is_empty())
}

/// Parse CSV with `description`, `amount`, `category` columns
///
/// Header matching is case-insensitive and column order is free. Empty
/// amounts read as zero, empty categories as "other".
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?);
    if columns.amount.is_none() {
        return Err(Error::Import("CSV is missing an 'amount' column".to_string()));
    }

    let mut transactions = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        // Row 1 is the header
        let row = idx + 2;

        let amount = match cell(&record, columns.amount) {
            Some(raw) => parse_amount(raw)
                .ok_or_else(|| Error::Import(format!("Invalid amount on row {}: {}", row, raw)))?,
            None => 0.0,
        };

        transactions.push(Transaction {
            description: cell(&record, columns.description)
                .unwrap_or_default()
                .to_string(),
            amount,
            category: cell(&record, columns.category)
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
        });
    }

    Ok(transactions)
}

/// Parse an amount, tolerating a leading currency sign and thousands separators
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '$').collect();
    cleaned.trim().parse::<f64>().ok()
}
