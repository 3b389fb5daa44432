//! Statement Reshaper Library
//!
//! Turns a Romanian bank-statement CSV export into one row per transaction.
//!
//! The export writes amounts as `1.234,56`, dates as `15 martie 2023`, and
//! lets a transaction's description run over several rows where only the
//! first carries the balance, credit and debit figures.
//!
//! # Pipeline
//!
//! - **filter**: drop rows with no details and no amounts
//! - **numeric** / **date**: normalize amounts to `f64` and dates to
//!   `NaiveDate` (malformed cells become `0.0` or a missing date)
//! - **grouper**: collapse each run of rows opened by a positive balance into
//!   a single [`TransactionRecord`]
//!
//! # Examples
//!
//! ## Reshaping rows already in memory
//!
//! ```
//! use statement_reshaper::{reshape, RawRow};
//!
//! let rows = vec![
//!     RawRow::new("1 ianuarie 2023", "deposit", "", "100,00", "1.100,00"),
//!     RawRow::new("", "ref 12345", "", "", ""),
//! ];
//! let table = reshape(&rows);
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.records()[0].details, "deposit ; ref 12345");
//! assert_eq!(table.records()[0].balance, 1100.0);
//! ```
//!
//! ## Reading an export
//!
//! ```no_run
//! use std::fs::File;
//! use statement_reshaper::csv_format::CsvStatement;
//! use statement_reshaper::PipelineOptions;
//!
//! let mut file = File::open("data.csv")?;
//! let statement = CsvStatement::from_read(&mut file)?;
//! let table = statement.reshape(&PipelineOptions::default());
//! println!("{}", table.head(5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod numeric;
pub mod date;
pub mod filter;
pub mod grouper;
pub mod pipeline;
pub mod csv_format;

use std::str::FromStr;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pipeline::{reshape, LeadingGroup, Pipeline, PipelineOptions};
pub use types::{NormalizedRow, RawRow, TransactionGroup, TransactionRecord, TransactionTable};

/// Ways of presenting a reshaped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width preview table
    Table,
    /// CSV
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" | "preview" | "text" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    /// Get file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(OutputFormat::Table.extension(), "txt");
        assert_eq!(OutputFormat::Csv.extension(), "csv");
    }
}
