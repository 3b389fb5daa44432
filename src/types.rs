//! Row and record types that flow through the pipeline.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One physical row of the statement export, as loaded.
///
/// All cells are kept as text. A cell is blank when it is empty or holds only
/// whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Transaction date, e.g. `15 martie 2023`.
    pub date_text: String,

    /// Free-form transaction description.
    pub detail_text: String,

    /// Debit amount in locale format, e.g. `1.234,56`.
    pub debit_text: String,

    /// Credit amount in locale format.
    pub credit_text: String,

    /// Running balance in locale format.
    pub balance_text: String,
}

impl RawRow {
    /// Build a row from its five cells in column order.
    pub fn new(date: &str, detail: &str, debit: &str, credit: &str, balance: &str) -> Self {
        Self {
            date_text: date.to_string(),
            detail_text: detail.to_string(),
            debit_text: debit.to_string(),
            credit_text: credit.to_string(),
            balance_text: balance.to_string(),
        }
    }
}

/// A row after date and amount normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    /// Parsed date, `None` when the cell could not be parsed.
    pub date: Option<NaiveDate>,

    /// Description text, untouched.
    pub detail: String,

    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

/// A run of consecutive rows sharing one group id. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionGroup {
    id: usize,
    rows: Vec<NormalizedRow>,
}

impl TransactionGroup {
    /// Start a group with its first row.
    pub fn new(id: usize, first: NormalizedRow) -> Self {
        Self {
            id,
            rows: vec![first],
        }
    }

    /// Append a continuation row.
    pub fn push(&mut self, row: NormalizedRow) {
        self.rows.push(row);
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The row that carries the group's date and amounts.
    pub fn first(&self) -> &NormalizedRow {
        &self.rows[0]
    }

    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    /// Whether this is the group of rows preceding the first positive balance.
    pub fn is_leading(&self) -> bool {
        self.id == 0
    }
}

/// One output transaction, collapsed from a [`TransactionGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Index key. Missing when the group's first row had no parseable date.
    pub date: Option<NaiveDate>,
    pub balance: f64,
    pub credit: f64,
    pub debit: f64,

    /// Every detail text in the group, joined with `" ; "`.
    pub details: String,
}

/// The reshaped statement: records in input order, keyed by date.
///
/// Keys are not unique. Records sharing a date keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionTable {
    records: Vec<TransactionRecord>,
}

impl TransactionTable {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }

    /// The date index, one entry per record in row order.
    pub fn index(&self) -> impl Iterator<Item = Option<NaiveDate>> + '_ {
        self.records.iter().map(|r| r.date)
    }

    /// All records stored under `date`, in row order.
    pub fn by_date(
        &self,
        date: Option<NaiveDate>,
    ) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// A table holding only the first `n` records.
    pub fn head(&self, n: usize) -> TransactionTable {
        TransactionTable {
            records: self.records.iter().take(n).cloned().collect(),
        }
    }
}

impl fmt::Display for TransactionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}  {:>12}  {:>12}  {:>12}  Detalii tranzactie",
            "Data", "Balanta", "Credit", "Debit"
        )?;
        for record in &self.records {
            let date = match record.date {
                Some(d) => d.format("%Y-%m-%d").to_string(),
                None => "NaT".to_string(),
            };
            writeln!(
                f,
                "{:<10}  {:>12.2}  {:>12.2}  {:>12.2}  {}",
                date, record.balance, record.credit, record.debit, record.details
            )?;
        }
        Ok(())
    }
}
