//! CSV loader and writer for statement exports.
//!
//! The export starts with a metadata line, followed by a header row and the
//! data rows. Only five columns are read; any others are ignored.

use crate::error::{Error, Result};
use crate::filter::is_blank_row;
use crate::pipeline::{Pipeline, PipelineOptions};
use crate::types::{RawRow, TransactionTable};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::debug;
use std::io::{BufRead, BufReader, Read, Write};

/// Required column names, in [`RawRow`] field order.
pub const COLUMNS: [&str; 5] = ["Data", "Detalii tranzactie", "Debit", "Credit", "Balanta"];

/// Output column names, in `TransactionRecord` field order.
pub const OUTPUT_COLUMNS: [&str; 5] = ["date", "balance", "credit", "debit", "details"];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    date: usize,
    detail: usize,
    debit: usize,
    credit: usize,
    balance: usize,
}

impl ColumnLayout {
    /// Locate every required column, failing with all missing names at once.
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let found: Vec<Option<usize>> = COLUMNS.iter().map(|name| position(*name)).collect();

        let missing: Vec<String> = COLUMNS
            .iter()
            .zip(&found)
            .filter(|(_, index)| index.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        match found.as_slice() {
            [Some(date), Some(detail), Some(debit), Some(credit), Some(balance)] => Ok(Self {
                date: *date,
                detail: *detail,
                debit: *debit,
                credit: *credit,
                balance: *balance,
            }),
            _ => Err(Error::MissingColumns { missing }),
        }
    }

    /// Pull the five cells out of a record. Absent trailing cells are blank.
    pub fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |index: usize| record.get(index).unwrap_or("");
        RawRow::new(
            cell(self.date),
            cell(self.detail),
            cell(self.debit),
            cell(self.credit),
            cell(self.balance),
        )
    }
}

/// A loaded statement export with blank rows already removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvStatement {
    rows: Vec<RawRow>,
}

impl CsvStatement {
    /// Parse a statement export from any source implementing `Read`.
    ///
    /// The first line is skipped as metadata. The next line must be a header
    /// containing every name in [`COLUMNS`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use statement_reshaper::csv_format::CsvStatement;
    ///
    /// let mut file = File::open("statement.csv")?;
    /// let statement = CsvStatement::from_read(&mut file)?;
    /// println!("{}", statement.reshape(&Default::default()).head(5));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);
        let mut metadata = String::new();
        buf_reader.read_line(&mut metadata)?;

        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(buf_reader);

        let layout = ColumnLayout::resolve(csv_reader.headers()?)?;

        let mut loaded = 0;
        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let row = layout.row(&result?);
            loaded += 1;
            if !is_blank_row(&row) {
                rows.push(row);
            }
        }
        debug!("loaded {} rows, {} with content", loaded, rows.len());

        Ok(CsvStatement { rows })
    }

    /// Build from rows that were loaded elsewhere. Blank rows are removed.
    pub fn from_rows(mut rows: Vec<RawRow>) -> Self {
        rows.retain(|row| !is_blank_row(row));
        CsvStatement { rows }
    }

    /// The loaded rows, before normalization.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Run the pipeline over the loaded rows.
    pub fn reshape(&self, options: &PipelineOptions) -> TransactionTable {
        Pipeline::new(*options).run(&self.rows)
    }
}

impl TransactionTable {
    /// Write the table as CSV with columns `date,balance,credit,debit,details`.
    ///
    /// The header is always written, even for an empty table. A missing date
    /// is written as an empty cell.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(OUTPUT_COLUMNS)?;

        for record in self.records() {
            csv_writer.serialize(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
