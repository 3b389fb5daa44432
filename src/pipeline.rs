//! The reshaping pipeline: filter, normalize, group.
//!
//! [`Pipeline::run`] is a pure function of its input rows. Running it twice on
//! the same rows yields identical tables.

use crate::date::normalize_date;
use crate::error::{Error, Result};
use crate::filter::filter_rows;
use crate::grouper::{aggregate_group, group_rows, merge_leading};
use crate::numeric::normalize_amount;
use crate::types::{NormalizedRow, RawRow, TransactionRecord, TransactionTable};
use log::{debug, trace};
use std::str::FromStr;

/// What to do with the rows that precede the first positive balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadingGroup {
    /// Emit them as their own record, with whatever amounts the first row has.
    #[default]
    Keep,
    /// Leave them out of the output.
    Drop,
    /// Prepend their details to the first real transaction.
    Merge,
}

impl FromStr for LeadingGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(LeadingGroup::Keep),
            "drop" => Ok(LeadingGroup::Drop),
            "merge" => Ok(LeadingGroup::Merge),
            _ => Err(Error::InvalidFormat(format!("unknown leading group policy: {}", s))),
        }
    }
}

/// Pipeline settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub leading_group: LeadingGroup,
}

/// Normalize the date and the three amount cells of a row.
pub fn normalize_row(row: &RawRow) -> NormalizedRow {
    NormalizedRow {
        date: normalize_date(&row.date_text),
        detail: row.detail_text.clone(),
        debit: normalize_amount(&row.debit_text),
        credit: normalize_amount(&row.credit_text),
        balance: normalize_amount(&row.balance_text),
    }
}

/// Runs filter, normalization and grouping over a loaded table.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Reshape raw rows into one record per transaction.
    pub fn run(&self, rows: &[RawRow]) -> TransactionTable {
        let filtered = filter_rows(rows);
        debug!("dropped {} blank rows of {}", rows.len() - filtered.len(), rows.len());

        let normalized: Vec<NormalizedRow> = filtered.iter().copied().map(normalize_row).collect();
        let undated = filtered
            .iter()
            .zip(&normalized)
            .filter(|(raw, row)| row.date.is_none() && !raw.date_text.trim().is_empty())
            .count();
        if undated > 0 {
            debug!("{} non-blank dates could not be parsed", undated);
        }

        let groups = group_rows(normalized);
        debug!("formed {} groups", groups.len());

        let mut records = Vec::with_capacity(groups.len());
        let mut leading: Option<TransactionRecord> = None;
        for group in &groups {
            trace!("group {}: {} rows", group.id(), group.rows().len());
            let record = aggregate_group(group);
            if group.is_leading() {
                match self.options.leading_group {
                    LeadingGroup::Keep => records.push(record),
                    LeadingGroup::Drop => {
                        debug!("dropping leading group of {} rows", group.rows().len())
                    }
                    LeadingGroup::Merge => leading = Some(record),
                }
            } else if let Some(lead) = leading.take() {
                records.push(merge_leading(lead, Some(record)));
            } else {
                records.push(record);
            }
        }
        if let Some(lead) = leading {
            records.push(merge_leading(lead, None));
        }

        TransactionTable::new(records)
    }
}

/// Reshape with default options.
pub fn reshape(rows: &[RawRow]) -> TransactionTable {
    Pipeline::default().run(rows)
}
