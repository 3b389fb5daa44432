//! Collapsing multi-row transactions into single records.
//!
//! The export prints a transaction's amounts on one row only, and lets the
//! description spill onto following rows that have no balance. A row with a
//! strictly positive balance therefore opens a new group; every row after it
//! belongs to that group until the next positive balance.
//!
//! Rows before the first positive balance form the leading group with id `0`.
//! It has no authoritative amounts of its own.

use crate::types::{NormalizedRow, TransactionGroup, TransactionRecord};

/// Separator placed between the detail texts of a group.
pub const DETAILS_SEPARATOR: &str = " ; ";

/// Running group id: the number of positive-balance rows seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounter {
    current: usize,
}

impl GroupCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a row with this balance starts a new group.
    pub fn opens_group(balance: f64) -> bool {
        balance > 0.0
    }

    /// Feed the next row's balance and return that row's group id.
    pub fn advance(&mut self, balance: f64) -> usize {
        if Self::opens_group(balance) {
            self.current += 1;
        }
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }
}

/// Group id for every row, in row order. Ids never decrease.
pub fn assign_group_ids(rows: &[NormalizedRow]) -> Vec<usize> {
    let mut counter = GroupCounter::new();
    rows.iter().map(|row| counter.advance(row.balance)).collect()
}

/// Split rows into ordered groups of consecutive rows sharing an id.
pub fn group_rows(rows: Vec<NormalizedRow>) -> Vec<TransactionGroup> {
    let mut counter = GroupCounter::new();
    let mut groups: Vec<TransactionGroup> = Vec::new();

    for row in rows {
        let id = counter.advance(row.balance);
        match groups.last_mut() {
            Some(group) if group.id() == id => group.push(row),
            _ => groups.push(TransactionGroup::new(id, row)),
        }
    }

    groups
}

/// Collapse a group into one record.
///
/// Date and amounts come from the first row whatever they hold. Details of
/// every row are joined in order; a blank detail stays as an empty segment so
/// segment positions match row positions.
pub fn aggregate_group(group: &TransactionGroup) -> TransactionRecord {
    let first = group.first();
    let details = group
        .rows()
        .iter()
        .map(|row| {
            if row.detail.trim().is_empty() {
                ""
            } else {
                row.detail.as_str()
            }
        })
        .collect::<Vec<_>>()
        .join(DETAILS_SEPARATOR);

    TransactionRecord {
        date: first.date,
        balance: first.balance,
        credit: first.credit,
        debit: first.debit,
        details,
    }
}

/// Group normalized rows and collapse each group, preserving group order.
pub fn group_transactions(rows: Vec<NormalizedRow>) -> Vec<TransactionRecord> {
    group_rows(rows).iter().map(aggregate_group).collect()
}

/// Fold the leading group's record into the record that follows it.
///
/// The merged record keeps the follower's date and amounts; the leading
/// details are prepended. Without a follower the leading record is returned
/// as is.
pub fn merge_leading(
    leading: TransactionRecord,
    next: Option<TransactionRecord>,
) -> TransactionRecord {
    match next {
        Some(next) => TransactionRecord {
            details: [leading.details.as_str(), next.details.as_str()].join(DETAILS_SEPARATOR),
            ..next
        },
        None => leading,
    }
}
