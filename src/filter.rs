//! Dropping rows that carry no transaction content.

use crate::types::RawRow;

fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// True when details, debit, credit and balance are all blank.
///
/// The date cell is not considered.
pub fn is_blank_row(row: &RawRow) -> bool {
    [
        &row.detail_text,
        &row.debit_text,
        &row.credit_text,
        &row.balance_text,
    ]
    .iter()
    .all(|cell| is_blank(cell))
}

/// Keep only rows with some content, preserving order. Rows are borrowed.
pub fn filter_rows(rows: &[RawRow]) -> Vec<&RawRow> {
    rows.iter().filter(|row| !is_blank_row(row)).collect()
}
