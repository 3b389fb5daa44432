//! Date normalization for `<day> <month-name> <year>` cells.
//!
//! Parsing happens in two stages. [`reformat_date`] rewrites a Romanian
//! spelled-out date such as `15 martie 2023` into `15-03-2023` and leaves
//! anything else untouched. [`parse_dayfirst`] then strictly parses whatever
//! reaches it. [`normalize_date`] runs both and maps failure to `None`.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::borrow::Cow;

const MONTHS: [(&str, &str); 12] = [
    ("ianuarie", "01"),
    ("februarie", "02"),
    ("martie", "03"),
    ("aprilie", "04"),
    ("mai", "05"),
    ("iunie", "06"),
    ("iulie", "07"),
    ("august", "08"),
    ("septembrie", "09"),
    ("octombrie", "10"),
    ("noiembrie", "11"),
    ("decembrie", "12"),
];

/// A numeric date layout accepted by the strict parser.
struct DateFormat {
    separator: char,
    year_first: bool,
    /// Format for a four-digit year.
    long: &'static str,
    /// Format for a two-digit year, if that layout allows one.
    short: Option<&'static str>,
}

/// Day-first layouts, plus ISO.
const DATE_FORMATS: [DateFormat; 4] = [
    DateFormat { separator: '-', year_first: false, long: "%d-%m-%Y", short: Some("%d-%m-%y") },
    DateFormat { separator: '.', year_first: false, long: "%d.%m.%Y", short: Some("%d.%m.%y") },
    DateFormat { separator: '/', year_first: false, long: "%d/%m/%Y", short: Some("%d/%m/%y") },
    DateFormat { separator: '-', year_first: true, long: "%Y-%m-%d", short: None },
];

impl DateFormat {
    /// Pick the chrono format matching the width of the year token.
    ///
    /// chrono's `%Y` also takes one to three digits, so the width is checked
    /// here: four digits use `long`, two use `short`, anything else fails.
    fn format_for(&self, s: &str) -> Option<&'static str> {
        let parts: Vec<&str> = s.split(self.separator).collect();
        if parts.len() != 3 {
            return None;
        }
        let year = if self.year_first { parts[0] } else { parts[2] };
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match year.len() {
            4 => Some(self.long),
            2 => self.short,
            _ => None,
        }
    }
}

/// Two-digit month number for a lowercase Romanian month name.
pub fn month_number(name: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// Rewrite `<day> <month-name> <year>` as `<day>-<MM>-<year>`.
///
/// The input is split on single spaces. Anything that is not exactly three
/// tokens, or whose middle token is not a known month, is returned unchanged.
pub fn reformat_date(s: &str) -> Cow<'_, str> {
    let tokens: Vec<&str> = s.split(' ').collect();
    if let [day, month, year] = tokens.as_slice() {
        if let Some(number) = month_number(month) {
            return Cow::Owned([*day, number, *year].join("-"));
        }
    }
    Cow::Borrowed(s)
}

/// Strictly parse a day-first date string.
pub fn parse_dayfirst(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    DATE_FORMATS
        .iter()
        .filter_map(|layout| layout.format_for(trimmed))
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| Error::InvalidDate(s.to_string()))
}

/// Reformat then strictly parse. Unparseable input yields `None`.
pub fn normalize_date(s: &str) -> Option<NaiveDate> {
    parse_dayfirst(&reformat_date(s)).ok()
}
