//! Format stage: projection to `(date, price)` string pairs.

use crate::types::PriceRecord;

/// Project each record to an `(ISO-8601 date, decimal price)` string pair.
///
/// Never fails and never filters: output length and order match the input.
/// The price string is the record's exact decimal value; any rounding has
/// already happened in the grouping stage, and no scientific notation or
/// extra digits are introduced here.
#[must_use]
pub fn format_pairs(records: &[PriceRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.date.to_string(), r.price.to_string()))
        .collect()
}
