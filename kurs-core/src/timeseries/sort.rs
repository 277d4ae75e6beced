//! Sort stage: total chronological ordering.

use kurs_types::OrderDirection;

use crate::types::PriceRecord;

/// Totally order records by date in the requested direction.
///
/// Uses the standard stable sort with a direction-aware comparator (rather
/// than sorting ascending and reversing), so records sharing a date keep
/// their relative input order in both directions. Input order is never
/// trusted: the stage sorts unconditionally.
#[must_use]
pub fn sort_by_date(mut records: Vec<PriceRecord>, direction: OrderDirection) -> Vec<PriceRecord> {
    match direction {
        OrderDirection::Asc => records.sort_by(|a, b| a.date.cmp(&b.date)),
        OrderDirection::Desc => records.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    records
}
