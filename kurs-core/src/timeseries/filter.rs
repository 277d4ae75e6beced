//! Filter stage: raw-record validation plus inclusive date-range selection.

use chrono::NaiveDate;
use kurs_types::RawRecord;

use crate::KursError;
use crate::types::PriceRecord;

/// Validate raw records and retain those inside the optional date range.
///
/// Each bound is inclusive and independently optional; with neither bound
/// set every record passes. An inverted range (`date_from > date_to`)
/// yields an empty result, not an error.
///
/// # Errors
/// Returns [`KursError::MalformedRecord`] for the first record that is
/// missing a field or fails to parse. Malformed records are never skipped:
/// a silently dropped observation would corrupt downstream averages.
pub fn filter_date_range<I>(
    records: I,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> Result<Vec<PriceRecord>, KursError>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut out = Vec::new();
    for (index, raw) in records.into_iter().enumerate() {
        let record = PriceRecord::from_raw(index, &raw)?;
        if in_range(record.date, date_from, date_to) {
            out.push(record);
        }
    }
    Ok(out)
}

fn in_range(d: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    match (from, to) {
        (Some(lo), Some(hi)) => lo <= d && d <= hi,
        (Some(lo), None) => d >= lo,
        (None, Some(hi)) => d <= hi,
        (None, None) => true,
    }
}
