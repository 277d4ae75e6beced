//! Validated in-memory record types used by the pipeline stages.

use chrono::NaiveDate;
use kurs_types::RawRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::KursError;

/// One validated daily price observation.
///
/// The price is an exact decimal, parsed with `rust_decimal`'s string
/// parser; it never passes through binary floating point, so bucket
/// averages carry no representation drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed price.
    pub price: Decimal,
}

impl PriceRecord {
    /// Construct a record from an already-validated date and price.
    #[must_use]
    pub const fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }

    /// Validate and parse a raw feed record.
    ///
    /// `index` is the record's zero-based position in the input sequence
    /// and is carried into the error for diagnostics.
    ///
    /// # Errors
    /// Returns [`KursError::MalformedRecord`] when the date or price field
    /// is absent, the date is not a valid ISO-8601 (`YYYY-MM-DD`) date, or
    /// the price is not a valid decimal number.
    pub fn from_raw(index: usize, raw: &RawRecord) -> Result<Self, KursError> {
        let date = raw
            .date
            .as_deref()
            .ok_or_else(|| KursError::malformed_record(index, "missing date field"))?;
        let date: NaiveDate = date.parse().map_err(|e| {
            KursError::malformed_record(index, format!("unparseable date {date:?}: {e}"))
        })?;

        let price = raw
            .price
            .as_deref()
            .ok_or_else(|| KursError::malformed_record(index, "missing price field"))?;
        let price: Decimal = price.parse().map_err(|e| {
            KursError::malformed_record(index, format!("unparseable price {price:?}: {e}"))
        })?;

        Ok(Self { date, price })
    }
}
