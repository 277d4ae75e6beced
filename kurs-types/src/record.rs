//! The raw observation record as supplied by the upstream feed.

use serde::{Deserialize, Serialize};

/// One raw price observation, before validation.
///
/// Both fields are optional at this layer so that a feed record missing a
/// key still deserializes; the pipeline diagnoses the gap as a malformed
/// record instead of serde rejecting the whole payload. The price field
/// also accepts the upstream feed's `price(USD)` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Observation date as an ISO-8601 (`YYYY-MM-DD`) string.
    #[serde(default)]
    pub date: Option<String>,
    /// Observed price as a decimal string, e.g. `"3321.71"`.
    #[serde(default, alias = "price(USD)")]
    pub price: Option<String>,
}

impl RawRecord {
    /// Convenience constructor for a fully-populated record.
    #[must_use]
    pub fn new(date: &str, price: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            price: Some(price.to_string()),
        }
    }
}
