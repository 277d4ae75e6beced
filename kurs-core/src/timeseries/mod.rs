//! The four pipeline stages, in their fixed execution order.
//!
//! Modules include:
//! - `filter`: validate raw records and apply the inclusive date range
//! - `group`: bucket records by calendar period and average each bucket
//! - `sort`: totally order records by date
//! - `format`: project records to `(date, price)` string pairs

/// Date-range filtering (and raw-record validation).
pub mod filter;
/// Output projection to string pairs.
pub mod format;
/// Calendar bucketing and decimal averaging.
pub mod group;
/// Chronological ordering.
pub mod sort;
