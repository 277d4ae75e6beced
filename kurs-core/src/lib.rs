//! kurs-core
//!
//! Core types and pure transformation stages shared across the kurs
//! workspace.
//!
//! - `types`: the validated in-memory record ([`PriceRecord`]).
//! - `error`: the unified [`KursError`] taxonomy.
//! - `timeseries`: the four pipeline stages (filter, group, sort, format).
//!
//! Every stage is a pure function over an owned sequence: it consumes its
//! input, returns a fresh `Vec`, and never mutates state owned by an
//! earlier stage. The whole crate is synchronous and single-threaded.
#![warn(missing_docs)]

/// The unified error type for pipeline construction and execution.
pub mod error;
/// Filter, group, sort and format stages over price records.
pub mod timeseries;
pub mod types;

pub use error::KursError;
pub use timeseries::filter::filter_date_range;
pub use timeseries::format::format_pairs;
pub use timeseries::group::group_by_granularity;
pub use timeseries::sort::sort_by_date;
pub use types::*;

// Re-export the shared configuration primitives for convenience.
pub use kurs_types::{
    DateInput, Granularity, KursConfig, OrderDirection, ParseGranularityError,
    ParseOrderDirectionError, RawRecord,
};
