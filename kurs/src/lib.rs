//! Kurs turns a raw daily price series into a filtered, optionally
//! bucketed, sorted and reformatted view.
//!
//! Overview
//! - Accepts any enumerable sequence of raw `(date, price)` string records.
//! - Runs a fixed four-stage pipeline: filter -> group -> sort -> format.
//! - Validates configuration at build time and input records at run time;
//!   all failures are terminal for the invocation.
//! - Computes bucket averages in exact decimal arithmetic (`rust_decimal`),
//!   rounded half-up to 2 places, with Monday-start weeks.
//!
//! Key behaviors and trade-offs
//! - Date bounds are inclusive and independently optional; an inverted
//!   range yields an empty result rather than an error.
//! - Grouping replaces each calendar bucket with its arithmetic mean; the
//!   bucket key is the first day of the enclosing week, month or quarter.
//! - Malformed records abort the run instead of being skipped: a silently
//!   dropped observation would corrupt averages without signal.
//! - Sorting is explicit and authoritative; input order is never trusted.
//!
//! Example
//! ```rust
//! use kurs::{Kurs, Granularity, RawRecord};
//!
//! # fn main() -> Result<(), kurs::KursError> {
//! let records = vec![
//!     RawRecord::new("2018-10-01", "3321.71"),
//!     RawRecord::new("2018-09-30", "3320.7"),
//!     RawRecord::new("2018-10-02", "3322.72"),
//! ];
//!
//! let kurs = Kurs::builder()
//!     .granularity(Granularity::Weekly)
//!     .date_from("2018-09-24")
//!     .build()?;
//!
//! let out = kurs.run(records)?;
//! assert_eq!(out[0].0, "2018-10-01");
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Kurs, KursBuilder};

// Re-export core types for convenience
pub use kurs_core::{
    DateInput,
    Granularity,
    KursConfig,
    KursError,
    OrderDirection,
    PriceRecord,
    RawRecord,
};
