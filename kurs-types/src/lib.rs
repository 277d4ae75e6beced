//! Kurs-specific configuration primitives and the raw-record data transfer object.
#![warn(missing_docs)]

mod config;
mod record;

pub use config::{
    DateInput, Granularity, KursConfig, OrderDirection, ParseGranularityError,
    ParseOrderDirectionError,
};
pub use record::RawRecord;
