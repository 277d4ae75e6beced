use kurs_types::{ParseGranularityError, ParseOrderDirectionError};
use thiserror::Error;

/// Unified error type for the kurs workspace.
///
/// Two failure classes exist: configuration problems caught at pipeline
/// construction, and malformed input records caught by the filter stage.
/// Both are terminal for the current invocation; there is no partial-result
/// mode and no retry anywhere in the core.
#[derive(Debug, Error)]
pub enum KursError {
    /// Invalid pipeline configuration (unknown granularity or order
    /// direction, or a date bound that fails to parse as ISO-8601).
    /// Surfaced before any stage runs.
    #[error("invalid configuration: {msg}")]
    Configuration {
        /// Human-readable description of the rejected option.
        msg: String,
    },

    /// A raw input record is missing its date or price field, or carries a
    /// value unparseable as an ISO-8601 date or decimal number. Silently
    /// skipping such a record would corrupt bucket averages without signal,
    /// so the run aborts at the first occurrence.
    #[error("malformed record at index {index}: {msg}")]
    MalformedRecord {
        /// Zero-based position of the offending record in the input.
        index: usize,
        /// Human-readable description of the defect.
        msg: String,
    },
}

impl KursError {
    /// Helper: build a `Configuration` error from a message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration { msg: msg.into() }
    }

    /// Helper: build a `MalformedRecord` error for the record at `index`.
    pub fn malformed_record(index: usize, msg: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            msg: msg.into(),
        }
    }
}

impl From<ParseGranularityError> for KursError {
    fn from(e: ParseGranularityError) -> Self {
        Self::configuration(e.to_string())
    }
}

impl From<ParseOrderDirectionError> for KursError {
    fn from(e: ParseOrderDirectionError) -> Self {
        Self::configuration(e.to_string())
    }
}
