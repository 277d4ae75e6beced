//! Configuration types shared between the pipeline stages and the orchestrator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar bucket size used by the grouping stage.
///
/// `Daily` is the identity mapping: no bucketing, no averaging. The other
/// variants map each record date to the first day of the enclosing period
/// (weeks start on Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One record per observation; grouping is a no-op.
    #[default]
    Daily,
    /// One record per Monday-start calendar week.
    Weekly,
    /// One record per calendar month.
    Monthly,
    /// One record per calendar quarter (Jan/Apr/Jul/Oct).
    Quarterly,
}

/// Error returned when parsing a [`Granularity`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown granularity: {value:?} (expected daily, weekly, monthly or quarterly)")]
pub struct ParseGranularityError {
    /// The rejected input value.
    pub value: String,
}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            other => Err(ParseGranularityError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        };
        f.write_str(s)
    }
}

/// Direction of the final chronological sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Earlier dates first.
    Asc,
    /// Later dates first.
    #[default]
    Desc,
}

/// Error returned when parsing an [`OrderDirection`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order direction: {value:?} (expected asc or desc)")]
pub struct ParseOrderDirectionError {
    /// The rejected input value.
    pub value: String,
}

impl FromStr for OrderDirection {
    type Err = ParseOrderDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseOrderDirectionError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// A date bound supplied either pre-parsed or as an ISO-8601 string.
///
/// Builders accept `impl Into<DateInput>` so callers can pass a
/// [`NaiveDate`], a `&str`, or a `String` interchangeably. Text inputs are
/// resolved at pipeline construction; a malformed string is a configuration
/// error, never silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// An already-parsed calendar date.
    Parsed(NaiveDate),
    /// An ISO-8601 (`YYYY-MM-DD`) date string, parsed on resolution.
    Text(String),
}

impl DateInput {
    /// Resolve the input to a concrete calendar date.
    ///
    /// # Errors
    /// Returns the underlying `chrono` parse error when a `Text` input is
    /// not a valid ISO-8601 date.
    pub fn resolve(&self) -> Result<NaiveDate, chrono::ParseError> {
        match self {
            Self::Parsed(d) => Ok(*d),
            Self::Text(s) => s.parse(),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        Self::Parsed(d)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Resolved configuration for one pipeline run.
///
/// Constructed once per invocation (normally through `KursBuilder`) and
/// immutable for the duration of the run. Date bounds are inclusive and
/// independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KursConfig {
    /// Direction of the final sort.
    pub order_direction: OrderDirection,
    /// Inclusive lower date bound for the filter stage.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound for the filter stage.
    pub date_to: Option<NaiveDate>,
    /// Calendar bucket size for the grouping stage.
    pub granularity: Granularity,
}

impl Default for KursConfig {
    fn default() -> Self {
        Self {
            order_direction: OrderDirection::Desc,
            date_from: None,
            date_to: None,
            granularity: Granularity::Daily,
        }
    }
}
