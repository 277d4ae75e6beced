use kurs_core::types::PriceRecord;
use kurs_core::{filter_date_range, format_pairs, group_by_granularity, sort_by_date};
use kurs_types::{DateInput, Granularity, KursConfig, OrderDirection, RawRecord};

use kurs_core::KursError;

/// Orchestrator that runs the four pipeline stages over a raw record feed.
///
/// Holds a resolved, immutable [`KursConfig`]; one `Kurs` value can run any
/// number of record sequences with the same configuration.
#[derive(Debug)]
pub struct Kurs {
    cfg: KursConfig,
}

/// Builder for constructing a [`Kurs`] pipeline with custom configuration.
pub struct KursBuilder {
    order_direction: OrderDirection,
    date_from: Option<DateInput>,
    date_to: Option<DateInput>,
    granularity: Granularity,
}

impl Default for KursBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KursBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Defaults to descending order, no date bounds, and daily
    ///   granularity, i.e. the pipeline only validates and re-sorts.
    /// - Date bounds accept either pre-parsed `chrono::NaiveDate` values or
    ///   ISO-8601 strings; strings are parsed at [`build`](Self::build).
    #[must_use]
    pub fn new() -> Self {
        Self {
            order_direction: OrderDirection::default(),
            date_from: None,
            date_to: None,
            granularity: Granularity::default(),
        }
    }

    /// Select the direction of the final chronological sort.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }

    /// Set the inclusive lower date bound for the filter stage.
    ///
    /// Behavior and trade-offs:
    /// - Accepts a `NaiveDate`, `&str` or `String`; text is parsed during
    ///   [`build`](Self::build) and a malformed string fails construction
    ///   instead of being silently ignored.
    /// - A bound above `date_to` is legal and yields an empty result.
    #[must_use]
    pub fn date_from(mut self, date: impl Into<DateInput>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Set the inclusive upper date bound for the filter stage.
    ///
    /// Accepts the same inputs as [`date_from`](Self::date_from).
    #[must_use]
    pub fn date_to(mut self, date: impl Into<DateInput>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Select the calendar bucket size for the grouping stage.
    ///
    /// Behavior and trade-offs:
    /// - `Daily` leaves records untouched; the other granularities replace
    ///   each bucket with its rounded arithmetic mean, so per-day detail is
    ///   discarded.
    /// - Weeks start on Monday.
    #[must_use]
    pub const fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Resolve the configuration and construct the pipeline.
    ///
    /// # Errors
    /// Returns [`KursError::Configuration`] when a date bound supplied as a
    /// string is not a valid ISO-8601 (`YYYY-MM-DD`) date.
    pub fn build(self) -> Result<Kurs, KursError> {
        let date_from = resolve_bound("date_from", self.date_from.as_ref())?;
        let date_to = resolve_bound("date_to", self.date_to.as_ref())?;
        Ok(Kurs {
            cfg: KursConfig {
                order_direction: self.order_direction,
                date_from,
                date_to,
                granularity: self.granularity,
            },
        })
    }
}

fn resolve_bound(
    name: &str,
    input: Option<&DateInput>,
) -> Result<Option<chrono::NaiveDate>, KursError> {
    input
        .map(|d| {
            d.resolve()
                .map_err(|e| KursError::configuration(format!("invalid {name}: {e}")))
        })
        .transpose()
}

impl Kurs {
    /// Start building a pipeline with custom configuration.
    #[must_use]
    pub fn builder() -> KursBuilder {
        KursBuilder::new()
    }

    /// Construct a pipeline from an already-resolved configuration.
    #[must_use]
    pub const fn new(cfg: KursConfig) -> Self {
        Self { cfg }
    }

    /// The resolved configuration this pipeline runs with.
    #[must_use]
    pub const fn config(&self) -> &KursConfig {
        &self.cfg
    }

    /// Run the pipeline over a raw record sequence.
    ///
    /// Stages execute in fixed order — filter, group, sort, format — each
    /// consuming the previous stage's output. The result is an ordered
    /// sequence of `(ISO-8601 date, decimal price)` string pairs, suitable
    /// for direct serialization to JSON arrays-of-pairs or CSV rows.
    ///
    /// # Errors
    /// Returns [`KursError::MalformedRecord`] for the first input record
    /// missing a field or failing to parse. The failure is terminal: no
    /// partial result is produced.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self, records),
            fields(
                granularity = %self.cfg.granularity,
                order = %self.cfg.order_direction,
            )
        )
    )]
    pub fn run<I>(&self, records: I) -> Result<Vec<(String, String)>, KursError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let filtered = filter_date_range(records, self.cfg.date_from, self.cfg.date_to)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(records = filtered.len(), "filtered");

        let grouped = group_by_granularity(filtered, self.cfg.granularity);
        #[cfg(feature = "tracing")]
        tracing::debug!(buckets = grouped.len(), "grouped");

        let sorted: Vec<PriceRecord> = sort_by_date(grouped, self.cfg.order_direction);
        Ok(format_pairs(&sorted))
    }
}
