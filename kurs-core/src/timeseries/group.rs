//! Grouping stage: calendar bucketing and exact decimal averaging.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use kurs_types::Granularity;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::PriceRecord;

/// Bucket records by calendar period and replace each bucket with its mean.
///
/// `Daily` is the identity: the input is returned untouched, prices
/// included. For the other granularities every record maps to a bucket key
/// (the first day of its enclosing week, month or quarter; weeks start on
/// Monday) and each bucket emits one record carrying the arithmetic mean of
/// its prices, rounded half-up to 2 decimal places.
///
/// The sum/divide/round sequence runs entirely in `Decimal`, and the
/// rounded mean is normalized so no trailing zeros survive serialization
/// (a single-member bucket holding `3320.7` averages to `3320.7`, not
/// `3320.70`).
///
/// Bucket emission order is arbitrary; the sort stage owns final ordering.
#[must_use]
pub fn group_by_granularity(records: Vec<PriceRecord>, granularity: Granularity) -> Vec<PriceRecord> {
    let bucket_of: fn(NaiveDate) -> NaiveDate = match granularity {
        Granularity::Daily => return records,
        Granularity::Weekly => week_start,
        Granularity::Monthly => month_start,
        Granularity::Quarterly => quarter_start,
    };

    let mut buckets: HashMap<NaiveDate, Vec<Decimal>> = HashMap::new();
    for r in records {
        buckets.entry(bucket_of(r.date)).or_default().push(r.price);
    }

    buckets
        .into_iter()
        .map(|(date, prices)| PriceRecord::new(date, mean_rounded(&prices)))
        .collect()
}

/// The Monday of the week containing `d`.
fn week_start(d: NaiveDate) -> NaiveDate {
    let days_from_monday = i64::from(d.weekday().num_days_from_monday());
    d.checked_sub_signed(Duration::days(days_from_monday))
        .unwrap_or(d)
}

/// The first day of the month containing `d`.
fn month_start(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// The first day of the quarter containing `d` (Jan/Apr/Jul/Oct 1).
fn quarter_start(d: NaiveDate) -> NaiveDate {
    let month = d.month0() / 3 * 3 + 1;
    NaiveDate::from_ymd_opt(d.year(), month, 1).unwrap_or(d)
}

/// Arithmetic mean of `prices`, rounded half-up to 2 decimal places.
///
/// Callers guarantee a non-empty slice (a bucket exists only because at
/// least one record mapped to it); an empty slice yields zero rather than
/// dividing by zero.
fn mean_rounded(prices: &[Decimal]) -> Decimal {
    let Ok(count) = u64::try_from(prices.len()) else {
        return Decimal::ZERO;
    };
    if count == 0 {
        return Decimal::ZERO;
    }
    let sum: Decimal = prices.iter().sum();
    (sum / Decimal::from(count))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
