use kurs::{Granularity, Kurs};

use crate::helpers::{feed, pairs};

fn run_with(granularity: Granularity) -> Vec<(String, String)> {
    Kurs::builder()
        .granularity(granularity)
        .build()
        .unwrap()
        .run(feed())
        .unwrap()
}

#[test]
fn weekly_buckets_and_averages() {
    // 3321.71, 3322.72 and 3323.73 share the week of Monday 2018-10-01;
    // their mean is exactly 3322.72. Sunday 2018-09-30 falls in the week
    // of 2018-09-24 on its own.
    assert_eq!(
        run_with(Granularity::Weekly),
        pairs(&[("2018-10-01", "3322.72"), ("2018-09-24", "3320.7")])
    );
}

#[test]
fn monthly_buckets_and_averages() {
    assert_eq!(
        run_with(Granularity::Monthly),
        pairs(&[("2018-10-01", "3322.72"), ("2018-09-01", "3320.7")])
    );
}

#[test]
fn quarterly_buckets_and_averages() {
    assert_eq!(
        run_with(Granularity::Quarterly),
        pairs(&[("2018-10-01", "3322.72"), ("2018-07-01", "3320.7")])
    );
}

#[test]
fn daily_is_the_default_and_a_no_op() {
    let grouped = run_with(Granularity::Daily);
    let default = Kurs::builder().build().unwrap().run(feed()).unwrap();
    assert_eq!(grouped, default);
    assert_eq!(grouped.len(), feed().len());
}

#[test]
fn granularity_composes_with_filtering() {
    let out = Kurs::builder()
        .granularity(Granularity::Weekly)
        .date_from("2018-10-01")
        .build()
        .unwrap()
        .run(feed())
        .unwrap();
    // The September record is filtered out before grouping, so only the
    // October week remains and its average excludes 3320.7.
    assert_eq!(out, pairs(&[("2018-10-01", "3322.72")]));
}
