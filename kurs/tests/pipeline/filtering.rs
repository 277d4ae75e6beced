use chrono::NaiveDate;
use kurs::Kurs;

use crate::helpers::{feed, pairs};

#[test]
fn filters_inclusive_window() {
    let kurs = Kurs::builder()
        .date_from("2018-10-01")
        .date_to("2018-10-02")
        .build()
        .unwrap();
    let out = kurs.run(feed()).unwrap();
    assert_eq!(
        out,
        pairs(&[("2018-10-02", "3322.72"), ("2018-10-01", "3321.71")])
    );
}

#[test]
fn bounds_accept_pre_parsed_dates() {
    let kurs = Kurs::builder()
        .date_from(NaiveDate::from_ymd_opt(2018, 10, 1).unwrap())
        .date_to(NaiveDate::from_ymd_opt(2018, 10, 2).unwrap())
        .build()
        .unwrap();
    let out = kurs.run(feed()).unwrap();
    assert_eq!(
        out,
        pairs(&[("2018-10-02", "3322.72"), ("2018-10-01", "3321.71")])
    );
}

#[test]
fn lower_bound_alone() {
    let kurs = Kurs::builder().date_from("2018-10-02").build().unwrap();
    let out = kurs.run(feed()).unwrap();
    assert_eq!(
        out,
        pairs(&[("2018-10-03", "3323.73"), ("2018-10-02", "3322.72")])
    );
}

#[test]
fn upper_bound_alone() {
    let kurs = Kurs::builder().date_to("2018-09-30").build().unwrap();
    let out = kurs.run(feed()).unwrap();
    assert_eq!(out, pairs(&[("2018-09-30", "3320.7")]));
}

#[test]
fn inverted_window_is_empty() {
    let kurs = Kurs::builder()
        .date_from("2018-10-03")
        .date_to("2018-10-01")
        .build()
        .unwrap();
    let out = kurs.run(feed()).unwrap();
    assert!(out.is_empty());
}
