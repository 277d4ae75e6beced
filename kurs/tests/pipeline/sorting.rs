use kurs::{Kurs, OrderDirection};

use crate::helpers::{feed, pairs};

#[test]
fn sorts_descending_by_default() {
    let kurs = Kurs::builder().build().unwrap();
    let out = kurs.run(feed()).unwrap();
    assert_eq!(
        out,
        pairs(&[
            ("2018-10-03", "3323.73"),
            ("2018-10-02", "3322.72"),
            ("2018-10-01", "3321.71"),
            ("2018-09-30", "3320.7"),
        ])
    );
}

#[test]
fn sorts_ascending_on_request() {
    let kurs = Kurs::builder()
        .order_direction(OrderDirection::Asc)
        .build()
        .unwrap();
    let out = kurs.run(feed()).unwrap();
    assert_eq!(
        out,
        pairs(&[
            ("2018-09-30", "3320.7"),
            ("2018-10-01", "3321.71"),
            ("2018-10-02", "3322.72"),
            ("2018-10-03", "3323.73"),
        ])
    );
}
