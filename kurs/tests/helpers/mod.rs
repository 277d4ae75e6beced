use kurs::RawRecord;

/// The reference feed: four daily observations spanning a week, month and
/// quarter boundary, deliberately out of date order.
pub fn feed() -> Vec<RawRecord> {
    vec![
        RawRecord::new("2018-10-01", "3321.71"),
        RawRecord::new("2018-09-30", "3320.7"),
        RawRecord::new("2018-10-02", "3322.72"),
        RawRecord::new("2018-10-03", "3323.73"),
    ]
}

/// Build the expected output shape from borrowed pairs.
pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(d, p)| ((*d).to_string(), (*p).to_string()))
        .collect()
}
