//! End-to-end formatting behavior through the facade crate

use chrono::NaiveDate;
use sqlog::prelude::*;
use sqlog::{DriverValue, ValuerError};
use std::time::{Duration, Instant};

fn formatter(after: Duration) -> (QueryLogFormatter<FixedClock>, Instant) {
    let start = Instant::now();
    let wall = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    (
        QueryLogFormatter::with_clock(FixedClock::new(start + after, wall)),
        start,
    )
}

#[derive(Debug)]
struct Money {
    cents: i64,
}

impl SqlValuer for Money {
    fn value(&self) -> Result<Option<DriverValue>, ValuerError> {
        Ok(Some(DriverValue::Text(format!(
            "{}.{:02}",
            self.cents / 100,
            self.cents % 100
        ))))
    }
}

#[derive(Debug)]
struct Unset;

impl SqlValuer for Unset {
    fn value(&self) -> Result<Option<DriverValue>, ValuerError> {
        Ok(None)
    }
}

#[test]
fn sequential_example_line() {
    let (formatter, start) = formatter(Duration::from_micros(1_250));
    let line = formatter.format(
        start,
        "SELECT * FROM t WHERE id = ? AND name = ?",
        &args![42, "a'b"],
    );

    assert_eq!(
        line.to_string(),
        "\n[2024-01-15 10:30:00] [1.25ms] SELECT * FROM t WHERE id = 42 AND name = 'a'b'"
    );
}

#[test]
fn numbered_example_line() {
    let (formatter, start) = formatter(Duration::ZERO);
    let line = formatter.format(start, "SELECT * FROM t WHERE id = $1", &args![7]);
    assert_eq!(line.sql(), Some("SELECT * FROM t WHERE id = 7"));
}

#[test]
fn binary_example_line() {
    let (formatter, start) = formatter(Duration::ZERO);
    let line = formatter.format(start, "SELECT ?", &args![vec![0xffu8, 0x00]]);
    assert_eq!(line.sql(), Some("SELECT '<binary>'"));
}

#[test]
fn matching_sequential_counts_leave_no_markers() {
    let (formatter, start) = formatter(Duration::ZERO);
    let templates = [
        ("?", 1),
        ("a = ? AND b = ?", 2),
        ("INSERT INTO t (a, b, c) VALUES (?, ?, ?)", 3),
        ("?,?,?,?,?", 5),
    ];

    for (template, count) in templates {
        let values: Vec<LogValue<'_>> = (0..count).map(|i| LogValue::from(i * 11)).collect();
        let line = formatter.format(start, template, &values);
        let sql = line.sql().unwrap();

        assert!(!sql.contains('?'), "{template} -> {sql}");
        let mut from = 0;
        for i in 0..count {
            let needle = (i * 11).to_string();
            let found = sql[from..].find(&needle).expect("value in order");
            from += found + needle.len();
        }
    }
}

#[test]
fn every_value_shape_in_one_statement() {
    let (formatter, start) = formatter(Duration::from_millis(3));
    let created = NaiveDate::from_ymd_opt(2023, 7, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let price = Money { cents: 1999 };
    let unset = Unset;
    let nickname: Option<&str> = None;

    let values = [
        LogValue::from(created),
        LogValue::from(b"avatar.png".as_slice()),
        LogValue::valuer(&price),
        LogValue::valuer(&unset),
        LogValue::from(2.5f64),
        LogValue::from(true),
        LogValue::from(nickname),
        LogValue::from("note"),
    ];
    let line = formatter.format(
        start,
        "INSERT INTO items VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        &values,
    );

    assert_eq!(
        line.sql(),
        Some(
            "INSERT INTO items VALUES ('2023-07-01 08:00:00', 'avatar.png', '19.99', \
             NULL, 2.5, true, NULL, 'note')"
        )
    );
    assert_eq!(
        line.elapsed().map(|e| e.to_string()).as_deref(),
        Some("3.00ms")
    );
}

#[test]
fn mismatched_counts_degrade() {
    let (formatter, start) = formatter(Duration::ZERO);

    let fewer = formatter.format(start, "a = ? AND b = ?", &args![1]);
    assert_eq!(fewer.sql(), Some("a = 1 AND b = "));

    let more = formatter.format(start, "a = ?", &args![1, 2]);
    assert_eq!(more.sql(), Some("a = 1"));

    let out_of_range = formatter.format(start, "a = $2", &args![1]);
    assert_eq!(out_of_range.sql(), Some("a = $2"));
}

#[test]
fn numbered_index_never_splits_digits() {
    let (formatter, start) = formatter(Duration::ZERO);
    let line = formatter.format(start, "SELECT $1, $10, $1", &args!["x"]);
    assert_eq!(line.sql(), Some("SELECT 'x', $10, 'x'"));
}

#[test]
fn any_numbered_marker_switches_the_whole_template() {
    assert_eq!(
        PlaceholderStyle::detect("a = $1 AND b = ?"),
        PlaceholderStyle::Numbered
    );

    let (formatter, start) = formatter(Duration::ZERO);
    let line = formatter.format(start, "a = $1 AND b = ?", &args![1, 2]);
    assert_eq!(line.sql(), Some("a = 1 AND b = ?"));
}
