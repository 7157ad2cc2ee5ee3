// File: crates/stock-series/tests/filter_summary.rs
// Purpose: Date-range views (inverted, clamped, single-day, empty) and summary statistics over them.

mod common;

use common::{daily_csv, q1_2023_csv, ymd};
use stock_series::{PriceSeries, Processor, RangeError};

fn derived(csv: &str) -> PriceSeries {
    let p = Processor::default();
    p.derive_indicators(p.load(csv.as_bytes()).expect("load"))
}

#[test]
fn inverted_range_is_rejected() {
    let series = derived(&q1_2023_csv());
    let err = Processor::default()
        .filter(&series, ymd(2023, 2, 1), ymd(2023, 1, 1))
        .unwrap_err();
    assert_eq!(err, RangeError { start: ymd(2023, 2, 1), end: ymd(2023, 1, 1) });
}

#[test]
fn range_is_inclusive_on_both_ends() {
    let series = derived(&q1_2023_csv());
    let view = Processor::default().filter(&series, ymd(2023, 1, 10), ymd(2023, 1, 20)).unwrap();
    assert_eq!(view.len(), 11);
    assert_eq!(view.first_date(), Some(ymd(2023, 1, 10)));
    assert_eq!(view.last_date(), Some(ymd(2023, 1, 20)));
    assert_eq!(view.row_range(), 9..20);
}

#[test]
fn single_day_range() {
    let series = derived(&q1_2023_csv());
    let p = Processor::default();

    let hit = p.filter(&series, ymd(2023, 2, 14), ymd(2023, 2, 14)).unwrap();
    assert_eq!(hit.dates(), &[ymd(2023, 2, 14)]);

    // Weekly data: a day between two rows selects nothing.
    let weekly = "Date,Open,High,Low,Close\n2023-01-02,1,1,1,1\n2023-01-09,2,2,2,2\n";
    let sparse = derived(weekly);
    assert!(p.filter(&sparse, ymd(2023, 1, 5), ymd(2023, 1, 5)).unwrap().is_empty());
}

#[test]
fn out_of_span_bounds_are_clamped() {
    let series = derived(&q1_2023_csv());
    let view = Processor::default().filter(&series, ymd(2000, 1, 1), ymd(2099, 12, 31)).unwrap();
    assert_eq!(view.len(), 90);

    let tail = Processor::default().filter(&series, ymd(2023, 3, 30), ymd(2030, 1, 1)).unwrap();
    assert_eq!(tail.dates(), &[ymd(2023, 3, 30), ymd(2023, 3, 31)]);
}

#[test]
fn view_shares_series_storage() {
    let series = derived(&q1_2023_csv());
    let view = Processor::default().filter(&series, ymd(2023, 3, 1), ymd(2023, 3, 5)).unwrap();
    let close = view.numeric("Close").unwrap();
    assert_eq!(close.len(), 5);
    assert!(std::ptr::eq(close.as_ptr(), series.close()[59..].as_ptr()));
}

#[test]
fn full_quarter_summary_counts() {
    let series = derived(&q1_2023_csv());
    let p = Processor::default();
    let view = p.filter(&series, ymd(2023, 1, 1), ymd(2023, 3, 31)).unwrap();
    let stats = p.summarize(&view);

    for name in ["Open", "High", "Low", "Close", "Volume"] {
        assert_eq!(stats.column(name).unwrap().count, 90, "{name}");
    }
    // Undefined indicator cells are not counted.
    assert_eq!(stats.column("MA50").unwrap().count, 41);
    assert_eq!(stats.column("Volatility").unwrap().count, 60);
}

#[test]
fn summary_values_match_hand_computation() {
    let closes = [4.0, 1.0, 3.0, 2.0, 5.0];
    let series = derived(&daily_csv(ymd(2023, 5, 1), &closes));
    let p = Processor::default();
    let view = p.filter(&series, ymd(2023, 5, 1), ymd(2023, 5, 31)).unwrap();
    let close = p.summarize(&view).column("Close").unwrap().clone();

    assert_eq!(close.count, 5);
    assert_eq!(close.mean, 3.0);
    assert!((close.std - 2.5f64.sqrt()).abs() < 1e-12);
    assert_eq!((close.min, close.p25, close.p50, close.p75, close.max), (1.0, 2.0, 3.0, 4.0, 5.0));
}

#[test]
fn empty_view_summary_is_undefined() {
    let series = derived(&q1_2023_csv());
    let p = Processor::default();
    let view = p.filter(&series, ymd(2022, 1, 1), ymd(2022, 12, 31)).unwrap();
    assert!(view.is_empty());

    let stats = p.summarize(&view);
    assert_eq!(stats.columns.len(), 7);
    for c in &stats.columns {
        assert_eq!(c.count, 0);
        for v in [c.mean, c.std, c.min, c.p25, c.p50, c.p75, c.max] {
            assert!(v.is_nan(), "{} should be undefined", c.name);
        }
    }
}

#[test]
fn summary_table_renders_every_statistic() {
    let series = derived(&q1_2023_csv());
    let p = Processor::default();
    let view = p.filter(&series, ymd(2023, 1, 1), ymd(2023, 1, 31)).unwrap();
    let text = p.summarize(&view).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert!(lines[0].contains("Close") && lines[0].contains("MA50"));
    assert!(lines[1].starts_with("count") && lines[1].contains("31.0000"));
    assert!(lines[8].starts_with("max"));
    assert!(text.contains("NaN"), "MA50 has no values in January");
}

#[test]
fn trend_data_pairs_close_with_moving_average() {
    let series = derived(&q1_2023_csv());
    let view = Processor::default().filter(&series, ymd(2023, 2, 15), ymd(2023, 2, 22)).unwrap();
    let trend = view.trend("ACME", "MA50");

    assert_eq!(trend.title, "ACME - Stock Price Trend");
    assert_eq!(trend.points.len(), 8);
    // 2023-02-18 is row 48, 2023-02-19 row 49: the first defined MA50.
    assert!(trend.points[3].ma.is_nan());
    assert!(trend.points[4].ma.is_finite());
    assert_eq!(trend.points[0].close, view.numeric("Close").unwrap()[0]);
}
