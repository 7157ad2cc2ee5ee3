// File: crates/stock-series/tests/common/mod.rs
// Purpose: Shared fixtures for the series pipeline tests.
#![allow(dead_code)]

use chrono::{Days, NaiveDate};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Deterministic closes: slow drift plus a wave, always positive.
pub fn wave(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0 + i as f64 * 0.1).collect()
}

/// Daily OHLCV CSV starting at `start`, one row per close.
pub fn daily_csv(start: NaiveDate, closes: &[f64]) -> String {
    let mut out = String::from("Date,Open,High,Low,Close,Volume\n");
    for (i, c) in closes.iter().enumerate() {
        let date = start + Days::new(i as u64);
        out.push_str(&format!("{},{},{},{},{},{}\n", date, c - 0.5, c + 1.0, c - 1.0, c, 1000 + i));
    }
    out
}

/// 2023-01-01..=2023-03-31, 90 daily rows.
pub fn q1_2023_csv() -> String {
    daily_csv(ymd(2023, 1, 1), &wave(90))
}

pub fn same_or_both_missing(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() <= 1e-12 * a.abs().max(1.0)
}
