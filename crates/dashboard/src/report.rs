// File: crates/dashboard/src/report.rs
// Summary: Console tables and the trend chart built from a view's presentation data.

use std::fmt::Write as _;

use chart_core::{date_to_x, Axis, Chart, LineStyle, Series};
use stock_series::{Cell, PriceSeriesView, TrendData};

/// First `rows` rows of the view as a right-aligned text table, numbers to 2 decimals.
pub fn overview_table(view: &PriceSeriesView<'_>, rows: usize) -> String {
    let mut header = vec!["Date".to_string()];
    header.extend(view.series().column_names().map(str::to_string));

    let body: Vec<Vec<String>> = view
        .rows()
        .take(rows)
        .map(|row| {
            std::iter::once(row.date().to_string())
                .chain(row.cells().map(|cell| match cell {
                    Cell::Number(v) => format!("{v:.2}"),
                    Cell::Text(s) => s.to_string(),
                }))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| body.iter().map(|r| r[i].len()).chain([h.len()]).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&body) {
        let cells: Vec<String> = line.iter().zip(&widths).map(|(c, w)| format!("{c:>w$}")).collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}

/// Close (solid) and moving average (dashed) against date.
pub fn trend_chart(trend: &TrendData) -> Chart {
    let close = trend.points.iter().map(|p| (date_to_x(p.date), p.close)).collect();
    let ma = trend.points.iter().map(|p| (date_to_x(p.date), p.ma)).collect();

    let mut chart = Chart::with_title(&trend.title);
    if let (Some(first), Some(last)) = (trend.points.first(), trend.points.last()) {
        chart.x_axis = Axis::dates("Date", first.date, last.date);
    } else {
        chart.x_axis = Axis::new("Date", 0.0, 1.0);
    }
    chart.y_axis = Axis::new("Price", 0.0, 1.0);
    chart.add_series(Series::line("Close", close));
    chart.add_series(Series::line(trend.ma_label.clone(), ma).with_style(LineStyle::Dashed));
    chart.autoscale_axes(0.05);
    chart
}

/// File-name-safe form of a display label: lowercase ASCII alphanumerics joined by `_`.
pub fn slug(label: &str) -> String {
    let words: Vec<String> = label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    if words.is_empty() { "stock".to_string() } else { words.join("_") }
}
