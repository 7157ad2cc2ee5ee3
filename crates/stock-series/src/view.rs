// File: crates/stock-series/src/view.rs
// Summary: Read-only, date-range-restricted views over a PriceSeries, plus the plain data the shell renders.

use std::ops::Range;

use chrono::NaiveDate;

use crate::error::RangeError;
use crate::series::{ColumnData, PriceSeries, CLOSE};

/// Borrowed slice of a [`PriceSeries`] covering a contiguous run of rows.
#[derive(Clone, Copy, Debug)]
pub struct PriceSeriesView<'a> {
    series: &'a PriceSeries,
    start: usize,
    end: usize,
}

/// Column data restricted to a view's rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnSlice<'a> {
    Numeric(&'a [f64]),
    Text(&'a [String]),
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnView<'a> {
    pub name: &'a str,
    pub data: ColumnSlice<'a>,
}

/// Restrict `series` to rows whose date lies in `[start, end]`.
/// Bounds outside the series' span are clamped, so the result may be empty.
pub fn filter(series: &PriceSeries, start: NaiveDate, end: NaiveDate) -> Result<PriceSeriesView<'_>, RangeError> {
    if start > end {
        return Err(RangeError { start, end });
    }
    let dates = series.dates();
    let lo = dates.partition_point(|d| *d < start);
    let hi = dates.partition_point(|d| *d <= end);
    Ok(PriceSeriesView { series, start: lo, end: hi.max(lo) })
}

impl<'a> PriceSeriesView<'a> {
    /// View over every row of `series`.
    pub fn full(series: &'a PriceSeries) -> Self {
        Self { series, start: 0, end: series.len() }
    }

    pub fn series(&self) -> &'a PriceSeries { self.series }

    /// Row indices of the underlying series covered by this view.
    pub fn row_range(&self) -> Range<usize> { self.start..self.end }

    pub fn len(&self) -> usize { self.end - self.start }

    pub fn is_empty(&self) -> bool { self.start == self.end }

    pub fn dates(&self) -> &'a [NaiveDate] {
        &self.series.dates()[self.start..self.end]
    }

    pub fn first_date(&self) -> Option<NaiveDate> { self.dates().first().copied() }

    pub fn last_date(&self) -> Option<NaiveDate> { self.dates().last().copied() }

    pub fn columns(&self) -> impl Iterator<Item = ColumnView<'a>> + 'a {
        let (series, start, end) = (self.series, self.start, self.end);
        series.columns().iter().map(move |c| ColumnView {
            name: c.name.as_str(),
            data: match &c.data {
                ColumnData::Numeric(v) => ColumnSlice::Numeric(&v[start..end]),
                ColumnData::Text(v) => ColumnSlice::Text(&v[start..end]),
            },
        })
    }

    pub fn numeric(&self, name: &str) -> Option<&'a [f64]> {
        self.series.numeric(name).map(|v| &v[self.start..self.end])
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'a>> + 'a {
        let series = self.series;
        self.row_range().map(move |index| RowRef { series, index })
    }

    /// Close and moving-average points for the trend chart.
    pub fn trend(&self, label: &str, ma_column: &str) -> TrendData {
        let close = self.numeric(CLOSE).unwrap_or(&[]);
        let ma = self.numeric(ma_column);
        let points = self
            .dates()
            .iter()
            .enumerate()
            .map(|(i, &date)| TrendPoint {
                date,
                close: close.get(i).copied().unwrap_or(f64::NAN),
                ma: ma.and_then(|m| m.get(i).copied()).unwrap_or(f64::NAN),
            })
            .collect();
        TrendData {
            title: format!("{label} - Stock Price Trend"),
            ma_label: ma_column.to_string(),
            points,
        }
    }
}

/// One row of a view; cells are looked up by column name.
#[derive(Clone, Copy, Debug)]
pub struct RowRef<'a> {
    series: &'a PriceSeries,
    index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> RowRef<'a> {
    pub fn date(&self) -> NaiveDate { self.series.dates()[self.index] }

    pub fn get(&self, column: &str) -> Option<Cell<'a>> {
        let col = self.series.column(column)?;
        Some(match &col.data {
            ColumnData::Numeric(v) => Cell::Number(v[self.index]),
            ColumnData::Text(v) => Cell::Text(v[self.index].as_str()),
        })
    }

    /// Cells in column order, excluding the date.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        let index = self.index;
        self.series.columns().iter().map(move |c| match &c.data {
            ColumnData::Numeric(v) => Cell::Number(v[index]),
            ColumnData::Text(v) => Cell::Text(v[index].as_str()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub close: f64,
    /// NaN while the moving average has too little history.
    pub ma: f64,
}

/// Input for the two-line price chart (Close and moving average against date).
#[derive(Clone, Debug, PartialEq)]
pub struct TrendData {
    pub title: String,
    pub ma_label: String,
    pub points: Vec<TrendPoint>,
}
