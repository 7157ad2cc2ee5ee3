// File: crates/stock-series/src/series.rs
// Summary: Date-keyed, column-major price table with numeric and pass-through text columns.
// Notes:
// - Missing numeric cells are stored as NaN.
// - Column order is the upload's header order; derived columns are appended.

use chrono::NaiveDate;

pub const DATE: &str = "Date";
pub const OPEN: &str = "Open";
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const CLOSE: &str = "Close";
pub const VOLATILITY: &str = "Volatility";

/// Columns every upload must carry, in canonical spelling.
pub const REQUIRED_COLUMNS: [&str; 5] = [DATE, OPEN, HIGH, LOW, CLOSE];

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), data: ColumnData::Numeric(values) }
    }

    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self { name: name.into(), data: ColumnData::Text(values) }
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }
}

/// Rows keyed by strictly increasing dates. Built by [`Processor::load`](crate::Processor::load).
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl PriceSeries {
    /// Assemble a series from parts that already satisfy the date and length invariants.
    pub(crate) fn from_parts(dates: Vec<NaiveDate>, columns: Vec<Column>) -> Self {
        debug_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(columns.iter().all(|c| c.data.len() == dates.len()));
        Self { dates, columns }
    }

    pub fn len(&self) -> usize { self.dates.len() }

    pub fn is_empty(&self) -> bool { self.dates.is_empty() }

    pub fn dates(&self) -> &[NaiveDate] { &self.dates }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        self.column(name).and_then(Column::as_numeric)
    }

    pub fn close(&self) -> &[f64] {
        self.numeric(CLOSE).unwrap_or(&[])
    }

    /// First and last date, when the series has rows.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    /// Replace a numeric column in place, or append it when absent.
    pub(crate) fn set_numeric(&mut self, name: &str, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.dates.len());
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(col) => col.data = ColumnData::Numeric(values),
            None => self.columns.push(Column::numeric(name, values)),
        }
    }
}
