// File: crates/stock-series/src/summary.rs
// Summary: Per-column descriptive statistics of a view (count, mean, std, min, quartiles, max).

use std::fmt;

use crate::stats::{mean, quantile_sorted, sample_std};
use crate::view::{ColumnSlice, PriceSeriesView};

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    /// Number of non-missing values.
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize `values`, skipping NaN entries.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let mut present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        present.sort_by(f64::total_cmp);
        Self {
            name: name.into(),
            count: present.len(),
            mean: mean(&present),
            std: sample_std(&present),
            min: present.first().copied().unwrap_or(f64::NAN),
            p25: quantile_sorted(&present, 0.25),
            p50: quantile_sorted(&present, 0.50),
            p75: quantile_sorted(&present, 0.75),
            max: present.last().copied().unwrap_or(f64::NAN),
        }
    }

    fn stat(&self, row: usize) -> f64 {
        match row {
            0 => self.count as f64,
            1 => self.mean,
            2 => self.std,
            3 => self.min,
            4 => self.p25,
            5 => self.p50,
            6 => self.p75,
            _ => self.max,
        }
    }
}

/// Statistics for every numeric column of a view, in column order.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryStats {
    pub columns: Vec<ColumnSummary>,
}

const STAT_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

pub fn summarize(view: &PriceSeriesView<'_>) -> SummaryStats {
    let columns = view
        .columns()
        .filter_map(|c| match c.data {
            ColumnSlice::Numeric(values) => Some(ColumnSummary::from_values(c.name, values)),
            ColumnSlice::Text(_) => None,
        })
        .collect();
    SummaryStats { columns }
}

impl SummaryStats {
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Statistic rows by column, 4 decimals, NaN printed as `NaN`.
impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| (0..STAT_NAMES.len()).map(|r| format!("{:.4}", c.stat(r))).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(c, col)| col.iter().map(String::len).chain([c.name.len()]).max().unwrap_or(0))
            .collect();

        write!(f, "{:<6}", "")?;
        for (c, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.name, w = *w)?;
        }
        writeln!(f)?;
        for (r, stat) in STAT_NAMES.iter().enumerate() {
            write!(f, "{:<6}", stat)?;
            for (col, w) in cells.iter().zip(&widths) {
                write!(f, "  {:>w$}", col[r], w = *w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
