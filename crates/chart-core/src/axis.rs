// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, range, and tick formatting (numbers or calendar dates).

use chrono::{Datelike, NaiveDate};

use crate::grid::{day_ticks, decimals_for_step, nice_step, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisFormat {
    Number,
    /// Values are days from the common era (see [`date_to_x`]).
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: AxisFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: AxisFormat::Number }
    }

    pub fn dates(label: impl Into<String>, first: NaiveDate, last: NaiveDate) -> Self {
        Self { label: label.into(), min: date_to_x(first), max: date_to_x(last), format: AxisFormat::Date }
    }

    pub fn default_x() -> Self { Self::new("X", 0.0, 10.0) }

    pub fn default_y() -> Self { Self::new("Value", 0.0, 100.0) }

    /// Tick positions and their labels, roughly `target` of them.
    pub fn ticks(&self, target: usize) -> Vec<(f64, String)> {
        match self.format {
            AxisFormat::Number => {
                let decimals = decimals_for_step(nice_step(self.max - self.min, target));
                nice_ticks(self.min, self.max, target)
                    .into_iter()
                    .map(|v| (v, format!("{v:.decimals$}")))
                    .collect()
            }
            AxisFormat::Date => day_ticks(self.min, self.max, target)
                .into_iter()
                .filter_map(|v| x_to_date(v).map(|d| (v, d.format("%Y-%m-%d").to_string())))
                .collect(),
        }
    }
}

/// X coordinate of `date` on a date axis.
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`date_to_x`]; fractional days are rounded.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}
