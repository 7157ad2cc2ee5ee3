// File: crates/chart-core/src/view.rs
// Summary: Data bounds of a chart's series (finite points only) and autoscale helpers.

use crate::series::Series;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Bounds over every finite point; `None` when there is none.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut v = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        let mut any = false;
        for &(x, y) in series.iter().flat_map(|s| s.data_xy.iter()) {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            v.x_min = v.x_min.min(x);
            v.x_max = v.x_max.max(x);
            v.y_min = v.y_min.min(y);
            v.y_max = v.y_max.max(y);
            any = true;
        }
        any.then_some(v)
    }

    /// Widen degenerate spans and pad Y by `margin` (fraction of the Y span).
    pub fn padded(mut self, margin: f64) -> Self {
        if (self.x_max - self.x_min).abs() < 1e-9 {
            self.x_max = self.x_min + 1.0;
        }
        if (self.y_max - self.y_min).abs() < 1e-9 {
            self.y_min -= 0.5;
            self.y_max += 0.5;
        }
        let m = (self.y_max - self.y_min) * margin.max(0.0);
        self.y_min -= m;
        self.y_max += m;
        self
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
