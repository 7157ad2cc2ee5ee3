// File: crates/chart-core/src/series.rs
// Summary: Labeled line series; NaN y values are gaps that split the line into segments.

use std::ops::Range;

use crate::downsample::lttb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub style: LineStyle,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), style: LineStyle::Solid, data_xy: data }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Index ranges of maximal runs of finite points.
    pub fn segments(&self) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        let mut start = None;
        for (i, &(x, y)) in self.data_xy.iter().enumerate() {
            match (x.is_finite() && y.is_finite(), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    out.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            out.push(s..self.data_xy.len());
        }
        out
    }

    pub fn finite_len(&self) -> usize {
        self.segments().iter().map(|r| r.len()).sum()
    }

    /// Downsample each finite segment with LTTB so the whole series keeps at most
    /// about `max_points` points. Gaps are preserved as single NaN separators.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        let total = self.finite_len();
        if max_points < 2 || total <= max_points {
            return self.clone();
        }
        let mut data = Vec::with_capacity(max_points + 8);
        for (k, seg) in self.segments().into_iter().enumerate() {
            if k > 0 {
                data.push((f64::NAN, f64::NAN));
            }
            let share = (seg.len() * max_points / total).max(2);
            data.extend(lttb(&self.data_xy[seg], share));
        }
        Self { data_xy: data, ..self.clone() }
    }
}
