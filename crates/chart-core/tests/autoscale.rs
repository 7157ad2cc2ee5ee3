// File: crates/chart-core/tests/autoscale.rs
// Purpose: Autoscale fits axes to finite data across series and ignores gaps.

use chart_core::{Axis, Chart, Series};

#[test]
fn autoscale_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::line("b", vec![(2.0, 6.0), (3.0, 1.5)]));

    assert!(chart.autoscale_axes(0.0));

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 5.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (1.0, 6.0));
}

#[test]
fn autoscale_ignores_nan_and_pads_y() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("close", vec![(10.0, 100.0), (11.0, f64::NAN), (12.0, 110.0)]));
    chart.add_series(Series::line("ma", vec![(10.0, f64::NAN), (11.0, f64::NAN), (12.0, 105.0)]));

    assert!(chart.autoscale_axes(0.1));

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (10.0, 12.0));
    assert!((chart.y_axis.min - 99.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 111.0).abs() < 1e-9);
}

#[test]
fn autoscale_without_finite_data_keeps_axes() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", -1.0, 1.0);
    chart.add_series(Series::line("empty", vec![(0.0, f64::NAN)]));

    assert!(!chart.autoscale_axes(0.05));
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (-1.0, 1.0));
}

#[test]
fn autoscale_single_point_widens_spans() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("p", vec![(3.0, 7.0)]));
    chart.autoscale_axes(0.0);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (3.0, 4.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (6.5, 7.5));
}
