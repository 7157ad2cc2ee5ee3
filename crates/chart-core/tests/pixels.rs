// File: crates/chart-core/tests/pixels.rs
// Purpose: Pin down line rendering at the pixel level: NaN gaps stay unpainted and dashed
// strokes leave background between dashes.
//
// Layout: 220x220 surface, 10px insets, both axes 0..10, so one data unit is 20px and the
// plot spans 10..210. Grid lines fall on multiples of 40px from 10; samples avoid them.

use chart_core::types::Insets;
use chart_core::{Axis, Chart, LineStyle, RenderOptions, Series, Theme};

fn opts() -> RenderOptions {
    RenderOptions {
        width: 220,
        height: 220,
        insets: Insets::new(10, 10, 10, 10),
        theme: Theme::dark(),
        draw_labels: false,
        ..RenderOptions::default()
    }
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn background() -> [u8; 4] {
    let bg = Theme::dark().background;
    [bg.r(), bg.g(), bg.b(), 255]
}

fn flat(y: f64) -> Vec<(f64, f64)> {
    (0..=10).map(|i| (i as f64, y)).collect()
}

/// Close at y=5 (row 110) with a gap at x=5, MA dashed at y=2.5 (row 160).
fn render_close_and_ma() -> (Vec<u8>, usize) {
    let mut close = flat(5.0);
    close[5].1 = f64::NAN;

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    chart.add_series(Series::line("Close", close));
    chart.add_series(Series::line("MA", flat(2.5)).with_style(LineStyle::Dashed));

    let (px, _, _, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    (px, stride)
}

fn is_blue([r, _, b, a]: [u8; 4]) -> bool {
    b > r.saturating_add(50) && a == 255
}

fn is_orange([r, _, b, a]: [u8; 4]) -> bool {
    r > b.saturating_add(50) && a == 255
}

#[test]
fn nan_gap_is_not_bridged() {
    let (px, stride) = render_close_and_ma();

    // Either side of the gap the Close stroke is painted.
    assert!(is_blue(pixel(&px, stride, 60, 110)), "left of gap: {:?}", pixel(&px, stride, 60, 110));
    assert!(is_blue(pixel(&px, stride, 150, 110)), "right of gap: {:?}", pixel(&px, stride, 150, 110));

    // Segments end at x=4 (px 90) and restart at x=6 (px 130); nothing joins them.
    for x in [100, 110, 120] {
        assert_eq!(pixel(&px, stride, x, 110), background(), "gap pixel at x={x}");
    }
}

#[test]
fn dashed_stroke_leaves_background_between_dashes() {
    let (px, stride) = render_close_and_ma();

    // Dash pattern [8 on, 5 off] starting at px 10: on 10..18, 23..31, 36..44.
    for x in [14, 27, 40] {
        let p = pixel(&px, stride, x, 160);
        assert!(is_orange(p), "dash pixel at x={x}: {p:?}");
    }
    for x in [20, 33, 46] {
        assert_eq!(pixel(&px, stride, x, 160), background(), "dash gap pixel at x={x}");
    }
}

#[test]
fn solid_stroke_has_no_gaps() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    chart.add_series(Series::line("Close", flat(2.5)));

    let (px, _, _, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    for x in [20, 33, 46] {
        let p = pixel(&px, stride, x, 160);
        assert!(is_blue(p), "solid stroke pixel at x={x}: {p:?}");
    }
}
