// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (Skia CPU raster surface -> RGBA8 -> PNG).

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use skia_safe as skia;
use thiserror::Error;

use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::series::{LineStyle, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface {width}x{height} leaves no plot area")]
    InvalidSize { width: i32, height: i32 },
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, tick labels, axis labels, and legend. Off for pixel-level tests.
    pub draw_labels: bool,
    /// Per-series point budget before LTTB downsampling; 0 disables it.
    pub max_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            max_points: 4_000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the finite data, padding Y by `margin` (fraction of its span).
    /// Axes are left untouched when there is no finite point.
    pub fn autoscale_axes(&mut self, margin: f64) -> bool {
        match ViewState::from_series(&self.series) {
            Some(v) => {
                v.padded(margin).apply_to_chart(self);
                true
            }
            None => false,
        }
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets)
            .ok_or(RenderError::InvalidSize { width: opts.width, height: opts.height })?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;

        self.draw(surface.canvas(), opts, plot);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels.into());
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).map_err(RenderError::from)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, plot: RectI32) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let sx = LinearScale::horizontal(self.x_axis.min, self.x_axis.max, plot.left, plot.right);
        let sy = LinearScale::vertical(self.y_axis.min, self.y_axis.max, plot.top, plot.bottom);
        let x_ticks = self.x_axis.ticks(6);
        let y_ticks = self.y_axis.ticks(6);

        draw_grid(canvas, theme, plot, &x_ticks, &y_ticks, &sx, &sy);
        draw_axes(canvas, theme, plot);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let s = if opts.max_points > 0 { s.downsample_xy_lttb(opts.max_points) } else { s.clone() };
            draw_line_series(canvas, &s, theme.series_color(i), &sx, &sy);
        }
        canvas.restore();

        if opts.draw_labels {
            let text = TextShaper::new();
            self.draw_labels(canvas, &text, theme, plot, &x_ticks, &y_ticks, &sx, &sy);
            self.draw_legend(canvas, &text, theme, plot);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        text: &TextShaper,
        theme: &Theme,
        plot: RectI32,
        x_ticks: &[(f64, String)],
        y_ticks: &[(f64, String)],
        sx: &LinearScale,
        sy: &LinearScale,
    ) {
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        for (v, label) in x_ticks {
            text.draw_centered(canvas, label, sx.to_px(*v), b + 18.0, 12.0, theme.tick, true);
        }
        for (v, label) in y_ticks {
            text.draw_right(canvas, label, l - 8.0, sy.to_px(*v) + 4.0, 12.0, theme.tick, true);
        }

        text.draw_centered(canvas, &self.x_axis.label, (l + r) * 0.5, b + 44.0, 14.0, theme.axis_label, false);
        text.draw_left(canvas, &self.y_axis.label, 8.0, t - 10.0, 14.0, theme.axis_label, false);
        if !self.title.is_empty() {
            text.draw_centered(canvas, &self.title, (l + r) * 0.5, t - 18.0, 18.0, theme.title, false);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, text: &TextShaper, theme: &Theme, plot: RectI32) {
        let entries: Vec<(usize, &Series)> = self.series.iter().enumerate().filter(|(_, s)| !s.label.is_empty()).collect();
        if entries.is_empty() {
            return;
        }
        const ROW: f32 = 20.0;
        const SWATCH: f32 = 24.0;
        let width = entries.iter().map(|(_, s)| text.measure_width(&s.label, 12.0, false)).fold(0.0f32, f32::max);
        let (x0, y0) = (plot.left as f32 + 12.0, plot.top as f32 + 12.0);
        let bg = skia::Rect::from_xywh(x0, y0, SWATCH + width + 24.0, ROW * entries.len() as f32 + 8.0);

        let mut fill = skia::Paint::default();
        fill.set_color(theme.legend_background);
        canvas.draw_rect(bg, &fill);

        for (row, (i, s)) in entries.into_iter().enumerate() {
            let y = y0 + 4.0 + ROW * (row as f32 + 0.5);
            let stroke = line_paint(theme.series_color(i), s.style);
            canvas.draw_line((x0 + 8.0, y), (x0 + 8.0 + SWATCH, y), &stroke);
            text.draw_left(canvas, &s.label, x0 + 16.0 + SWATCH, y + 4.0, 12.0, theme.axis_label, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn line_paint(color: skia::Color, style: LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);
    if style == LineStyle::Dashed {
        stroke.set_path_effect(skia::PathEffect::dash(&[8.0, 5.0], 0.0));
    }
    stroke
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: RectI32,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    sx: &LinearScale,
    sy: &LinearScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, plot: RectI32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

/// One path with a sub-path per finite segment; single points become dots.
fn draw_line_series(canvas: &skia::Canvas, series: &Series, color: skia::Color, sx: &LinearScale, sy: &LinearScale) {
    let stroke = line_paint(color, series.style);
    let mut path = skia::Path::new();
    for seg in series.segments() {
        let pts = &series.data_xy[seg];
        match pts {
            [] => {}
            [(x, y)] => {
                let mut dot = stroke.clone();
                dot.set_style(skia::paint::Style::Fill);
                canvas.draw_circle((sx.to_px(*x), sy.to_px(*y)), 2.0, &dot);
            }
            [(x0, y0), rest @ ..] => {
                path.move_to((sx.to_px(*x0), sy.to_px(*y0)));
                for (x, y) in rest {
                    path.line_to((sx.to_px(*x), sy.to_px(*y)));
                }
            }
        }
    }
    canvas.draw_path(&path, &stroke);
}
