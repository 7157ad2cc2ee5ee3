// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model and headless Skia rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod downsample;

pub use chart::{Chart, RenderError, RenderOptions};
pub use series::{LineStyle, Series};
pub use axis::{date_to_x, x_to_date, Axis, AxisFormat};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use downsample::lttb;
