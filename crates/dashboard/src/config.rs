// File: crates/dashboard/src/config.rs
// Summary: Dashboard settings loaded from TOML: processor, chart surface, and output locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, RenderOptions};
use serde::Deserialize;
use stock_series::{ProcessorConfig, EXPORT_FILE_NAME};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub processor: ProcessorConfig,
    pub chart: ChartSettings,
    pub output: OutputSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: i32,
    pub height: i32,
    /// Theme preset name (`dark` or `light`).
    pub theme: String,
    /// Per-series point budget before downsampling; 0 draws every point.
    pub max_points: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: "dark".to_string(), max_points: 4_000 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub out_dir: PathBuf,
    /// Name of the processed CSV written into `out_dir`.
    pub file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("target/out"), file_name: EXPORT_FILE_NAME.to_string() }
    }
}

impl DashboardConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.processor.ma_window == 0 {
            anyhow::bail!("processor.ma_window must be greater than 0");
        }
        if self.processor.volatility_window < 2 {
            anyhow::bail!("processor.volatility_window must be at least 2");
        }
        if !self.processor.delimiter.is_ascii() {
            anyhow::bail!("processor.delimiter must be a single ASCII character");
        }
        if self.chart.width <= 0 || self.chart.height <= 0 {
            anyhow::bail!("chart size must be positive, got {}x{}", self.chart.width, self.chart.height);
        }
        if theme::find(&self.chart.theme).is_none() {
            anyhow::bail!("unknown chart theme '{}'", self.chart.theme);
        }
        if self.output.file_name.trim().is_empty() {
            anyhow::bail!("output.file_name must not be empty");
        }
        Ok(())
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        let theme = theme::find(&self.chart.theme)
            .with_context(|| format!("unknown chart theme '{}'", self.chart.theme))?;
        Ok(RenderOptions {
            width: self.chart.width,
            height: self.chart.height,
            theme,
            max_points: self.chart.max_points,
            ..RenderOptions::default()
        })
    }
}
