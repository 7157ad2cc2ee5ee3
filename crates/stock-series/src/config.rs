// File: crates/stock-series/src/config.rs
// Summary: Processor settings (indicator windows, duplicate-date policy, CSV dialect), TOML-loadable.

use serde::Deserialize;

/// Default trailing window for the Close moving average.
pub const MA_WINDOW: usize = 50;
/// Default trailing window for the percentage-change standard deviation.
pub const VOLATILITY_WINDOW: usize = 30;

/// What to do when two uploaded rows carry the same date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the upload with `FormatError::DuplicateDate`.
    #[default]
    Reject,
    /// Keep the row that appears first in the file.
    KeepFirst,
    /// Keep the row that appears last in the file.
    KeepLast,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub ma_window: usize,
    pub volatility_window: usize,
    pub duplicate_policy: DuplicatePolicy,
    /// Field delimiter; must be a single ASCII character, otherwise loading fails
    /// with `FormatError::InvalidDelimiter`.
    pub delimiter: char,
    /// chrono format tried before the built-in date formats.
    pub date_format: Option<String>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            ma_window: MA_WINDOW,
            volatility_window: VOLATILITY_WINDOW,
            duplicate_policy: DuplicatePolicy::default(),
            delimiter: ',',
            date_format: None,
        }
    }
}

impl ProcessorConfig {
    /// Parse a `[processor]`-shaped TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Name of the moving-average column, e.g. `MA50`.
    pub fn ma_column(&self) -> String {
        format!("MA{}", self.ma_window)
    }

    pub(crate) fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii)
    }
}
