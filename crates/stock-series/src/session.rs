// File: crates/stock-series/src/session.rs
// Summary: One dashboard session: at most one derived series, its display label, and the active date range.

use chrono::NaiveDate;
use log::info;

use crate::config::ProcessorConfig;
use crate::error::{Error, Result};
use crate::export::ExportedFile;
use crate::processor::Processor;
use crate::series::PriceSeries;
use crate::summary::SummaryStats;
use crate::view::{PriceSeriesView, TrendData};

pub const DEFAULT_LABEL: &str = "Sample Stock";

/// Explicit replacement for a process-wide "uploaded file" slot.
///
/// A new upload replaces the series wholesale; a rejected upload or range leaves
/// the previous state in place.
#[derive(Debug)]
pub struct Session {
    processor: Processor,
    label: String,
    series: Option<PriceSeries>,
    range: Option<(NaiveDate, NaiveDate)>,
}

impl Session {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            processor: Processor::new(config),
            label: DEFAULT_LABEL.to_string(),
            series: None,
            range: None,
        }
    }

    pub fn processor(&self) -> &Processor { &self.processor }

    /// Display label only; it never affects computation.
    pub fn label(&self) -> &str { &self.label }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn series(&self) -> Option<&PriceSeries> { self.series.as_ref() }

    /// Active range, defaulting to the full span of the series after each upload.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> { self.range }

    /// Load and derive `input`, replacing any previous series.
    pub fn upload(&mut self, input: &[u8]) -> Result<&PriceSeries> {
        let loaded = self.processor.load(input)?;
        let derived = self.processor.derive_indicators(loaded);
        self.range = derived.span();
        info!("session '{}': series replaced ({} rows)", self.label, derived.len());
        Ok(&*self.series.insert(derived))
    }

    /// (first date, last date) of the current series.
    pub fn default_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.series.as_ref().and_then(PriceSeries::span)
    }

    /// Validate and store a new range, returning the view it selects.
    pub fn select_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<PriceSeriesView<'_>> {
        let series = self.series.as_ref().ok_or(Error::NoData)?;
        let view = self.processor.filter(series, start, end)?;
        self.range = Some((start, end));
        Ok(view)
    }

    /// View for the active range. An empty series yields an empty view.
    pub fn view(&self) -> Result<PriceSeriesView<'_>> {
        let series = self.series.as_ref().ok_or(Error::NoData)?;
        match self.range {
            Some((start, end)) => Ok(self.processor.filter(series, start, end)?),
            None => Ok(PriceSeriesView::full(series)),
        }
    }

    pub fn summary(&self) -> Result<SummaryStats> {
        Ok(self.processor.summarize(&self.view()?))
    }

    pub fn trend(&self) -> Result<TrendData> {
        Ok(self.view()?.trend(&self.label, &self.processor.config().ma_column()))
    }

    pub fn export(&self) -> Result<ExportedFile> {
        Ok(self.processor.export(&self.view()?)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}
