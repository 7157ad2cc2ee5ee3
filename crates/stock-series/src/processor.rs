// File: crates/stock-series/src/processor.rs
// Summary: The series pipeline: parse CSV -> index by date -> derive indicators -> filter -> summarize/export.

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::config::{DuplicatePolicy, ProcessorConfig};
use crate::date::parse_date;
use crate::error::{FormatError, RangeError};
use crate::export::{export, ExportedFile};
use crate::indicators::{pct_change, rolling_mean, rolling_std};
use crate::series::{Column, PriceSeries, DATE, REQUIRED_COLUMNS, VOLATILITY};
use crate::summary::{summarize, SummaryStats};
use crate::view::{self, PriceSeriesView};

#[derive(Clone, Debug, Default)]
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig { &self.config }

    /// Parse CSV bytes into a date-sorted series without derived columns.
    pub fn load(&self, input: &[u8]) -> Result<PriceSeries, FormatError> {
        let delimiter = self
            .config
            .delimiter_byte()
            .ok_or(FormatError::InvalidDelimiter(self.config.delimiter))?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = rdr.headers()?.clone();
        if headers.iter().all(str::is_empty) {
            return Err(FormatError::Empty);
        }
        let layout = HeaderLayout::resolve(&headers)?;
        debug!("header layout: {:?}", layout.names);

        let date_format = self.config.date_format.as_deref();
        let mut dates = Vec::new();
        let mut lines = Vec::new();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); layout.names.len()];
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let raw = record.get(layout.date).unwrap_or_default();
            let date = parse_date(raw, date_format)
                .ok_or_else(|| FormatError::InvalidDate { line, value: raw.to_string() })?;
            dates.push(date);
            lines.push(line);
            for (column, &idx) in cells.iter_mut().zip(&layout.indices) {
                column.push(record.get(idx).unwrap_or_default().to_string());
            }
        }

        let order = sorted_unique_rows(&dates, self.config.duplicate_policy)?;
        let dates: Vec<NaiveDate> = order.iter().map(|&i| dates[i]).collect();
        let columns = layout
            .names
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| typed_column(name, raw, &lines, &order))
            .collect::<Result<Vec<_>, _>>()?;

        let series = PriceSeries::from_parts(dates, columns);
        match series.span() {
            Some((first, last)) => info!(
                "loaded {} rows x {} columns, {} to {}",
                series.len(),
                series.columns().len(),
                first,
                last
            ),
            None => info!("loaded an empty series"),
        }
        Ok(series)
    }

    /// Append (or refresh) the moving-average and volatility columns.
    pub fn derive_indicators(&self, mut series: PriceSeries) -> PriceSeries {
        let close = series.close();
        let ma = rolling_mean(close, self.config.ma_window);
        let volatility = rolling_std(&pct_change(close), self.config.volatility_window);
        series.set_numeric(&self.config.ma_column(), ma);
        series.set_numeric(VOLATILITY, volatility);
        series
    }

    pub fn filter<'a>(
        &self,
        series: &'a PriceSeries,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeriesView<'a>, RangeError> {
        view::filter(series, start, end)
    }

    pub fn summarize(&self, view: &PriceSeriesView<'_>) -> SummaryStats {
        summarize(view)
    }

    pub fn export(&self, view: &PriceSeriesView<'_>) -> csv::Result<ExportedFile> {
        export(view).map(ExportedFile::new)
    }
}

/// Column positions in the uploaded header.
#[derive(Debug)]
struct HeaderLayout {
    date: usize,
    /// Non-date columns: header index and stored name.
    indices: Vec<usize>,
    names: Vec<String>,
}

impl HeaderLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, FormatError> {
        let mut date = None;
        let mut indices = Vec::new();
        let mut names: Vec<String> = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for (i, raw) in headers.iter().enumerate() {
            let name = match REQUIRED_COLUMNS.iter().find(|r| r.eq_ignore_ascii_case(raw)) {
                Some(canonical) => canonical.to_string(),
                None if raw.is_empty() => format!("Unnamed: {i}"),
                None => raw.to_string(),
            };
            if !seen.insert(name.clone()) {
                return Err(FormatError::DuplicateColumn(name));
            }
            if name == DATE {
                date = Some(i);
            } else {
                indices.push(i);
                names.push(name);
            }
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|r| !seen.contains(**r))
            .map(|r| r.to_string())
            .collect();
        match date {
            Some(date) if missing.is_empty() => Ok(Self { date, indices, names }),
            _ => Err(FormatError::MissingColumns(missing)),
        }
    }
}

/// Row order that sorts `dates` ascending (stable), with duplicates resolved by `policy`.
fn sorted_unique_rows(dates: &[NaiveDate], policy: DuplicatePolicy) -> Result<Vec<usize>, FormatError> {
    let mut order: Vec<usize> = (0..dates.len()).collect();
    order.sort_by_key(|&i| dates[i]);

    let mut kept: Vec<usize> = Vec::with_capacity(order.len());
    let mut dropped = 0usize;
    for i in order {
        match kept.last() {
            Some(&prev) if dates[prev] == dates[i] => {
                dropped += 1;
                match policy {
                    DuplicatePolicy::Reject => return Err(FormatError::DuplicateDate(dates[i])),
                    DuplicatePolicy::KeepFirst => {}
                    DuplicatePolicy::KeepLast => {
                        if let Some(slot) = kept.last_mut() {
                            *slot = i;
                        }
                    }
                }
            }
            _ => kept.push(i),
        }
    }
    if dropped > 0 {
        warn!("dropped {dropped} row(s) with duplicate dates ({policy:?})");
    }
    Ok(kept)
}

/// Numeric when every non-empty cell parses as f64; required price columns must be numeric.
fn typed_column(name: String, raw: Vec<String>, lines: &[u64], order: &[usize]) -> Result<Column, FormatError> {
    let parsed: Result<Vec<f64>, usize> = raw
        .iter()
        .enumerate()
        .map(|(i, s)| if s.is_empty() { Ok(f64::NAN) } else { s.parse::<f64>().map_err(|_| i) })
        .collect();

    match parsed {
        Ok(values) => Ok(Column::numeric(name, order.iter().map(|&i| values[i]).collect())),
        Err(bad) if REQUIRED_COLUMNS.contains(&name.as_str()) => Err(FormatError::InvalidNumber {
            line: lines[bad],
            value: raw[bad].clone(),
            column: name,
        }),
        Err(bad) => {
            debug!("column '{name}' kept as text (line {}: '{}')", lines[bad], raw[bad]);
            let mut raw = raw;
            let values = order.iter().map(|&i| std::mem::take(&mut raw[i])).collect();
            Ok(Column::text(name, values))
        }
    }
}
