// File: crates/stock-series/src/export.rs
// Summary: Deterministic CSV serialization of a view (ISO dates, round-trip floats, empty cells for missing).

use crate::date::ISO_DATE;
use crate::series::DATE;
use crate::view::{Cell, PriceSeriesView};

/// File name offered for the processed download.
pub const EXPORT_FILE_NAME: &str = "processed_stock_data.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// A download-ready export: bytes plus the name and MIME type to offer them under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { file_name: EXPORT_FILE_NAME.to_string(), mime: EXPORT_MIME, bytes }
    }
}

/// Serialize `view` as UTF-8 CSV: a `Date` column followed by every series column.
pub fn export(view: &PriceSeriesView<'_>) -> csv::Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(std::iter::once(DATE).chain(view.series().column_names()))?;
    for row in view.rows() {
        let date = row.date().format(ISO_DATE).to_string();
        let cells = row.cells().map(|cell| match cell {
            Cell::Number(v) => format_number(v),
            Cell::Text(s) => s.to_string(),
        });
        wtr.write_record(std::iter::once(date).chain(cells))?;
    }
    wtr.into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::new(e.error().kind(), e.error().to_string())))
}

/// Shortest decimal that parses back to the same f64; missing values are empty.
pub fn format_number(v: f64) -> String {
    if v.is_nan() { String::new() } else { v.to_string() }
}
