// File: crates/stock-series/src/lib.rs
// Summary: Stock price series processor; exports the load/derive/filter/summarize/export pipeline and the session.

pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod indicators;
pub mod processor;
pub mod series;
pub mod session;
pub mod stats;
pub mod summary;
pub mod view;

pub use config::{DuplicatePolicy, ProcessorConfig};
pub use error::{Error, FormatError, RangeError};
pub use export::{export, ExportedFile, EXPORT_FILE_NAME, EXPORT_MIME};
pub use processor::Processor;
pub use series::{Column, ColumnData, PriceSeries};
pub use session::Session;
pub use summary::{summarize, ColumnSummary, SummaryStats};
pub use view::{filter, Cell, PriceSeriesView, RowRef, TrendData, TrendPoint};
