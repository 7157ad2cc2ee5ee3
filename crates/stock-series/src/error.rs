// File: crates/stock-series/src/error.rs
// Summary: Error taxonomy for the series pipeline (rejected uploads, rejected ranges, missing session data).

use chrono::NaiveDate;
use thiserror::Error;

/// An upload was rejected. No partial series is ever produced alongside it.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("input is empty or has no header row")]
    Empty,

    #[error("delimiter {0:?} is not a single ASCII character")]
    InvalidDelimiter(char),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("column '{0}' appears more than once in the header")]
    DuplicateColumn(String),

    #[error("line {line}: '{value}' is not a valid date")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        column: String,
        line: u64,
        value: String,
    },

    #[error("date {0} appears more than once")]
    DuplicateDate(NaiveDate),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A date filter with `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("start date {start} is after end date {end}")]
pub struct RangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Errors surfaced by [`Session`](crate::Session).
#[derive(Debug, Error)]
pub enum Error {
    #[error("upload rejected: {0}")]
    Format(#[from] FormatError),

    #[error("range rejected: {0}")]
    Range(#[from] RangeError),

    #[error("no price data has been uploaded")]
    NoData,

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
