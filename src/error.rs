//! Error types for the cricket batting dashboard

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load table {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("invalid year range: {from} is after {to}")]
    InvalidYearRange { from: u16, to: u16 },

    #[error("relation `{name}` has no usable `{column}` values")]
    EmptyDomain {
        name: &'static str,
        column: &'static str,
    },
}
