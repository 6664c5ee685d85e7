use std::path::PathBuf;

use thiserror::Error;

use crate::http_client::HttpError;
use crate::AssetId;

/// Validation errors for caller-supplied identifiers and dates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no market is present for '{value}', expected one of {}", AssetId::known_names())]
    UnknownSource { value: String },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

/// Failures while fetching or parsing a price feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to fetch feed from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("feed {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read feed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("feed header must name at least a date and a price column")]
    MissingHeader,

    #[error("feed header has no '{column}' column")]
    MissingColumn { column: String },

    #[error("line {line}: invalid date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: invalid price '{value}'")]
    InvalidPrice { line: u64, value: String },
}

/// Top-level error type for source construction.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}
