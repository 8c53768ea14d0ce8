//! Error types shared across the console

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown tab: {0} (expected dashboard, content, editor or media)")]
    UnknownTab(String),

    #[error("unknown status: {0} (expected all, draft, published or scheduled)")]
    UnknownStatus(String),

    #[error("unknown export format: {0} (expected csv or json)")]
    UnknownExportFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
