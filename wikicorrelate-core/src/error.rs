use thiserror::Error;
use wikicorrelate_scanner::FetchError;

#[derive(Error, Debug)]
pub enum CorrelateError {
    #[error("Page source setup failed: {0}")]
    Source(#[from] FetchError),

    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorrelateError>;
