use search_core::SearchError;
use thiserror::Error;

pub(crate) type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Search rejected the input: {0}")]
    Search(#[from] SearchError),
    #[error("Failed to encode the result as JSON, more details: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
}
