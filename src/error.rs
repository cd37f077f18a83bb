use thiserror::Error;

/// Error types that can occur while driving a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Filesystem errors while writing run artifacts
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Model discovery returned no models to test
    #[error("no models available to benchmark")]
    NoModels,
}

/// Converts reqwest HTTP errors into BenchErrors
impl From<reqwest::Error> for BenchError {
    fn from(err: reqwest::Error) -> Self {
        BenchError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
