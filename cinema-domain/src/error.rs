use thiserror::Error;

/// Failures from the storage substrate. Each variant carries the document
/// path so operators can tell the two collections apart in logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode document")]
    Encode(#[from] serde_json::Error),
}

/// Operation-level failures. All of these are recoverable at the request
/// boundary; none should take the process down.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more field-level rule violations, all collected.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// The named entity ("movie" or "booking") does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}
