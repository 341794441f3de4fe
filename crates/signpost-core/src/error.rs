use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised by a key-value store adapter.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Errors raised by the short-link registry.
///
/// Validation errors are terminal for the invocation and are reported
/// before any store write happens. Store errors carry the underlying
/// adapter message and are never retried.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("unknown short-link domain: {0}")]
    UnknownDomain(String),
    #[error("invalid redirect url: {0}")]
    InvalidUrl(String),
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    #[error("short link not found: {key}")]
    NotFound { key: String },
    #[error("corrupt record at {key}: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
