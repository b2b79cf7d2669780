use thiserror::Error;

/// Errors produced by the remote catalog client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport or body-decoding failure from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status code.
    #[error("Catalog responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
