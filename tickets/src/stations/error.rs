//! Station feed error types.

/// Errors that can occur while loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed server returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to read a local feed snapshot
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
