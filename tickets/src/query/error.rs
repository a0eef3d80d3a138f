//! Ticket query error types.

use std::fmt;

/// Errors from fetching ticket availability.
///
/// All of these end the invocation; there are no retries.
#[derive(Debug)]
pub enum QueryError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body did not have the expected JSON shape
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Saved response file could not be read
    Replay { path: String, message: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Http(e) => write!(f, "HTTP error: {e}"),
            QueryError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            QueryError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            QueryError::Replay { path, message } => {
                write!(f, "failed to read saved response {path}: {message}")
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Http(err)
    }
}

/// A single train record that could not be decoded.
///
/// Decode errors never abort a batch; the record is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Too few `|`-separated fields
    #[error("malformed record: expected at least {expected} fields, got {fields}")]
    MalformedRecord { fields: usize, expected: usize },

    /// Duration field is not "H:MM"
    #[error("malformed duration: {0:?}")]
    MalformedDuration(String),
}
