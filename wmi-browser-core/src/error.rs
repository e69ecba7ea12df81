//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The search text is not a valid regular expression
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// Connection-level failure (refused, DNS, TLS handshake, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The endpoint answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body is not a JSON array of records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Source configuration is unusable (bad URL, client build failure)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Core Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
