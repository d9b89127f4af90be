use std::fmt;

/// Custom error type for Physitrack operations
///
/// A non-2xx HTTP status is not an error: it comes back as a
/// [`Response`](crate::Response) whose `succeeded()` is false.
#[derive(Debug)]
pub enum PhysitrackError {
    /// Transport failure (connect, timeout, body read)
    Http(reqwest::Error),
    /// Missing or blank credential
    Config(String),
    /// Payload lookup for a key the response does not carry
    NoSuchAttribute(String),
    /// JSON encoding or typed-read error
    Json(String),
    /// Failed to read or parse credentials file
    Credentials(String),
}

impl fmt::Display for PhysitrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysitrackError::Http(e) => write!(f, "HTTP request failed: {}", e),
            PhysitrackError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PhysitrackError::NoSuchAttribute(key) => {
                write!(f, "No such attribute in response payload: '{}'", key)
            }
            PhysitrackError::Json(msg) => write!(f, "JSON error: {}", msg),
            PhysitrackError::Credentials(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PhysitrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhysitrackError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PhysitrackError {
    fn from(err: reqwest::Error) -> Self {
        PhysitrackError::Http(err)
    }
}

impl From<serde_json::Error> for PhysitrackError {
    fn from(err: serde_json::Error) -> Self {
        PhysitrackError::Json(err.to_string())
    }
}

impl From<std::io::Error> for PhysitrackError {
    fn from(err: std::io::Error) -> Self {
        PhysitrackError::Credentials(err.to_string())
    }
}

/// Result type alias for Physitrack operations
pub type Result<T> = std::result::Result<T, PhysitrackError>;
