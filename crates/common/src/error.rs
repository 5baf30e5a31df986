//! Error types for the todo client

use thiserror::Error;

/// Failure of a single request/response cycle with the backend.
///
/// All variants are handled identically by callers; the split exists so the
/// console log says what actually went wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected status: HTTP {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Status(500).to_string(),
            "Unexpected status: HTTP 500"
        );
        assert_eq!(
            Error::Transport("connection refused".to_string()).to_string(),
            "Request failed: connection refused"
        );
    }
}
