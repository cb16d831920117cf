//! Error types for the submission pipeline

use thiserror::Error;

/// Errors produced while delivering one submission attempt
///
/// The `Display` impl is the transport-level description used when the
/// server did not supply its own error message; the
/// `Server::message` field carries the server's message when one was
/// present in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The server answered with a non-success status
    #[error("request failed with status code {status}")]
    Server {
        /// HTTP status code of the response
        status: u16,
        /// Optional `message` field extracted from the error body
        message: Option<String>,
        /// Raw response body, for diagnostics
        body: String,
    },

    /// The request never completed (connect failure, timeout, bad URL)
    #[error("network error: {0}")]
    Network(String),

    /// The multipart body could not be assembled
    #[error("could not assemble multipart payload: {0}")]
    Payload(String),

    /// The HTTP client could not be constructed
    #[error("failed to construct HTTP client: {0}")]
    Client(String),
}

impl SendError {
    /// The server-provided error message, when the response body carried
    /// one
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The HTTP status code, for server-reported failures
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_description_mentions_status() {
        let err = SendError::Server {
            status: 400,
            message: Some("Invalid subject".to_string()),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "request failed with status code 400");
        assert_eq!(err.server_message(), Some("Invalid subject"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_network_error_has_no_server_message() {
        let err = SendError::Network("connection refused".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
