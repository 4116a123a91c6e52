//! Error taxonomy for the transformation pipeline.
//!
//! The set is closed: every failure a caller can observe is one of these
//! variants, and each request terminates in exactly one of them (or success).
//! Nothing here is retried internally — recovery is a caller concern.

use thiserror::Error;

// ---------------------------------------------------------------------------
// TransformError
// ---------------------------------------------------------------------------

/// Errors that can occur while transforming text through the backend.
#[derive(Debug, Error)]
pub enum TransformError {
    /// No API key has been configured yet.
    #[error("API key is not configured")]
    NotConfigured,

    /// The input text was empty — nothing to send.
    #[error("input text is empty")]
    EmptyInput,

    /// The configured base URL could not be parsed.
    #[error("invalid API base URL")]
    InvalidEndpoint,

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The backend rejected the API key (HTTP 401).
    #[error("API key rejected (unauthorized)")]
    Unauthorized,

    /// The backend rate limit was hit (HTTP 429).
    #[error("API rate limit exceeded")]
    RateLimited,

    /// The backend reported a server-side failure (HTTP 5xx).
    #[error("API server error (status {0})")]
    Server(u16),

    /// The completion envelope carried no message content.
    #[error("API response contained no content")]
    NoContent,

    /// The model's output could not be decoded into the expected JSON field.
    #[error("failed to decode model output: {0}")]
    MalformedJson(String),

    /// The backend returned an error envelope with a message.
    #[error("API error: {0}")]
    Api(String),

    /// The request did not complete within the deadline.
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for TransformError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransformError::Timeout
        } else {
            TransformError::Transport(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            TransformError::NotConfigured.to_string(),
            "API key is not configured"
        );
        assert_eq!(TransformError::EmptyInput.to_string(), "input text is empty");
        assert_eq!(TransformError::Timeout.to_string(), "request timed out");
        assert_eq!(
            TransformError::Server(503).to_string(),
            "API server error (status 503)"
        );
        assert_eq!(
            TransformError::Api("quota exhausted".into()).to_string(),
            "API error: quota exhausted"
        );
    }

    #[test]
    fn malformed_json_carries_detail() {
        let err = TransformError::MalformedJson("missing field `result`".into());
        assert!(err.to_string().contains("missing field `result`"));
    }
}
