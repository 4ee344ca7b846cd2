//! Domain Errors
//!
//! Error types for filing operations.

use thiserror::Error;

/// Errors raised by the filing API facade
#[derive(Debug, Error)]
pub enum FilingError {
    /// Caller supplied a missing or empty required value; no request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Backend answered 2xx but the body lacks required fields.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FilingError {
    pub fn invalid_argument<T: AsRef<str>>(message: T) -> Self {
        Self::InvalidArgument(message.as_ref().to_string())
    }

    pub fn invalid_response<T: AsRef<str>>(message: T) -> Self {
        Self::InvalidResponse(message.as_ref().to_string())
    }

    /// HTTP status of the underlying transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Failures reported by a transport implementation
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Backend answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    pub const NOT_FOUND: u16 = 404;

    pub fn status<T: Into<String>>(status: u16, body: T) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::status(Self::NOT_FOUND, "")
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == Self::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(TransportError::not_found().is_not_found());
        assert!(!TransportError::status(500, "boom").is_not_found());
        assert!(!TransportError::Network("refused".into()).is_not_found());
    }

    #[test]
    fn test_status_passthrough() {
        let err = FilingError::from(TransportError::status(400, "{\"errors\":[]}"));
        assert_eq!(err.status(), Some(400));
        assert_eq!(FilingError::invalid_argument("x").status(), None);
    }
}
