//! Chat API error types

use thiserror::Error;

/// API error with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, message)
    }

    #[must_use]
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Status(code), message)
    }

    #[must_use]
    pub fn decode(code: u16, message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode(code), message)
    }

    /// Whether the server never answered at all
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind == ApiErrorKind::Transport
    }

    /// The HTTP status the server answered with, if it answered
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Transport => None,
            ApiErrorKind::Status(code) | ApiErrorKind::Decode(code) => Some(code),
        }
    }
}

/// Error classification for outcome mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server never answered: connect failure, timeout, dropped socket
    Transport,
    /// The server answered with a non-success status
    Status(u16),
    /// The server answered 2xx but the body was not a usable reply
    Decode(u16),
}
