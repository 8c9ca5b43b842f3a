//! Client error taxonomy
//!
//! Every failed call surfaces to its caller as an [`ApiError`]. The
//! `status()`/`message()` accessors expose the normalized envelope shape
//! that all service modules consume.

use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// Normalized failure returned to callers of the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a well-formed response. Carries no
    /// status code.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A well-formed response with a non-2xx status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Http {
        /// Error message extracted from the response body, if present.
        message: Option<String>,
        /// The response status code.
        status: u16,
    },

    /// The credential store failed before the request was transmitted.
    #[error("credential store error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// The HTTP status of the failure, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) | Self::Storage(_) => None,
        }
    }

    /// The normalized error message, if one was extracted.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Storage(_) => None,
        }
    }

    /// True if the server signalled session invalidation (HTTP 403).
    #[must_use]
    pub const fn is_session_invalidated(&self) -> bool {
        matches!(self, Self::Http { status: 403, .. })
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
