//! HTTP transport port
//!
//! Defines the interface between the client core and the network layer.
//! The transport owns base-URL joining and timeout enforcement; the
//! client core never touches sockets.

use async_trait::async_trait;
use stride_domain::{RequestSpec, ResponseSpec};

/// Transport-level failures: the request never produced a well-formed
/// HTTP response. None of these carry a status code.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request exceeded its timeout with no response received.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_ms: u64,
    },

    /// DNS resolution failed.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error text.
        message: String,
    },

    /// TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The response arrived but could not be read or decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for executing HTTP requests against the configured base URL.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes a request and returns the response, however the server
    /// answered. Non-2xx statuses are NOT errors at this level; only
    /// transport failures are.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no well-formed response was
    /// received.
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError>;
}
