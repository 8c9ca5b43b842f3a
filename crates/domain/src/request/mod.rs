//! Request specification types
//!
//! A [`RequestSpec`] is the ephemeral, per-call description of an outgoing
//! API call. It is built by a caller (usually a service module), augmented
//! exactly once by the client with the `Authorization` header, and then
//! handed to the transport for transmission.

mod method;

pub use method::HttpMethod;

use serde::{Deserialize, Serialize};

/// Name of the header carrying the access token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// A single request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Creates a new header.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Description of an outgoing API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the configured base URL (e.g. `/api/v2/program`).
    pub path: String,
    /// Request headers.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Optional JSON body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Per-request timeout override in milliseconds. `None` uses the
    /// client's configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl RequestSpec {
    /// Creates a request with the given method and path.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
            timeout_ms: None,
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request with a JSON body.
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Sets a per-request timeout override.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Returns the value of the first header matching `name`
    /// (case-insensitive), if any.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Injects the `Authorization` header with the raw token value.
    ///
    /// The token is sent without a scheme prefix; the backend expects the
    /// bare value. Called exactly once per request, by the client's
    /// outbound hook.
    pub fn authorize(&mut self, token: &str) {
        self.headers
            .push(Header::new(AUTHORIZATION_HEADER, token));
    }

    /// Returns true if an `Authorization` header is present.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.header(AUTHORIZATION_HEADER).is_some()
    }
}
