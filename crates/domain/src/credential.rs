//! Credential pair for the training API session
//!
//! A [`Credential`] is created on successful login, read on every outbound
//! request, and deleted on logout — either internally when the server
//! signals session invalidation, or externally on explicit user sign-out.
//! At most one active pair exists at a time.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair for the current session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The access token sent on every request.
    pub access_token: String,
    /// The refresh token. Held alongside the access token and deleted with
    /// it; the client performs no rotation.
    pub refresh_token: String,
}

impl Credential {
    /// Creates a new credential pair.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Returns a short preview of the access token (first 8 chars) for
    /// display and logging.
    #[must_use]
    pub fn access_token_preview(&self) -> String {
        preview(&self.access_token)
    }
}

fn preview(token: &str) -> String {
    if token.len() > 12 {
        format!("{}...", &token[..8])
    } else {
        token.to_string()
    }
}

// Token material must not leak through debug formatting.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &preview(&self.access_token))
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}
