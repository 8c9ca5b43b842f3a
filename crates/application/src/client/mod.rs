//! Authenticated API client
//!
//! [`ApiClient`] performs HTTP calls against a single configured base
//! URL with two lifecycle hooks around every call:
//!
//! - **Outbound**: the current access token is read from the credential
//!   store and injected as the `Authorization` header (raw value, no
//!   scheme prefix). A missing token does not block the request; a
//!   failing store read rejects the call before transmission.
//! - **Inbound**: non-2xx responses are normalized into the error
//!   envelope. A 403 additionally tears the session down: the stored
//!   credential pair is deleted (best-effort) and logout subscribers are
//!   notified, before the rejection propagates.
//!
//! The client never retries and never resolves a failed call with a
//! default value. Concurrent calls are not ordered against each other: a
//! 403 cleanup on one call may race another call's token read. That gap
//! is accepted; the store's own lock is the only discipline.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use stride_domain::{ClientConfig, HttpMethod, RequestSpec, ResponseSpec};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::ports::{CredentialStore, HttpTransport, TransportError};
use crate::session::{LogoutReason, SessionEvents};

/// Authenticated HTTP client for the training API.
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn CredentialStore>,
    events: Arc<SessionEvents>,
}

impl ApiClient {
    /// Creates a client over the given transport and credential store.
    #[must_use]
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
            events: Arc::new(SessionEvents::new()),
        }
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Logout event emitter. Subscribe here to react to session loss.
    #[must_use]
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Sends a prepared request through both lifecycle hooks.
    ///
    /// # Errors
    ///
    /// Rejects with [`ApiError::Storage`] if the credential read fails,
    /// [`ApiError::Transport`] if no well-formed response arrived, or
    /// [`ApiError::Http`] for any non-2xx status.
    pub async fn send(&self, mut spec: RequestSpec) -> ApiResult<ResponseSpec> {
        // Outbound hook: a failing store read rejects before transmission.
        if let Some(credential) = self.store.load().await? {
            spec.authorize(&credential.access_token);
        }
        if spec.timeout_ms.is_none() {
            spec.timeout_ms = Some(self.config.timeout_ms);
        }

        debug!(method = %spec.method, path = %spec.path, "sending request");
        let outcome = self.transport.execute(&spec).await;
        self.inspect(outcome).await
    }

    /// Inbound hook: passes 2xx through, normalizes everything else.
    async fn inspect(
        &self,
        outcome: Result<ResponseSpec, TransportError>,
    ) -> ApiResult<ResponseSpec> {
        match outcome {
            Ok(response) if response.is_success() => {
                debug!(status = %response.status, "request succeeded");
                Ok(response)
            }
            Ok(response) => {
                let status = response.status.as_u16();
                let message = response.error_message();
                debug!(status, "request failed");
                if response.status.is_forbidden() {
                    self.invalidate_session().await;
                }
                Err(ApiError::Http { message, status })
            }
            Err(err) => Err(ApiError::Transport(err)),
        }
    }

    /// Session teardown on 403. Cleanup must be attempted before the
    /// rejection propagates, but a failing store must not mask the 403.
    async fn invalidate_session(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear credentials after 403");
        }
        self.events.notify_logout(LogoutReason::SessionInvalidated);
    }

    /// Explicit user sign-out: delete the credential pair and notify
    /// subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the deletion fails. Subscribers
    /// are notified either way.
    pub async fn sign_out(&self) -> ApiResult<()> {
        let result = self.store.clear().await;
        self.events.notify_logout(LogoutReason::UserSignOut);
        result.map_err(ApiError::from)
    }

    /// GET a path and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`]; an undecodable body rejects as a
    /// transport failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(RequestSpec::get(path)).await?;
        decode(&response)
    }

    /// POST a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(HttpMethod::Post, path, body).await
    }

    /// PUT a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(HttpMethod::Put, path, body).await
    }

    /// PATCH a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(HttpMethod::Patch, path, body).await
    }

    /// DELETE a path, discarding any response body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(RequestSpec::new(HttpMethod::Delete, path))
            .await?;
        Ok(())
    }

    async fn send_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)
            .map_err(|e| TransportError::InvalidBody(e.to_string()))?;
        let response = self.send(RequestSpec::new(method, path).with_body(body)).await?;
        decode(&response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(response: &ResponseSpec) -> ApiResult<T> {
    response
        .json()
        .map_err(|e| ApiError::Transport(TransportError::MalformedResponse(e.to_string())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::StorageError;
    use crate::session::MemoryCredentialStore;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use std::time::Duration;
    use stride_domain::{Credential, Environment};

    /// Transport fake that records every request it receives and replays
    /// queued outcomes.
    #[derive(Default)]
    struct FakeTransport {
        outcomes: Mutex<VecDeque<Result<ResponseSpec, TransportError>>>,
        requests: Mutex<Vec<RequestSpec>>,
    }

    impl FakeTransport {
        fn returning(status: u16, body: &str) -> Self {
            let transport = Self::default();
            transport.push_response(status, body);
            transport
        }

        fn push_response(&self, status: u16, body: &str) {
            self.outcomes.lock().unwrap().push_back(Ok(ResponseSpec::new(
                status,
                HashMap::new(),
                body.as_bytes().to_vec(),
                Duration::from_millis(3),
            )));
        }

        fn push_failure(&self, err: TransportError) {
            self.outcomes.lock().unwrap().push_back(Err(err));
        }

        fn seen_requests(&self) -> Vec<RequestSpec> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Other("no queued outcome".to_string())))
        }
    }

    /// Store whose reads fail, for outbound-hook error propagation.
    struct BrokenReadStore;

    #[async_trait]
    impl CredentialStore for BrokenReadStore {
        async fn load(&self) -> Result<Option<Credential>, StorageError> {
            Err(StorageError::Serialization("corrupt".to_string()))
        }
        async fn store(&self, _: &Credential) -> Result<(), StorageError> {
            Ok(())
        }
        async fn clear(&self) -> Result<(), StorageError> {
            Ok(())
        }
    }

    /// Store whose deletes fail, for best-effort 403 cleanup.
    struct BrokenClearStore;

    #[async_trait]
    impl CredentialStore for BrokenClearStore {
        async fn load(&self) -> Result<Option<Credential>, StorageError> {
            Ok(Some(Credential::new("abc123", "refresh")))
        }
        async fn store(&self, _: &Credential) -> Result<(), StorageError> {
            Ok(())
        }
        async fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::new("https://api.example.com", 30_000, Environment::Development).unwrap()
    }

    fn client_with(
        transport: Arc<FakeTransport>,
        store: Arc<dyn CredentialStore>,
    ) -> ApiClient {
        ApiClient::new(config(), transport, store)
    }

    #[tokio::test]
    async fn test_authorization_header_carries_raw_token() {
        let transport = Arc::new(FakeTransport::returning(200, r#"{"id":1}"#));
        let store = Arc::new(MemoryCredentialStore::with_credential(Credential::new(
            "abc123", "refresh",
        )));
        let client = client_with(Arc::clone(&transport), store);

        let value: serde_json::Value = client.get("/api/v2/program").await.unwrap();
        assert_eq!(value["id"], 1);

        let sent = transport.seen_requests();
        assert_eq!(sent.len(), 1);
        // raw token, no "Bearer " prefix
        assert_eq!(sent[0].header("Authorization"), Some("abc123"));
    }

    #[tokio::test]
    async fn test_request_without_token_is_not_blocked() {
        let transport = Arc::new(FakeTransport::returning(200, r#"{"id":1}"#));
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with(Arc::clone(&transport), store);

        let _: serde_json::Value = client.get("/api/v2/program").await.unwrap();

        let sent = transport.seen_requests();
        assert_eq!(sent[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_forbidden_deletes_credentials_and_rejects() {
        let transport = Arc::new(FakeTransport::returning(403, r#"{"message":"Forbidden"}"#));
        let store = Arc::new(MemoryCredentialStore::with_credential(Credential::new(
            "abc123", "refresh",
        )));
        let client = client_with(transport, Arc::clone(&store) as Arc<dyn CredentialStore>);

        let err = client
            .get::<serde_json::Value>("/api/v2/program/5")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), Some("Forbidden"));
        assert!(err.is_session_invalidated());
        // both tokens are gone after the call settles
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_forbidden_notifies_logout_subscribers() {
        let transport = Arc::new(FakeTransport::returning(403, "{}"));
        let store = Arc::new(MemoryCredentialStore::with_credential(Credential::new(
            "abc123", "refresh",
        )));
        let client = client_with(transport, store);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        client
            .events()
            .subscribe(move |reason| seen_clone.lock().unwrap().push(reason));

        let _ = client.get::<serde_json::Value>("/api/v2/program").await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![LogoutReason::SessionInvalidated]
        );
    }

    #[tokio::test]
    async fn test_server_error_leaves_store_untouched() {
        let transport = Arc::new(FakeTransport::returning(500, r#"{"message":"boom"}"#));
        let store = Arc::new(MemoryCredentialStore::with_credential(Credential::new(
            "abc123", "refresh",
        )));
        let client = client_with(transport, Arc::clone(&store) as Arc<dyn CredentialStore>);

        let err = client
            .get::<serde_json::Value>("/api/v2/program")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), Some("boom"));
        // non-403 failures never touch the credential pair
        assert!(store.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_timeout_rejects_without_status() {
        let transport = Arc::new(FakeTransport::default());
        transport.push_failure(TransportError::Timeout { timeout_ms: 30_000 });
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with(transport, store);

        let err = client
            .get::<serde_json::Value>("/api/v2/program")
            .await
            .unwrap_err();

        assert_eq!(err.status(), None);
        assert!(matches!(
            err,
            ApiError::Transport(TransportError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn test_failing_store_read_rejects_before_transmission() {
        let transport = Arc::new(FakeTransport::returning(200, "{}"));
        let client = client_with(Arc::clone(&transport), Arc::new(BrokenReadStore));

        let err = client
            .get::<serde_json::Value>("/api/v2/program")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Storage(_)));
        assert!(transport.seen_requests().is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_failure_does_not_mask_the_403() {
        let transport = Arc::new(FakeTransport::returning(403, r#"{"message":"Forbidden"}"#));
        let client = client_with(transport, Arc::new(BrokenClearStore));

        let err = client
            .get::<serde_json::Value>("/api/v2/program")
            .await
            .unwrap_err();

        // the storage failure during cleanup is logged, not surfaced
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), Some("Forbidden"));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_independent() {
        let transport = Arc::new(FakeTransport::default());
        transport.push_response(200, r#"{"id":1}"#);
        transport.push_response(200, r#"{"id":1}"#);
        let store = Arc::new(MemoryCredentialStore::with_credential(Credential::new(
            "abc123", "refresh",
        )));
        let client = client_with(Arc::clone(&transport), store);

        let first: serde_json::Value = client.get("/api/v2/program").await.unwrap();
        let second: serde_json::Value = client.get("/api/v2/program").await.unwrap();

        assert_eq!(first, second);
        let sent = transport.seen_requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    #[tokio::test]
    async fn test_default_timeout_applied_from_config() {
        let transport = Arc::new(FakeTransport::returning(200, "{}"));
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with(Arc::clone(&transport), store);

        let _: serde_json::Value = client.get("/api/v2/program").await.unwrap();

        assert_eq!(transport.seen_requests()[0].timeout_ms, Some(30_000));
    }

    #[tokio::test]
    async fn test_per_request_timeout_override_wins() {
        let transport = Arc::new(FakeTransport::returning(200, "{}"));
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with(Arc::clone(&transport), store);

        client
            .send(RequestSpec::get("/api/v2/program").with_timeout_ms(5_000))
            .await
            .unwrap();

        assert_eq!(transport.seen_requests()[0].timeout_ms, Some(5_000));
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let transport = Arc::new(FakeTransport::returning(200, r#"{"ok":true}"#));
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with(Arc::clone(&transport), store);

        let _: serde_json::Value = client
            .post("/api/v2/workout", &serde_json::json!({"completed": true}))
            .await
            .unwrap();

        let sent = transport.seen_requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].body.as_ref().unwrap()["completed"], true);
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_transport_failure() {
        let transport = Arc::new(FakeTransport::returning(200, "not json"));
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with(transport, store);

        let err = client
            .get::<serde_json::Value>("/api/v2/program")
            .await
            .unwrap_err();

        assert_eq!(err.status(), None);
        assert!(matches!(
            err,
            ApiError::Transport(TransportError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_out_clears_and_notifies() {
        let transport = Arc::new(FakeTransport::default());
        let store = Arc::new(MemoryCredentialStore::with_credential(Credential::new(
            "abc123", "refresh",
        )));
        let client = client_with(transport, Arc::clone(&store) as Arc<dyn CredentialStore>);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        client
            .events()
            .subscribe(move |reason| seen_clone.lock().unwrap().push(reason));

        client.sign_out().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
        assert_eq!(*seen.lock().unwrap(), vec![LogoutReason::UserSignOut]);
    }
}
