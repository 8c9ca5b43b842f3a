//! In-memory credential store
//!
//! Thread-safe store holding the single session credential pair without
//! persistence. Suitable for tests and for hosts that keep the session
//! in memory only.

use std::sync::Arc;

use async_trait::async_trait;
use stride_domain::Credential;
use tokio::sync::RwLock;

use crate::ports::{CredentialStore, StorageError};

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    credential: Arc<RwLock<Option<Credential>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a credential pair.
    #[must_use]
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Arc::new(RwLock::new(Some(credential))),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<Credential>, StorageError> {
        Ok(self.credential.read().await.clone())
    }

    async fn store(&self, credential: &Credential) -> Result<(), StorageError> {
        *self.credential.write().await = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.credential.write().await = None;
        Ok(())
    }
}
