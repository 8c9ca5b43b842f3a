//! Credential store port
//!
//! Defines the interface for the secure, encrypted-at-rest persistence of
//! the session credential pair.

use async_trait::async_trait;
use stride_domain::Credential;

/// Errors that can occur during credential store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Sealing or opening the stored payload failed.
    #[error("crypto error: {0}")]
    Crypto(String),
}

/// Port for persisting the session credential pair.
///
/// The store is shared mutably by every in-flight call's hooks; the only
/// discipline is last write wins. Implementations provide their own
/// interior locking but the client adds no cross-call ordering.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the current credential pair, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn load(&self) -> Result<Option<Credential>, StorageError>;

    /// Persists a credential pair, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn store(&self, credential: &Credential) -> Result<(), StorageError>;

    /// Deletes the stored credential pair. Deleting an absent credential
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn clear(&self) -> Result<(), StorageError>;
}
