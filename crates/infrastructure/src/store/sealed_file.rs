//! Encrypted-at-rest credential file store.
//!
//! Persists the session credential pair as a ChaCha20-Poly1305 sealed
//! JSON payload. The 32-byte key is supplied by the host application
//! (e.g. from the platform keychain); this store never writes plaintext
//! token material to disk.
//!
//! File layout: `nonce (12 bytes) || ciphertext+tag`. A fresh random
//! nonce is drawn for every write.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use ring::aead::{Aad, CHACHA20_POLY1305, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use stride_application::ports::{CredentialStore, StorageError};
use stride_domain::Credential;

/// Required key length in bytes.
pub const KEY_LEN: usize = 32;

/// What actually goes into the sealed file.
#[derive(Serialize, Deserialize)]
struct SealedPayload {
    credential: Credential,
    updated_at: DateTime<Utc>,
}

/// File-backed credential store sealed with ChaCha20-Poly1305.
pub struct SealedFileStore {
    path: PathBuf,
    key: LessSafeKey,
    rng: SystemRandom,
}

impl SealedFileStore {
    /// Creates a store writing to `path`, sealed with the given 32-byte
    /// key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Crypto` if the key has the wrong length.
    pub fn new(path: impl Into<PathBuf>, key: &[u8]) -> Result<Self, StorageError> {
        let unbound = UnboundKey::new(&CHACHA20_POLY1305, key)
            .map_err(|_| StorageError::Crypto(format!("key must be {KEY_LEN} bytes")))?;
        Ok(Self {
            path: path.into(),
            key: LessSafeKey::new(unbound),
            rng: SystemRandom::new(),
        })
    }

    /// Creates a store from a base64-encoded key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Crypto` if the key is not valid base64 or
    /// has the wrong decoded length.
    pub fn from_base64_key(path: impl Into<PathBuf>, key_b64: &str) -> Result<Self, StorageError> {
        let key = BASE64
            .decode(key_b64)
            .map_err(|e| StorageError::Crypto(format!("invalid base64 key: {e}")))?;
        Self::new(path, &key)
    }

    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, StorageError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| StorageError::Crypto("nonce generation failed".to_string()))?;
        let nonce = Nonce::assume_unique_for_key(nonce_bytes);

        let mut sealed = plaintext.to_vec();
        self.key
            .seal_in_place_append_tag(nonce, Aad::empty(), &mut sealed)
            .map_err(|_| StorageError::Crypto("sealing failed".to_string()))?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn open(&self, data: &[u8]) -> Result<Vec<u8>, StorageError> {
        if data.len() < NONCE_LEN + CHACHA20_POLY1305.tag_len() {
            return Err(StorageError::Crypto("sealed file truncated".to_string()));
        }
        let (nonce_bytes, sealed) = data.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
            .map_err(|_| StorageError::Crypto("invalid nonce".to_string()))?;

        let mut buf = sealed.to_vec();
        let plain = self
            .key
            .open_in_place(nonce, Aad::empty(), &mut buf)
            .map_err(|_| StorageError::Crypto("failed to open sealed credential".to_string()))?;
        Ok(plain.to_vec())
    }
}

#[async_trait]
impl CredentialStore for SealedFileStore {
    async fn load(&self) -> Result<Option<Credential>, StorageError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e)),
        };

        let plain = self.open(&data)?;
        let payload: SealedPayload = serde_json::from_slice(&plain)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(payload.credential))
    }

    async fn store(&self, credential: &Credential) -> Result<(), StorageError> {
        let payload = SealedPayload {
            credential: credential.clone(),
            updated_at: Utc::now(),
        };
        let plain = serde_json::to_vec(&payload)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let sealed = self.seal(&plain)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, sealed).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

impl std::fmt::Debug for SealedFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedFileStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
