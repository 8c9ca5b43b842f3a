//! Stride API Client - Smoke-test entry point
//!
//! Wires config, credential store, transport, and client together and
//! performs a single GET against the configured backend:
//!
//! ```text
//! STRIDE_API_BASE_URL=https://api.example.com \
//! STRIDE_ACCESS_TOKEN=abc123 stride /api/v2/program
//! ```

use std::sync::Arc;

use stride_application::{ApiClient, CredentialStore, MemoryCredentialStore};
use stride_domain::Credential;
use stride_infrastructure::{ReqwestTransport, SealedFileStore, load_config_from_env};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = load_config_from_env()?;
    info!(base_url = %config.base_url, is_production = config.is_production, "loaded configuration");

    let store = build_store().await?;
    let transport = Arc::new(ReqwestTransport::new(&config)?);
    let client = ApiClient::new(config, transport, store);

    client.events().subscribe(|reason| {
        info!(?reason, "session ended");
    });

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/api/v2/program".to_string());

    match client.get::<serde_json::Value>(&path).await {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(err) => {
            eprintln!(
                "request failed: {err} (status: {:?}, message: {:?})",
                err.status(),
                err.message()
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Picks the credential store backend.
///
/// With `STRIDE_STORE_KEY` (base64, 32 bytes) set, credentials are
/// sealed to `credential.sealed` in the working directory; otherwise an
/// in-memory store seeded from `STRIDE_ACCESS_TOKEN`/
/// `STRIDE_REFRESH_TOKEN` is used.
async fn build_store() -> Result<Arc<dyn CredentialStore>, Box<dyn std::error::Error>> {
    if let Ok(key_b64) = std::env::var("STRIDE_STORE_KEY") {
        let store = SealedFileStore::from_base64_key("credential.sealed", &key_b64)?;
        return Ok(Arc::new(store));
    }

    let store = MemoryCredentialStore::new();
    if let Ok(access) = std::env::var("STRIDE_ACCESS_TOKEN") {
        let refresh = std::env::var("STRIDE_REFRESH_TOKEN").unwrap_or_default();
        store.store(&Credential::new(access, refresh)).await?;
    }
    Ok(Arc::new(store))
}
