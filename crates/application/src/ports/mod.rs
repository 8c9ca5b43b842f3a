//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and external
//! systems. Each port is a trait that can be implemented by adapters in
//! the infrastructure layer.

mod credential_store;
mod transport;

pub use credential_store::{CredentialStore, StorageError};
pub use transport::{HttpTransport, TransportError};
