//! Stride Application - Authenticated API client core
//!
//! This crate contains the client that every service module goes through:
//! token injection on the way out, error normalization and session
//! teardown on the way in. Adapters for the transport and credential
//! store ports live in the infrastructure crate.

pub mod client;
pub mod error;
pub mod ports;
pub mod services;
pub mod session;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use ports::{CredentialStore, HttpTransport, StorageError, TransportError};
pub use services::{InvoiceService, MetricsService, ProgramService};
pub use session::{LogoutReason, MemoryCredentialStore, SessionEvents};
