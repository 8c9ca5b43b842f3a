//! Stride Domain - Core types for the training API client
//!
//! This crate defines the domain model shared by the client core and its
//! adapters. All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod credential;
pub mod error;
pub mod models;
pub mod request;
pub mod response;

pub use config::{ClientConfig, Environment};
pub use credential::Credential;
pub use error::{DomainError, DomainResult};
pub use request::{Header, HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
