//! Stride Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest-backed transport, credential store
//! backends, and the environment configuration loader.

pub mod adapters;
pub mod config;
pub mod store;

pub use adapters::ReqwestTransport;
pub use config::{ConfigError, load_config, load_config_from_env};
pub use store::SealedFileStore;
