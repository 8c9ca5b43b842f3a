//! Credential store backends
//!
//! The in-memory store lives in the application crate next to the port;
//! this module provides the encrypted-at-rest file backend.

mod sealed_file;

pub use sealed_file::SealedFileStore;
