//! Session lifecycle support
//!
//! This module provides:
//! - Logout event broadcasting with subscribers invoked in registration
//!   order
//! - An in-memory credential store for tests and session-only use

mod events;
mod memory;

pub use events::{LogoutReason, SessionEvents};
pub use memory::MemoryCredentialStore;
