//! Typed service wrappers over the API client
//!
//! Each service is a thin veneer: it names endpoints and payload types,
//! and leaves auth, error normalization, and session teardown entirely
//! to [`crate::ApiClient`]. No caching, no retries.

mod invoices;
mod metrics;
mod programs;

pub use invoices::InvoiceService;
pub use metrics::MetricsService;
pub use programs::ProgramService;
