//! Invoice endpoints

use std::sync::Arc;

use stride_domain::models::Invoice;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Service for billing invoices.
#[derive(Debug, Clone)]
pub struct InvoiceService {
    client: Arc<ApiClient>,
}

impl InvoiceService {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists the athlete's invoices.
    ///
    /// # Errors
    ///
    /// Propagates the client's error envelope.
    pub async fn list(&self) -> ApiResult<Vec<Invoice>> {
        self.client.get("/api/v2/invoices").await
    }

    /// Fetches a single invoice by id.
    ///
    /// # Errors
    ///
    /// Propagates the client's error envelope.
    pub async fn detail(&self, id: u64) -> ApiResult<Invoice> {
        self.client.get(&format!("/api/v2/invoices/{id}")).await
    }
}
