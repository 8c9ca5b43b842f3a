//! Performance metrics endpoints

use std::sync::Arc;

use stride_domain::models::PerformanceSummary;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Service for aggregated performance metrics.
#[derive(Debug, Clone)]
pub struct MetricsService {
    client: Arc<ApiClient>,
}

impl MetricsService {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches the athlete's performance summary.
    ///
    /// # Errors
    ///
    /// Propagates the client's error envelope.
    pub async fn summary(&self) -> ApiResult<PerformanceSummary> {
        self.client.get("/api/v2/performance/summary").await
    }
}
