//! Training program endpoints

use std::sync::Arc;

use stride_domain::models::{Program, Workout};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Service for training programs and workouts.
#[derive(Debug, Clone)]
pub struct ProgramService {
    client: Arc<ApiClient>,
}

impl ProgramService {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches the athlete's current program.
    ///
    /// # Errors
    ///
    /// Propagates the client's error envelope.
    pub async fn current(&self) -> ApiResult<Program> {
        self.client.get("/api/v2/program").await
    }

    /// Fetches a program by id.
    ///
    /// # Errors
    ///
    /// Propagates the client's error envelope.
    pub async fn detail(&self, id: u64) -> ApiResult<Program> {
        self.client.get(&format!("/api/v2/program/{id}")).await
    }

    /// Marks a workout as completed.
    ///
    /// # Errors
    ///
    /// Propagates the client's error envelope.
    pub async fn complete_workout(&self, id: u64) -> ApiResult<Workout> {
        self.client
            .patch(
                &format!("/api/v2/workout/{id}"),
                &serde_json::json!({ "completed": true }),
            )
            .await
    }
}
