//! Payload models for the training API
//!
//! Deserialization targets for the service modules. These mirror the wire
//! shapes of the `/api/v2` endpoints and carry no behavior beyond a few
//! display helpers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A training program assigned to the athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program identifier.
    pub id: u64,
    /// Program name.
    #[serde(default)]
    pub name: Option<String>,
    /// Scheduled workouts, newest first.
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

/// A single workout within a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout identifier.
    pub id: u64,
    /// Workout title.
    #[serde(default)]
    pub title: Option<String>,
    /// Scheduled date, if planned.
    #[serde(default)]
    pub scheduled_for: Option<NaiveDate>,
    /// Whether the athlete marked it done.
    #[serde(default)]
    pub completed: bool,
}

/// An invoice issued to the athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice identifier.
    pub id: u64,
    /// Amount in minor currency units (e.g. cents).
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// When the invoice was issued.
    pub issued_at: DateTime<Utc>,
    /// Whether the invoice has been settled.
    #[serde(default)]
    pub paid: bool,
}

impl Invoice {
    /// Formats the amount as a decimal string (e.g. `"12.50 EUR"`).
    #[must_use]
    pub fn display_amount(&self) -> String {
        let whole = self.amount_cents / 100;
        let cents = (self.amount_cents % 100).abs();
        format!("{whole}.{cents:02} {}", self.currency)
    }
}

/// Aggregated performance metrics for the athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Number of completed workouts in the period.
    pub completed_workouts: u32,
    /// Total training time in seconds.
    pub total_duration_secs: u64,
    /// Total distance in meters, if tracked.
    #[serde(default)]
    pub total_distance_m: Option<f64>,
}
