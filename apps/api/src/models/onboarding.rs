use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One generated offer letter from the `onboarding_logs` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OnboardingDocRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub salary: f64,
    pub filepath: String,
    pub timestamp: DateTime<Utc>,
}
