use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One parsed resume as stored in the `resumes` table.
/// `job_title`, `status`, and `score` are pipeline bookkeeping columns with
/// schema defaults; uploads never set them directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: String,
    pub filename: String,
    pub timestamp: DateTime<Utc>,
    pub job_title: String,
    pub status: String,
    pub score: i64,
}
