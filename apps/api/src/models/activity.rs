use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One assistant question/answer pair from the `assistant_logs` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssistantLogRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}
