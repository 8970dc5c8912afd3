//! Row types for the record hubs: job descriptions, branding assets,
//! candidate feedback, and coaching materials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobDescriptionRow {
    pub id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandingAssetRow {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackSurveyRow {
    pub id: i64,
    pub candidate_name: String,
    pub rating: i64,
    pub comments: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoachingMaterialRow {
    pub id: i64,
    pub title: String,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}
