use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::hub::{
    BrandingAssetRow, CoachingMaterialRow, FeedbackSurveyRow, JobDescriptionRow,
};
use crate::state::AppState;

// ── Job descriptions ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub content: String,
}

/// POST /api/v1/job-descriptions
pub async fn handle_save_job_description(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<JobDescriptionRow>, AppError> {
    let content = req.content.trim().to_owned();
    if content.is_empty() {
        return Err(AppError::Validation(
            "Job description content is required".into(),
        ));
    }

    let id = sqlx::query("INSERT INTO job_descriptions (content, timestamp) VALUES (?, ?)")
        .bind(&content)
        .bind(Utc::now())
        .execute(&state.db)
        .await?
        .last_insert_rowid();

    let row = sqlx::query_as::<_, JobDescriptionRow>("SELECT * FROM job_descriptions WHERE id = ?")
        .bind(id)
        .fetch_one(&state.db)
        .await?;
    Ok(Json(row))
}

/// GET /api/v1/job-descriptions
pub async fn handle_list_job_descriptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobDescriptionRow>>, AppError> {
    let rows = sqlx::query_as::<_, JobDescriptionRow>(
        "SELECT * FROM job_descriptions ORDER BY timestamp DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

// ── Branding assets ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BrandingAssetRequest {
    pub name: String,
    pub content: String,
}

/// POST /api/v1/branding-assets
pub async fn handle_save_branding_asset(
    State(state): State<AppState>,
    Json(req): Json<BrandingAssetRequest>,
) -> Result<Json<BrandingAssetRow>, AppError> {
    if req.name.trim().is_empty() || req.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Asset name and content are both required".into(),
        ));
    }

    let id = sqlx::query("INSERT INTO branding_assets (name, content, timestamp) VALUES (?, ?, ?)")
        .bind(req.name.trim())
        .bind(req.content.trim())
        .bind(Utc::now())
        .execute(&state.db)
        .await?
        .last_insert_rowid();

    let row = sqlx::query_as::<_, BrandingAssetRow>("SELECT * FROM branding_assets WHERE id = ?")
        .bind(id)
        .fetch_one(&state.db)
        .await?;
    Ok(Json(row))
}

/// GET /api/v1/branding-assets
pub async fn handle_list_branding_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<BrandingAssetRow>>, AppError> {
    let rows = sqlx::query_as::<_, BrandingAssetRow>(
        "SELECT * FROM branding_assets ORDER BY timestamp DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

// ── Feedback surveys ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub candidate_name: String,
    pub rating: i64,
    #[serde(default)]
    pub comments: String,
}

/// POST /api/v1/feedback
pub async fn handle_save_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackSurveyRow>, AppError> {
    if req.candidate_name.trim().is_empty() {
        return Err(AppError::Validation("Candidate name is required".into()));
    }
    if !(1..=10).contains(&req.rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 10".into(),
        ));
    }

    let id = sqlx::query(
        "INSERT INTO feedback_surveys (candidate_name, rating, comments, timestamp)
         VALUES (?, ?, ?, ?)",
    )
    .bind(req.candidate_name.trim())
    .bind(req.rating)
    .bind(req.comments.trim())
    .bind(Utc::now())
    .execute(&state.db)
    .await?
    .last_insert_rowid();

    let row = sqlx::query_as::<_, FeedbackSurveyRow>("SELECT * FROM feedback_surveys WHERE id = ?")
        .bind(id)
        .fetch_one(&state.db)
        .await?;
    Ok(Json(row))
}

/// GET /api/v1/feedback
pub async fn handle_list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackSurveyRow>>, AppError> {
    let rows = sqlx::query_as::<_, FeedbackSurveyRow>(
        "SELECT * FROM feedback_surveys ORDER BY timestamp DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

// ── Coaching materials ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CoachingMaterialRequest {
    pub title: String,
    #[serde(default)]
    pub notes: String,
}

/// POST /api/v1/coaching
pub async fn handle_save_coaching_material(
    State(state): State<AppState>,
    Json(req): Json<CoachingMaterialRequest>,
) -> Result<Json<CoachingMaterialRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("Coaching topic is required".into()));
    }

    let id = sqlx::query("INSERT INTO coaching_materials (title, notes, timestamp) VALUES (?, ?, ?)")
        .bind(req.title.trim())
        .bind(req.notes.trim())
        .bind(Utc::now())
        .execute(&state.db)
        .await?
        .last_insert_rowid();

    let row =
        sqlx::query_as::<_, CoachingMaterialRow>("SELECT * FROM coaching_materials WHERE id = ?")
            .bind(id)
            .fetch_one(&state.db)
            .await?;
    Ok(Json(row))
}

/// GET /api/v1/coaching
pub async fn handle_list_coaching_materials(
    State(state): State<AppState>,
) -> Result<Json<Vec<CoachingMaterialRow>>, AppError> {
    let rows = sqlx::query_as::<_, CoachingMaterialRow>(
        "SELECT * FROM coaching_materials ORDER BY timestamp DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}
