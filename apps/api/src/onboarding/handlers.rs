use std::path::PathBuf;

use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::onboarding::OnboardingDocRow;
use crate::onboarding::docgen::write_offer_letter;
use crate::state::AppState;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Deserialize)]
pub struct OfferRequest {
    pub name: String,
    pub email: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub salary: f64,
}

/// POST /api/v1/onboarding/docs
/// Generates an offer letter, stores it on disk, and records the row.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<OfferRequest>,
) -> Result<Json<OnboardingDocRow>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Candidate name is required".into()));
    }
    if req.position.trim().is_empty() {
        return Err(AppError::Validation("Position title is required".into()));
    }
    if req.salary <= 0.0 {
        return Err(AppError::Validation("Salary must be positive".into()));
    }

    let now = Utc::now();
    let dir = PathBuf::from(&state.config.docs_dir);
    let (name, position, start_date, salary) =
        (req.name.clone(), req.position.clone(), req.start_date, req.salary);

    let path = tokio::task::spawn_blocking(move || {
        write_offer_letter(&dir, &name, &position, start_date, salary, now)
    })
    .await
    .map_err(|e| anyhow::anyhow!("Offer letter task failed: {e}"))??;

    let filepath = path.to_string_lossy().into_owned();
    let id = sqlx::query(
        "INSERT INTO onboarding_logs (name, email, position, start_date, salary, filepath, timestamp)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.position)
    .bind(req.start_date)
    .bind(req.salary)
    .bind(&filepath)
    .bind(now)
    .execute(&state.db)
    .await?
    .last_insert_rowid();

    info!("Generated offer letter {id} for '{}' at {filepath}", req.name);

    let row = sqlx::query_as::<_, OnboardingDocRow>("SELECT * FROM onboarding_logs WHERE id = ?")
        .bind(id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(row))
}

/// GET /api/v1/onboarding/docs
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<OnboardingDocRow>>, AppError> {
    let rows = sqlx::query_as::<_, OnboardingDocRow>(
        "SELECT * FROM onboarding_logs ORDER BY timestamp DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/onboarding/docs/:id/download
/// Streams the stored DOCX back to the client.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = sqlx::query_as::<_, OnboardingDocRow>("SELECT * FROM onboarding_logs WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Onboarding document {id} not found")))?;

    let data = tokio::fs::read(&row.filepath).await.map_err(|e| {
        AppError::NotFound(format!("Stored file for document {id} is unavailable: {e}"))
    })?;

    let filename = std::path::Path::new(&row.filepath)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("offer_letter.docx");
    let headers = [
        (CONTENT_TYPE, DOCX_MIME.to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, data))
}
