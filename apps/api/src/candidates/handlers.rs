use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::document::{extract_text, DocumentKind};
use crate::extraction::fields::{extract, CandidateRecord};
use crate::models::candidate::ResumeRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: i64,
    pub filename: String,
    pub record: CandidateRecord,
}

/// POST /api/v1/candidates
/// Multipart upload: decodes the `file` part, extracts candidate fields,
/// and appends a row to `resumes`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("File part is missing a filename".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Multipart field 'file' is required".into()))?;

    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        AppError::Validation(format!(
            "Unsupported file type for '{filename}' (expected .pdf or .docx)"
        ))
    })?;

    // PDF/DOCX decoding is CPU-bound; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &data))
        .await
        .map_err(|e| anyhow::anyhow!("Document decode task failed: {e}"))??;

    let record = extract(&text);

    let id = sqlx::query(
        "INSERT INTO resumes (name, email, phone, skills, experience, filename, timestamp)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.name)
    .bind(&record.email)
    .bind(&record.phone)
    .bind(&record.skills)
    .bind(&record.experience)
    .bind(&filename)
    .bind(Utc::now())
    .execute(&state.db)
    .await?
    .last_insert_rowid();

    info!("Saved resume {id} for '{}' ({filename})", record.name);

    Ok(Json(UploadResponse {
        id,
        filename,
        record,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ResumeSearchQuery {
    pub search: Option<String>,
}

/// GET /api/v1/candidates?search=
/// Lists stored resumes, optionally filtered with a LIKE match across
/// name, email, skills, and experience.
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ResumeSearchQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = match params.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            let pattern = format!("%{term}%");
            sqlx::query_as::<_, ResumeRow>(
                "SELECT * FROM resumes
                 WHERE name LIKE ? OR email LIKE ? OR skills LIKE ? OR experience LIKE ?
                 ORDER BY timestamp DESC",
            )
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&state.db)
            .await?
        }
        _ => {
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes ORDER BY timestamp DESC")
                .fetch_all(&state.db)
                .await?
        }
    };

    Ok(Json(rows))
}
