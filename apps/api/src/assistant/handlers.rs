use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::activity::AssistantLogRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/assistant/ask
/// Forwards the question to the LLM and records the exchange.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = req.question.trim().to_owned();
    if question.is_empty() {
        return Err(AppError::Validation("Question must not be empty".into()));
    }

    let answer = state.llm.ask(&question).await?;

    sqlx::query("INSERT INTO assistant_logs (question, answer, timestamp) VALUES (?, ?, ?)")
        .bind(&question)
        .bind(&answer)
        .bind(Utc::now())
        .execute(&state.db)
        .await?;

    Ok(Json(AskResponse { question, answer }))
}

/// GET /api/v1/assistant/log
/// Returns the Q&A history, newest first.
pub async fn handle_log(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssistantLogRow>>, AppError> {
    let rows = sqlx::query_as::<_, AssistantLogRow>(
        "SELECT * FROM assistant_logs ORDER BY timestamp DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}
