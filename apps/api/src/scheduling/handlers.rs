//! Interview scheduling. The upstream calendar integration is a pass-through:
//! the handler validates the form and hands back the meeting link the
//! recruiter supplied, or the configured default when none was given.

use axum::{extract::State, Json};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub candidate_name: String,
    pub candidate_email: String,
    pub position_title: String,
    pub interview_date: NaiveDate,
    pub interview_time: NaiveTime,
    pub meeting_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub candidate_name: String,
    pub position_title: String,
    pub scheduled_for: String,
    pub join_link: String,
}

/// POST /api/v1/interviews/schedule
pub async fn handle_schedule(
    State(state): State<AppState>,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    if req.candidate_name.trim().is_empty() {
        return Err(AppError::Validation("Candidate name is required".into()));
    }
    if req.candidate_email.trim().is_empty() {
        return Err(AppError::Validation("Candidate email is required".into()));
    }

    let join_link = resolve_meeting_link(
        req.meeting_link.as_deref(),
        &state.config.default_meeting_link,
    );
    let scheduled_for = format!(
        "{} {}",
        req.interview_date,
        req.interview_time.format("%H:%M")
    );

    info!(
        "Scheduled interview for '{}' ({}) at {scheduled_for}",
        req.candidate_name, req.position_title
    );

    Ok(Json(ScheduleResponse {
        candidate_name: req.candidate_name,
        position_title: req.position_title,
        scheduled_for,
        join_link,
    }))
}

/// Returns the provided link, or the default when it is absent or blank.
pub fn resolve_meeting_link(provided: Option<&str>, default_link: &str) -> String {
    match provided.map(str::trim) {
        Some(link) if !link.is_empty() => link.to_owned(),
        _ => default_link.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "https://teams.microsoft.com/l/meetup-join/abc123";

    #[test]
    fn test_provided_link_wins() {
        let link = resolve_meeting_link(Some("https://example.com/meet/42"), DEFAULT);
        assert_eq!(link, "https://example.com/meet/42");
    }

    #[test]
    fn test_missing_link_falls_back_to_default() {
        assert_eq!(resolve_meeting_link(None, DEFAULT), DEFAULT);
    }

    #[test]
    fn test_blank_link_falls_back_to_default() {
        assert_eq!(resolve_meeting_link(Some("   "), DEFAULT), DEFAULT);
    }
}
