pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{assistant, candidates, hub, onboarding, scheduling};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assistant
        .route(
            "/api/v1/assistant/ask",
            post(assistant::handlers::handle_ask),
        )
        .route(
            "/api/v1/assistant/log",
            get(assistant::handlers::handle_log),
        )
        // Candidates / resumes
        .route(
            "/api/v1/candidates",
            post(candidates::handlers::handle_upload).get(candidates::handlers::handle_list),
        )
        // Interview scheduling
        .route(
            "/api/v1/interviews/schedule",
            post(scheduling::handlers::handle_schedule),
        )
        // Onboarding documents
        .route(
            "/api/v1/onboarding/docs",
            post(onboarding::handlers::handle_generate).get(onboarding::handlers::handle_list),
        )
        .route(
            "/api/v1/onboarding/docs/:id/download",
            get(onboarding::handlers::handle_download),
        )
        // Record hubs
        .route(
            "/api/v1/job-descriptions",
            post(hub::handlers::handle_save_job_description)
                .get(hub::handlers::handle_list_job_descriptions),
        )
        .route(
            "/api/v1/branding-assets",
            post(hub::handlers::handle_save_branding_asset)
                .get(hub::handlers::handle_list_branding_assets),
        )
        .route(
            "/api/v1/feedback",
            post(hub::handlers::handle_save_feedback).get(hub::handlers::handle_list_feedback),
        )
        .route(
            "/api/v1/coaching",
            post(hub::handlers::handle_save_coaching_material)
                .get(hub::handlers::handle_list_coaching_materials),
        )
        .with_state(state)
}
