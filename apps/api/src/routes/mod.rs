pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Headroom over the file size limit for multipart framing and other fields.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("No route matches this path".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.extractor.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing (stateless)
        .route(
            "/api/v1/resume/sections",
            post(resume::handle_extract_sections),
        )
        .route("/api/v1/resume/parse", post(resume::handle_parse_resume))
        // Job matching
        .route(
            "/api/v1/job-description",
            get(matching::handle_job_description),
        )
        // Profile wizard
        .route(
            "/api/v1/profiles/:id",
            get(profile::handle_get_profile).delete(profile::handle_reset_profile),
        )
        .route(
            "/api/v1/profiles/:id/resume",
            post(profile::handle_upload_resume),
        )
        .route(
            "/api/v1/profiles/:id/personal-info",
            patch(profile::handle_update_personal_info),
        )
        .route(
            "/api/v1/profiles/:id/skills-experience",
            patch(profile::handle_update_skills_experience),
        )
        .route(
            "/api/v1/profiles/:id/questions",
            patch(profile::handle_update_questions),
        )
        .route(
            "/api/v1/profiles/:id/analysis",
            post(matching::handle_analyze),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
