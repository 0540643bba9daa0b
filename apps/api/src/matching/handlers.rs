//! Axum route handlers for job matching.

use axum::{
    extract::State,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::ApiPath;
use crate::matching::analysis::{analyze_job_match, generate_profile_summary, JobMatchAnalysis};
use crate::matching::job_description::{JobDescription, JOB_DESCRIPTION};
use crate::profile::store::update_profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub profile_summary: String,
    pub job_match_analysis: JobMatchAnalysis,
}

/// GET /api/v1/job-description
pub async fn handle_job_description() -> Json<&'static JobDescription> {
    Json(&JOB_DESCRIPTION)
}

/// POST /api/v1/profiles/:id/analysis
///
/// Generates the profile summary (only when none is stored yet), then scores
/// the profile against the job description. Each result is saved as soon as
/// it arrives, so a failed analysis does not discard a fresh summary.
pub async fn handle_analyze(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let profile = state.profiles.load(profile_id).await?.unwrap_or_default();
    if !profile.has_analyzable_data() {
        return Err(AppError::Validation(
            "Upload a resume or fill in your skills before requesting an analysis".to_string(),
        ));
    }

    info!("Analyzing profile {profile_id}");

    let profile_summary = match profile.profile_summary.clone() {
        Some(summary) => summary,
        None => {
            let summary = generate_profile_summary(&profile, &state.llm).await?;
            let stored = summary.clone();
            update_profile(state.profiles.as_ref(), profile_id, move |p| {
                p.set_profile_summary(stored)
            })
            .await?;
            summary
        }
    };

    let job_match_analysis = analyze_job_match(&profile, &JOB_DESCRIPTION, &state.llm).await?;
    let stored = job_match_analysis.clone();
    update_profile(state.profiles.as_ref(), profile_id, move |p| {
        p.set_job_match_analysis(stored)
    })
    .await?;

    Ok(Json(AnalysisResponse {
        profile_summary,
        job_match_analysis,
    }))
}
