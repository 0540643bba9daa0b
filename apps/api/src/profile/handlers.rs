//! Axum route handlers for the candidate profile.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::{ApiJson, ApiPath};
use crate::profile::models::{
    ContactDetails, HiringManagerQuestionsPatch, ProfileData, SkillsExperiencePatch,
};
use crate::profile::store::update_profile;
use crate::resume::handlers::{parse_upload, read_resume_upload};
use crate::resume::models::ParsedResumeData;
use crate::state::AppState;

const MIN_SKILLS_CHARS: usize = 2;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub parsed: ParsedResumeData,
    pub profile: ProfileData,
}

/// GET /api/v1/profiles/:id
///
/// A profile that was never saved comes back empty rather than 404, the same
/// as a first visit to the wizard.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> Result<Json<ProfileData>, AppError> {
    let profile = state.profiles.load(profile_id).await?.unwrap_or_default();
    Ok(Json(profile))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_reset_profile(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.profiles.remove(profile_id).await?;
    info!("Profile {profile_id} cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profiles/:id/resume
///
/// Parses the uploaded resume and prefills the profile with the result.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut multipart = multipart?;
    let upload = read_resume_upload(&mut multipart, state.extractor.max_upload_bytes()).await?;
    let file_name = upload.file_name.clone();
    let parsed = parse_upload(&state.extractor, upload).await?;

    let prefill = parsed.clone();
    let profile = update_profile(state.profiles.as_ref(), profile_id, move |p| {
        p.apply_parsed_resume(&file_name, &prefill)
    })
    .await?;

    Ok(Json(ResumeUploadResponse { parsed, profile }))
}

/// PATCH /api/v1/profiles/:id/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<ContactDetails>,
) -> Result<Json<ProfileData>, AppError> {
    let profile = update_profile(state.profiles.as_ref(), profile_id, move |p| {
        p.merge_personal_info(patch)
    })
    .await?;
    Ok(Json(profile))
}

/// PATCH /api/v1/profiles/:id/skills-experience
pub async fn handle_update_skills_experience(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<SkillsExperiencePatch>,
) -> Result<Json<ProfileData>, AppError> {
    if let Some(skills) = &patch.skills {
        if skills.trim().chars().count() < MIN_SKILLS_CHARS {
            return Err(AppError::Validation(
                "Please add at least some skills".to_string(),
            ));
        }
    }

    let profile = update_profile(state.profiles.as_ref(), profile_id, move |p| {
        p.merge_skills_experience(patch)
    })
    .await?;
    Ok(Json(profile))
}

/// PATCH /api/v1/profiles/:id/questions
pub async fn handle_update_questions(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<HiringManagerQuestionsPatch>,
) -> Result<Json<ProfileData>, AppError> {
    let profile = update_profile(state.profiles.as_ref(), profile_id, move |p| {
        p.merge_questions(patch)
    })
    .await?;
    Ok(Json(profile))
}
