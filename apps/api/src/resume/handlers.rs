//! Axum route handlers for resume parsing.

use axum::{
    extract::{multipart::{MultipartError, MultipartRejection}, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extractors::ApiJson;
use crate::resume::extractor::{ExtractionError, TextExtractor};
use crate::resume::models::ParsedResumeData;
use crate::resume::sections::extract_sections;
use crate::state::AppState;

/// Multipart field names accepted for the resume file.
const FILE_FIELDS: &[&str] = &["file", "resume", "document"];

#[derive(Debug, Deserialize)]
pub struct SectionsRequest {
    pub text: String,
}

/// A file pulled out of a multipart body.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Reads the first file field from a multipart body. `limit` is the upload
/// size limit reported when the body limit cuts the read short.
pub async fn read_resume_upload(
    multipart: &mut Multipart,
    limit: usize,
) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, limit, "Malformed multipart body"))?
    {
        let is_file_field = field.name().is_some_and(|n| FILE_FIELDS.contains(&n));
        if !is_file_field {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, limit, "Failed to read upload"))?;
        return Ok(ResumeUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(
        "Expected a multipart field named 'file'".to_string(),
    ))
}

fn upload_error(err: MultipartError, limit: usize, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ExtractionError::TooLarge { limit }.into()
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}

/// Extracts text from an upload and runs the section extractor over it.
pub async fn parse_upload(
    extractor: &TextExtractor,
    upload: ResumeUpload,
) -> Result<ParsedResumeData, AppError> {
    let text = extractor
        .extract(&upload.file_name, upload.content_type.as_deref(), upload.bytes)
        .await?;
    let parsed = extract_sections(&text);
    info!(
        "Parsed {}: {} chars, sections found: {}",
        upload.file_name,
        text.len(),
        crate::resume::models::SectionKey::ALL
            .iter()
            .filter(|k| !parsed.section(**k).is_empty())
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(parsed)
}

/// POST /api/v1/resume/sections
///
/// Runs the section extractor over already-extracted text.
pub async fn handle_extract_sections(
    ApiJson(request): ApiJson<SectionsRequest>,
) -> Result<Json<ParsedResumeData>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(extract_sections(&request.text)))
}

/// POST /api/v1/resume/parse
///
/// Multipart upload → text → sections. Nothing is stored.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParsedResumeData>, AppError> {
    let mut multipart = multipart?;
    let upload = read_resume_upload(&mut multipart, state.extractor.max_upload_bytes()).await?;
    let parsed = parse_upload(&state.extractor, upload).await?;
    Ok(Json(parsed))
}
