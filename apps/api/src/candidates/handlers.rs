//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::candidates::generator::UploadedFile;
use crate::candidates::notifications::{
    send_rejection_notices, NotificationReport, DEFAULT_REJECTION_TEMPLATE,
};
use crate::candidates::stats::{compute_stats, DashboardStats};
use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::state::AppState;
use crate::storage::archive_uploads;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterCandidatesRequest {
    pub file_names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub count: usize,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: CandidateStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct RejectionNoticeRequest {
    pub template: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Json<CandidateListResponse> {
    let candidates = state.candidates.list().await;
    Json(CandidateListResponse {
        count: candidates.len(),
        candidates,
    })
}

/// POST /api/v1/candidates
/// Registers candidates from file names alone, for scripted imports.
pub async fn handle_register_candidates(
    State(state): State<AppState>,
    Json(req): Json<RegisterCandidatesRequest>,
) -> Result<(StatusCode, Json<CandidateListResponse>), AppError> {
    let files: Vec<UploadedFile> = req
        .file_names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .map(UploadedFile::unarchived)
        .collect();
    if files.is_empty() {
        return Err(AppError::Validation(
            "file_names must contain at least one non-empty name".to_string(),
        ));
    }

    let candidates = state.candidates.add_uploaded(&files).await;
    Ok((
        StatusCode::CREATED,
        Json(CandidateListResponse {
            count: candidates.len(),
            candidates,
        }),
    ))
}

/// POST /api/v1/candidates/upload
/// Multipart form; every part carrying a filename is one CV.
pub async fn handle_upload_candidates(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateListResponse>), AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read {file_name}: {e}")))?;
        files.push((file_name, data));
    }

    if files.is_empty() {
        return Err(AppError::Validation("Upload contained no files".to_string()));
    }

    let uploaded = archive_uploads(state.archive.as_deref(), files).await;
    let candidates = state.candidates.add_uploaded(&uploaded).await;
    Ok((
        StatusCode::CREATED,
        Json(CandidateListResponse {
            count: candidates.len(),
            candidates,
        }),
    ))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .candidates
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// PATCH /api/v1/candidates/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state.candidates.set_status(&id, req.status).await?;
    Ok(Json(candidate))
}

/// GET /api/v1/candidates/stats
pub async fn handle_candidate_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let candidates = state.candidates.list().await;
    Json(compute_stats(
        &candidates,
        Utc::now(),
        state.config.recent_window_days,
    ))
}

/// POST /api/v1/notifications/rejections
pub async fn handle_send_rejections(
    State(state): State<AppState>,
    body: Option<Json<RejectionNoticeRequest>>,
) -> Json<NotificationReport> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let template = req
        .template
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_REJECTION_TEMPLATE);

    let candidates = state.candidates.list().await;
    Json(send_rejection_notices(&candidates, template))
}
