use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::vocabulary::{self, VocabularyKind};

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub kind: VocabularyKind,
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RememberTermRequest {
    pub term: String,
}

/// GET /api/v1/vocabulary/:kind
pub async fn handle_get_vocabulary(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<VocabularyResponse>, AppError> {
    let kind: VocabularyKind = kind.parse()?;
    let candidates = state.candidates.list().await;
    let values = vocabulary::load(state.vocabulary.as_ref(), kind, &candidates).await?;
    Ok(Json(VocabularyResponse { kind, values }))
}

/// POST /api/v1/vocabulary/:kind
pub async fn handle_remember_term(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<RememberTermRequest>,
) -> Result<Json<VocabularyResponse>, AppError> {
    let kind: VocabularyKind = kind.parse()?;
    vocabulary::remember(state.vocabulary.as_ref(), kind, &req.term).await?;
    let candidates = state.candidates.list().await;
    let values = vocabulary::load(state.vocabulary.as_ref(), kind, &candidates).await?;
    Ok(Json(VocabularyResponse { kind, values }))
}
