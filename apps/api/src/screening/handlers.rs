use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::screening::criteria::FilterCriteria;
use crate::screening::ranking::RankedCandidate;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub criteria: FilterCriteria,
    pub candidates: Vec<RankedCandidate>,
}

/// POST /api/v1/candidates/search
/// Ranked by match score, highest first. Each result carries its breakdown.
pub async fn handle_search_candidates(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<SearchResponse>, AppError> {
    criteria.validate()?;
    let candidates = state.candidates.search(&criteria).await;
    debug!(
        vacuous = criteria.is_vacuous(),
        matched = candidates.len(),
        "Candidate search"
    );
    Ok(Json(SearchResponse {
        count: candidates.len(),
        criteria,
        candidates,
    }))
}
