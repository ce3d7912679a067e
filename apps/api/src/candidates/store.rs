use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use tracing::info;

use crate::candidates::generator::{generate_candidates, UploadedFile};
use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::screening::criteria::FilterCriteria;
use crate::screening::ranking::{rank_with_breakdown, RankedCandidate};

/// In-process candidate pool. Clones share the same pool.
///
/// Nothing is persisted: a restart starts from an empty pool.
#[derive(Clone, Default)]
pub struct CandidateStore {
    inner: Arc<RwLock<Vec<Candidate>>>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_uploaded(&self, files: &[UploadedFile]) -> Vec<Candidate> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.add_uploaded_with(files, Utc::now(), &mut rng).await
    }

    /// Generation happens under the write lock so ids stay unique.
    pub async fn add_uploaded_with<R: Rng + Send>(
        &self,
        files: &[UploadedFile],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let mut pool = self.inner.write().await;
        let generated = generate_candidates(files, pool.len(), now, rng);
        pool.extend(generated.iter().cloned());
        info!(
            added = generated.len(),
            total = pool.len(),
            "Candidates generated from uploaded CVs"
        );
        generated
    }

    pub async fn list(&self) -> Vec<Candidate> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Candidate> {
        self.inner.read().await.iter().find(|c| c.id == id).cloned()
    }

    pub async fn set_status(&self, id: &str, status: CandidateStatus) -> Result<Candidate, AppError> {
        let mut pool = self.inner.write().await;
        let candidate = pool
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

        let previous = candidate.status;
        candidate.status = status;
        info!(
            candidate_id = id,
            from = previous.as_str(),
            to = status.as_str(),
            "Candidate status changed"
        );
        Ok(candidate.clone())
    }

    /// Filter, score and rank a snapshot of the pool.
    pub async fn search(&self, criteria: &FilterCriteria) -> Vec<RankedCandidate> {
        let snapshot = self.list().await;
        rank_with_breakdown(&snapshot, criteria)
    }
}
