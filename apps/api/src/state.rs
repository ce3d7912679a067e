use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::storage::CvArchive;
use crate::vocabulary::store::VocabularyStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub candidates: CandidateStore,
    /// Redis-backed when REDIS_URL is set, in-memory otherwise.
    pub vocabulary: Arc<dyn VocabularyStore>,
    /// None when S3 is not configured; uploads then skip archiving.
    pub archive: Option<Arc<dyn CvArchive>>,
    pub config: Config,
}
