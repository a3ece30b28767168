use std::sync::Arc;

use crate::directory::CandidateDirectory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Source of the candidate pool. Default: `HttpCandidateDirectory`;
    /// tests swap in an in-memory pool.
    pub directory: Arc<dyn CandidateDirectory>,
}
