//! Axum route handlers for the Matching API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::experience::ExperienceLevel;
use crate::matching::models::{JobPositionMatch, MatchCriteria, MatchRequest};
use crate::matching::pipeline::match_candidates;
use crate::state::AppState;

const MISSING_FIELDS: &str = "Role and level are required";
const INVALID_LEVEL: &str = "Level must be one of: entry, mid, senior";

/// POST /api/v1/candidates/match
///
/// Fetches the full directory pool and returns the ranked shortlist for the
/// requested role and level. A shortlist with no candidates is a 200.
pub async fn handle_match_candidates(
    State(state): State<AppState>,
    body: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<JobPositionMatch>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let criteria = validate_request(request)?;

    if let Some(industry) = &criteria.industry {
        debug!("Industry '{industry}' supplied; not used for matching");
    }

    let pool = state.directory.fetch_all().await?;
    let pool_size = pool.len();
    let result = match_candidates(pool, &criteria);

    info!(
        "Matched {} of {pool_size} candidates for '{}' ({})",
        result.total_candidates, criteria.role, criteria.level
    );

    Ok(Json(result))
}

fn validate_request(request: MatchRequest) -> Result<MatchCriteria, AppError> {
    let role = request
        .role
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    let level = request.level.filter(|l| !l.trim().is_empty());

    let (Some(role), Some(level)) = (role, level) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    let level = ExperienceLevel::parse(&level)
        .ok_or_else(|| AppError::Validation(INVALID_LEVEL.to_string()))?;

    Ok(MatchCriteria {
        role,
        level,
        industry: request.industry.filter(|i| !i.trim().is_empty()),
    })
}
