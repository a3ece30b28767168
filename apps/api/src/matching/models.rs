use serde::{Deserialize, Serialize};

use crate::matching::experience::ExperienceLevel;

/// Body of `POST /api/v1/candidates/match`. Fields are optional here so
/// missing values surface as a 400 with a readable message instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub role: Option<String>,
    pub level: Option<String>,
    /// Accepted for forward compatibility; does not affect matching.
    pub industry: Option<String>,
}

/// A validated `MatchRequest`.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    pub role: String,
    pub level: ExperienceLevel,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecommendation {
    pub id: String,
    pub name: String,
    pub position: String,
    pub location: Option<String>,
    /// Parsed monthly salary; 0 when unparseable.
    pub expected_salary: u32,
    pub experience: String,
    pub skills: Vec<String>,
    /// Directory quality score; 0 when absent.
    pub overall_score: f64,
    pub match_score: u32,
    pub is_recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPositionMatch {
    pub role: String,
    pub level: ExperienceLevel,
    pub recommended_candidates: Vec<CandidateRecommendation>,
    pub average_salary: u32,
    pub total_candidates: usize,
}

impl JobPositionMatch {
    pub fn empty(criteria: &MatchCriteria) -> Self {
        Self {
            role: criteria.role.clone(),
            level: criteria.level,
            recommended_candidates: Vec::new(),
            average_salary: 0,
            total_candidates: 0,
        }
    }
}
