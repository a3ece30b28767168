//! Candidate pipeline — turns a raw directory pool into a ranked,
//! relevance-checked shortlist for one role and level.
//!
//! dedupe → validity filter → score → level/score gate → rank → top 10 →
//! relevance re-check → salary average.
//!
//! Pure and synchronous; the directory fetch happens in the handler.

use std::collections::HashSet;

use tracing::debug;

use crate::directory::CandidateRecord;
use crate::matching::categories::{
    has_automation_skills, is_automation_role, normalize, shared_category, RELEVANCE_FAMILIES,
};
use crate::matching::experience::{classify_experience, describe_experience};
use crate::matching::match_score::calculate_match_score;
use crate::matching::models::{CandidateRecommendation, JobPositionMatch, MatchCriteria};
use crate::matching::salary::parse_salary;

/// Below this a candidate is unrelated and never surfaces.
pub const MIN_MATCH_SCORE: u32 = 20;
pub const SIMILAR_POSITION_SCORE: u32 = 30;
pub const HIGH_MATCH_SCORE: u32 = 50;
pub const RECOMMENDED_MATCH_SCORE: u32 = 70;
pub const RECOMMENDED_OVERALL_SCORE: f64 = 50.0;
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Substrings marking seeded, demo or abusive directory entries.
const TEST_MARKERS: &[&str] = &["test", "mock", "bpoc", "robber"];

const AUTOMATION_SPECIALIST: &str = "Automation Specialist";
const UNKNOWN_POSITION: &str = "Position not specified";

/// Runs the full pipeline over `pool`. An empty shortlist is a valid result.
pub fn match_candidates(pool: Vec<CandidateRecord>, criteria: &MatchCriteria) -> JobPositionMatch {
    let pool_size = pool.len();
    let automation_role = is_automation_role(&criteria.role);

    let mut seen_ids = HashSet::new();
    let valid: Vec<CandidateRecord> = pool
        .into_iter()
        .filter(|record| record.id.is_empty() || seen_ids.insert(record.id.clone()))
        .filter(|record| is_valid_candidate(record, automation_role))
        .collect();
    debug!("{} of {pool_size} candidates are unique and valid", valid.len());

    let mut scored: Vec<CandidateRecommendation> = valid
        .iter()
        .filter_map(|record| score_candidate(record, criteria))
        .collect();
    debug!(
        "{} candidates passed the score and level gates for '{}'",
        scored.len(),
        criteria.role
    );

    rank(&mut scored);
    scored.truncate(MAX_RECOMMENDATIONS);

    let role = normalize(&criteria.role);
    let shortlist: Vec<CandidateRecommendation> = scored
        .into_iter()
        .filter(|c| c.match_score >= HIGH_MATCH_SCORE && is_relevant(&c.position, &role))
        .collect();
    debug!("{} candidates survived the relevance re-check", shortlist.len());

    if shortlist.is_empty() {
        return JobPositionMatch::empty(criteria);
    }

    JobPositionMatch {
        role: criteria.role.clone(),
        level: criteria.level,
        average_salary: average_salary(&shortlist),
        total_candidates: shortlist.len(),
        recommended_candidates: shortlist,
    }
}

fn is_test_entry(record: &CandidateRecord) -> bool {
    let name = normalize(&record.name);
    let position = record.position.as_deref().map(normalize).unwrap_or_default();
    TEST_MARKERS
        .iter()
        .any(|marker| name.contains(marker) || position.contains(marker))
}

fn has_declared_position(record: &CandidateRecord) -> bool {
    record
        .position
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty())
}

fn is_valid_candidate(record: &CandidateRecord, automation_role: bool) -> bool {
    if is_test_entry(record) {
        return false;
    }

    let automation_fit = automation_role && has_automation_skills(&record.skills);
    let completed_with_salary =
        record.profile_completed && parse_salary(record.expected_salary.as_deref()) > 0;

    automation_fit || completed_with_salary || has_declared_position(record)
}

/// Position used for matching: the declared one, or a label synthesized
/// from skills when it is blank. Empty when neither is available.
fn resolve_position(record: &CandidateRecord) -> String {
    if has_declared_position(record) {
        return record.position.as_deref().unwrap_or_default().trim().to_string();
    }
    if has_automation_skills(&record.skills) {
        return AUTOMATION_SPECIALIST.to_string();
    }
    String::new()
}

fn score_candidate(
    record: &CandidateRecord,
    criteria: &MatchCriteria,
) -> Option<CandidateRecommendation> {
    let history = record.work_experiences.as_deref();
    let level = classify_experience(history);
    let position = resolve_position(record);
    let match_score = calculate_match_score(&position, &criteria.role, &record.skills);

    if match_score < MIN_MATCH_SCORE {
        return None;
    }

    let level_exact = level == criteria.level;
    let level_flexible = level.is_adjacent(criteria.level);
    let high_match = match_score >= HIGH_MATCH_SCORE;
    let similar_position = match_score >= SIMILAR_POSITION_SCORE;

    if !(level_exact || level_flexible || high_match || similar_position) {
        return None;
    }

    let overall_score = record.overall_score.unwrap_or(0.0);

    Some(CandidateRecommendation {
        id: record.id.clone(),
        name: record.name.clone(),
        position: if position.is_empty() {
            UNKNOWN_POSITION.to_string()
        } else {
            position
        },
        location: record.location.clone(),
        expected_salary: parse_salary(record.expected_salary.as_deref()),
        experience: describe_experience(history),
        skills: record.skills.clone(),
        overall_score,
        match_score,
        is_recommended: match_score >= RECOMMENDED_MATCH_SCORE
            && overall_score >= RECOMMENDED_OVERALL_SCORE,
    })
}

/// Match score descending, then overall score descending. Stable, so full
/// ties keep directory order.
fn rank(candidates: &mut [CandidateRecommendation]) {
    candidates.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| b.overall_score.total_cmp(&a.overall_score))
    });
}

/// Coarser second opinion on the shortlist: direct containment, or role
/// and position landing in the same `RELEVANCE_FAMILIES` row.
fn is_relevant(position: &str, role: &str) -> bool {
    let position = normalize(position);
    if position.is_empty() || role.is_empty() {
        return false;
    }
    position.contains(role)
        || role.contains(&position)
        || shared_category(RELEVANCE_FAMILIES, role, &position).is_some()
}

fn average_salary(candidates: &[CandidateRecommendation]) -> u32 {
    if candidates.is_empty() {
        return 0;
    }
    let total: u64 = candidates.iter().map(|c| u64::from(c.expected_salary)).sum();
    (total as f64 / candidates.len() as f64).round() as u32
}
