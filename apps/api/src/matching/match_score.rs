//! Match Score — tiered estimate (0–100) of how well a candidate's position
//! and skills fit a requested role.
//!
//! Rules are checked in order and the first one that fires wins:
//! 1. exact or substring match between position and role      → 100
//! 2. automation role: automation title → 95, automation skill → 90
//! 3. role and position share a `ROLE_CATEGORIES` row          → 85
//! 4. word overlap: round(fraction of role words found × 70)
//! 5. nothing                                                  → 20

use tracing::trace;

use crate::matching::categories::{
    contains_any, has_automation_skills, is_automation_role, normalize, shared_category,
    AUTOMATION_POSITION_TERMS, ROLE_CATEGORIES,
};

pub const EXACT_MATCH_SCORE: u32 = 100;
pub const AUTOMATION_TITLE_SCORE: u32 = 95;
pub const AUTOMATION_SKILL_SCORE: u32 = 90;
pub const CATEGORY_MATCH_SCORE: u32 = 85;
pub const WORD_OVERLAP_CEILING: f64 = 70.0;
pub const NO_SIGNAL_SCORE: u32 = 20;

pub fn calculate_match_score(position: &str, target_role: &str, skills: &[String]) -> u32 {
    let position = normalize(position);
    let role = normalize(target_role);

    // An empty string is a substring of everything, so blank sides never count as exact.
    if !position.is_empty()
        && !role.is_empty()
        && (position.contains(&role) || role.contains(&position))
    {
        return EXACT_MATCH_SCORE;
    }

    if is_automation_role(&role) {
        if contains_any(&position, AUTOMATION_POSITION_TERMS) {
            return AUTOMATION_TITLE_SCORE;
        }
        if has_automation_skills(skills) {
            return AUTOMATION_SKILL_SCORE;
        }
    }

    if let Some(category) = shared_category(ROLE_CATEGORIES, &role, &position) {
        trace!("'{position}' matches '{role}' via category '{}'", category.name);
        return CATEGORY_MATCH_SCORE;
    }

    if let Some(fraction) = word_overlap(&role, &position) {
        return (fraction * WORD_OVERLAP_CEILING).round() as u32;
    }

    NO_SIGNAL_SCORE
}

/// Fraction of role words that appear among position words (substring in
/// either direction). `None` when nothing overlaps.
fn word_overlap(role: &str, position: &str) -> Option<f64> {
    let role_words = significant_words(role);
    let position_words = significant_words(position);
    if role_words.is_empty() || position_words.is_empty() {
        return None;
    }

    let matched = role_words
        .iter()
        .filter(|rw| {
            position_words
                .iter()
                .any(|pw| pw.contains(*rw) || rw.contains(*pw))
        })
        .count();

    (matched > 0).then(|| matched as f64 / role_words.len() as f64)
}

fn significant_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_match_scores_100() {
        assert_eq!(calculate_match_score("Software Developer", "developer", &[]), 100);
        assert_eq!(calculate_match_score("developer", "Senior Developer", &[]), 100);
        assert_eq!(calculate_match_score("  Virtual Assistant ", "virtual assistant", &[]), 100);
    }

    #[test]
    fn test_automation_title_scores_95() {
        assert_eq!(calculate_match_score("RPA Engineer", "automation specialist", &[]), 95);
        assert_eq!(calculate_match_score("UiPath Consultant", "RPA Lead", &[]), 95);
    }

    #[test]
    fn test_automation_skills_score_90() {
        let s = skills(&["Excel", "Workflow Design"]);
        assert_eq!(calculate_match_score("Operations Associate", "Automation Specialist", &s), 90);
    }

    #[test]
    fn test_automation_skills_ignored_for_other_roles() {
        let s = skills(&["RPA", "Process Automation"]);
        assert_eq!(calculate_match_score("Chef", "Bookkeeper", &s), NO_SIGNAL_SCORE);
    }

    #[test]
    fn test_category_match_scores_85() {
        assert_eq!(calculate_match_score("Frontend Engineer", "web developer", &[]), 85);
        assert_eq!(calculate_match_score("SEO Specialist", "Marketing Manager", &[]), 85);
        assert_eq!(calculate_match_score("Bookkeeper", "Accounting Staff", &[]), 85);
    }

    #[test]
    fn test_graphic_designer_is_not_a_marketing_category_hit() {
        let score = calculate_match_score("Graphic Designer", "marketing", &[]);
        assert!(score < CATEGORY_MATCH_SCORE, "got {score}");
        assert_eq!(score, NO_SIGNAL_SCORE);
    }

    #[test]
    fn test_word_overlap_is_scaled_to_70() {
        // "data" and "analyst" overlap; "quality" does not: 2/3 × 70 = 46.67 → 47
        assert_eq!(
            calculate_match_score("Data Entry Analyst", "Quality Data Analyst", &[]),
            47
        );
        // one of two words: 35
        assert_eq!(calculate_match_score("Logistics Coordinator", "Events Coordinator", &[]), 35);
    }

    #[test]
    fn test_short_words_are_ignored_in_overlap() {
        // "it" and "qa" are too short to count.
        assert_eq!(calculate_match_score("IT Staff", "QA IT", &[]), NO_SIGNAL_SCORE);
    }

    #[test]
    fn test_unrelated_scores_default_floor() {
        assert_eq!(calculate_match_score("Unrelated Chef", "blockchain architect", &[]), 20);
    }

    #[test]
    fn test_blank_position_is_never_exact() {
        assert_eq!(calculate_match_score("", "Bookkeeper", &[]), NO_SIGNAL_SCORE);
        assert_eq!(calculate_match_score("   ", "Automation Engineer", &[]), NO_SIGNAL_SCORE);
    }

    #[test]
    fn test_earlier_rules_dominate() {
        // Substring beats automation keywords.
        assert_eq!(calculate_match_score("RPA Developer", "rpa developer", &[]), 100);
        // Automation title beats category mapping.
        assert_eq!(calculate_match_score("Automation Engineer", "Automation Developer", &[]), 95);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let positions = ["", "Chef", "Web Developer", "RPA Developer", "Data Entry Clerk"];
        let roles = ["developer", "automation", "marketing", "hr", "x", "Customer Support"];
        for p in positions {
            for r in roles {
                let score = calculate_match_score(p, r, &skills(&["workflow"]));
                assert!(score <= 100, "{p} / {r} scored {score}");
            }
        }
    }
}
