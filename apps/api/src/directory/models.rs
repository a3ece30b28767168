//! Candidate directory wire model.
//!
//! Directory entries are loosely typed, so every field is decoded on its
//! own: a malformed field falls back to an empty/absent value instead of
//! rejecting the record or the whole pool.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response envelope returned by the directory's list endpoint.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<CandidateRecord>,
}

/// A single directory entry. Read-only input to the matcher.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    /// Current or declared position, free text.
    pub position: Option<String>,
    pub location: Option<String>,
    /// Declared expected salary, free text (may be a range).
    pub expected_salary: Option<String>,
    pub skills: Vec<String>,
    /// Prior positions; only the count is used. `None` when absent or not a list.
    pub work_experiences: Option<Vec<Value>>,
    /// Directory quality score, 0–100.
    pub overall_score: Option<f64>,
    pub profile_completed: bool,
}

const ID_KEYS: &[&str] = &["id", "user_id", "userId"];
const NAME_KEYS: &[&str] = &["name", "full_name", "fullName", "display_name", "displayName"];
const POSITION_KEYS: &[&str] = &["position", "current_position", "currentPosition", "job_title", "jobTitle"];
const LOCATION_KEYS: &[&str] = &["location"];
const SALARY_KEYS: &[&str] = &["expected_salary", "expectedSalary"];
const SKILLS_KEYS: &[&str] = &["skills"];
const HISTORY_KEYS: &[&str] = &["work_experiences", "workExperiences", "work_experience", "workExperience"];
const SCORE_KEYS: &[&str] = &["overall_score", "overallScore"];
const COMPLETED_KEYS: &[&str] = &["completed_data", "completedData", "profile_completed", "profileCompleted"];

impl From<Value> for CandidateRecord {
    fn from(value: Value) -> Self {
        let Value::Object(obj) = value else {
            return CandidateRecord::default();
        };

        CandidateRecord {
            id: lookup(&obj, ID_KEYS).and_then(scalar_to_string).unwrap_or_default(),
            name: lookup(&obj, NAME_KEYS).and_then(scalar_to_string).unwrap_or_default(),
            position: lookup(&obj, POSITION_KEYS).and_then(scalar_to_string),
            location: lookup(&obj, LOCATION_KEYS).and_then(location_to_string),
            expected_salary: lookup(&obj, SALARY_KEYS).and_then(scalar_to_string),
            skills: lookup(&obj, SKILLS_KEYS).map(string_list).unwrap_or_default(),
            work_experiences: lookup(&obj, HISTORY_KEYS).and_then(|v| v.as_array().cloned()),
            overall_score: lookup(&obj, SCORE_KEYS).and_then(number),
            profile_completed: lookup(&obj, COMPLETED_KEYS)
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

/// First non-null value among the accepted spellings of a field.
fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Locations arrive either as text or as `{ city, province, country }`.
fn location_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(obj) => {
            let parts: Vec<&str> = ["city", "province", "region", "country"]
                .iter()
                .filter_map(|k| obj.get(*k).and_then(Value::as_str))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(scalar_to_string)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
