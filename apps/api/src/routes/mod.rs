pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/candidates/match",
            post(handlers::handle_match_candidates),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::directory::{CandidateDirectory, CandidateRecord, DirectoryError};

    /// In-memory pool, decoded from JSON the way the real directory is.
    struct StaticDirectory(Vec<CandidateRecord>);

    #[async_trait]
    impl CandidateDirectory for StaticDirectory {
        async fn fetch_all(&self) -> Result<Vec<CandidateRecord>, DirectoryError> {
            Ok(self.0.clone())
        }
    }

    struct DownDirectory;

    #[async_trait]
    impl CandidateDirectory for DownDirectory {
        async fn fetch_all(&self) -> Result<Vec<CandidateRecord>, DirectoryError> {
            Err(DirectoryError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
        }
    }

    fn router_with(directory: impl CandidateDirectory + 'static) -> Router {
        build_router(AppState {
            directory: Arc::new(directory),
        })
    }

    fn pool(records: Value) -> StaticDirectory {
        StaticDirectory(serde_json::from_value(records).unwrap())
    }

    async fn post_match(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/candidates/match")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let response = router_with(pool(json!([])))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_match_returns_ranked_shortlist() {
        let app = router_with(pool(json!([
            {
                "id": "rpa-1",
                "name": "Maria Santos",
                "position": "RPA Developer",
                "expected_salary": "₱40,000",
                "skills": ["RPA", "Process Automation"],
                "work_experiences": [{}, {}, {}],
                "overall_score": 80,
                "completed_data": true
            },
            {
                "id": "chef-1",
                "name": "Pedro",
                "position": "Line Cook",
                "expected_salary": "20000",
                "work_experiences": [{}, {}]
            },
            {
                "id": "mock-1",
                "name": "Mock Candidate",
                "position": "Automation Engineer"
            }
        ])));

        let (status, body) =
            post_match(app, r#"{"role":"Automation Engineer","level":"mid"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "Automation Engineer");
        assert_eq!(body["level"], "mid");
        assert_eq!(body["totalCandidates"], 1);
        assert_eq!(body["averageSalary"], 40000);
        let first = &body["recommendedCandidates"][0];
        assert_eq!(first["id"], "rpa-1");
        assert_eq!(first["matchScore"], 95);
        assert_eq!(first["expectedSalary"], 40000);
        assert_eq!(first["isRecommended"], true);
        assert_eq!(first["experience"], "3 positions");
    }

    #[tokio::test]
    async fn test_empty_directory_is_not_an_error() {
        let (status, body) = post_match(
            router_with(pool(json!([]))),
            r#"{"role":"Bookkeeper","level":"entry","industry":"Retail"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendedCandidates"], json!([]));
        assert_eq!(body["averageSalary"], 0);
        assert_eq!(body["totalCandidates"], 0);
    }

    #[tokio::test]
    async fn test_missing_fields_is_400() {
        let (status, body) =
            post_match(router_with(pool(json!([]))), r#"{"role":"Bookkeeper"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Role and level are required" }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, body) = post_match(router_with(pool(json!([]))), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_directory_failure_is_500() {
        let (status, body) = post_match(
            router_with(DownDirectory),
            r#"{"role":"Bookkeeper","level":"mid"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("502"), "{message}");
    }

    #[tokio::test]
    async fn test_validation_happens_before_fetch() {
        // A down directory must not turn a bad request into a 500.
        let (status, _) = post_match(router_with(DownDirectory), r#"{"level":"mid"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
