//! API Integration Tests
//!
//! Exercises the full request/response cycle against an in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use agegate_api::{create_test_router, AppState, GuardConfig};
use agegate_core::{AgeGateService, GateConfig};
use agegate_store::MemoryStore;

fn test_router() -> Router {
    let store = Arc::new(MemoryStore::new());
    let gate = Arc::new(AgeGateService::new(store, GateConfig::default()));
    let state = Arc::new(AppState::new(gate, AppState::default_content_types()));
    create_test_router(state, GuardConfig::default())
}

async fn json_request(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    let body = if let Some(json_body) = body {
        Body::from(serde_json::to_vec(&json_body).unwrap())
    } else {
        Body::empty()
    };

    let response = router.clone().oneshot(request.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));

    (status, json)
}

/// A birthdate that makes the subject `age` whole years old today
fn birthdate_for_age(age: i32) -> String {
    let today = chrono::Utc::now().date_naive();
    let birth = today
        .with_year(today.year() - age)
        .unwrap_or_else(|| chrono::NaiveDate::from_ymd_opt(today.year() - age, 3, 1).unwrap());
    birth.format("%Y-%m-%d").to_string()
}

use chrono::Datelike;

// =============================================================================
// Age-Gate Endpoint Tests
// =============================================================================

mod age_gate {
    use super::*;

    #[tokio::test]
    async fn test_adult_submission_grants_direct_access() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
                "birthdate": birthdate_for_age(20),
                "countryCode": "US"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["calculatedAge"], 20);
        assert_eq!(json["nextStep"], "direct_access");
    }

    #[tokio::test]
    async fn test_minor_submission_requires_consent() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
                "birthdate": birthdate_for_age(10),
                "countryCode": "gb"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["calculatedAge"], 10);
        assert_eq!(json["nextStep"], "parent_consent_required");
    }

    #[tokio::test]
    async fn test_future_birthdate_rejected() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
                "birthdate": "2999-01-01",
                "countryCode": "US"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BIRTHDATE_IN_FUTURE");
        assert!(json["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_invalid_country_code_rejected() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
                "birthdate": "2000-06-15",
                "countryCode": "USA"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_COUNTRY_CODE");
    }

    #[tokio::test]
    async fn test_malformed_birthdate_renders_error_payload() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
                "birthdate": "not-a-date",
                "countryCode": "US"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_REQUEST_BODY");
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_field_renders_error_payload() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
                "countryCode": "US"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_REQUEST_BODY");
    }
}

// =============================================================================
// Gate Status Tests
// =============================================================================

mod gate_status {
    use super::*;

    #[tokio::test]
    async fn test_unknown_subject_is_unverified() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "GET",
            "/api/v1/age-gate/status?subjectId=11111111-2222-3333-4444-555555555555",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "unverified");
    }

    #[tokio::test]
    async fn test_adult_subject_has_direct_access() {
        let router = test_router();
        let subject = "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10";

        json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": subject,
                "birthdate": birthdate_for_age(30),
                "countryCode": "DE"
            })),
        )
        .await;

        let (status, json) = json_request(
            &router,
            "GET",
            &format!("/api/v1/age-gate/status?subjectId={subject}"),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "direct_access_granted");
    }

    #[tokio::test]
    async fn test_minor_pending_until_attestation() {
        let router = test_router();
        let subject = "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10";

        json_request(
            &router,
            "POST",
            "/api/v1/age-gate",
            Some(json!({
                "subjectId": subject,
                "birthdate": birthdate_for_age(9),
                "countryCode": "FR"
            })),
        )
        .await;

        let status_uri = format!("/api/v1/age-gate/status?subjectId={subject}");
        let (_, json) = json_request(&router, "GET", &status_uri, None).await;
        assert_eq!(json["state"], "pending_parent_consent");

        let (status, _) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate/attestation",
            Some(json!({
                "subjectId": subject,
                "parentEmail": "parent@example.com",
                "parentFullName": "Alex Example",
                "relationshipToChild": "mother",
                "attestationAccepted": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = json_request(&router, "GET", &status_uri, None).await;
        assert_eq!(json["state"], "consented");
    }
}

// =============================================================================
// Attestation Endpoint Tests
// =============================================================================

mod attestation {
    use super::*;

    fn valid_body() -> Value {
        json!({
            "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
            "parentEmail": "parent@example.com",
            "parentFullName": "Alex Example",
            "relationshipToChild": "father",
            "attestationAccepted": true
        })
    }

    #[tokio::test]
    async fn test_valid_attestation_returns_policy_and_expiry() {
        let router = test_router();
        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate/attestation",
            Some(valid_body()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["policyVersion"], "v1");
        assert!(json["expiresAt"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_refused_terms_are_forbidden() {
        let router = test_router();
        let mut body = valid_body();
        body["attestationAccepted"] = json!(false);

        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate/attestation",
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "ATTESTATION_NOT_ACCEPTED");
    }

    #[tokio::test]
    async fn test_invalid_email_names_field() {
        let router = test_router();
        let mut body = valid_body();
        body["parentEmail"] = json!("not-an-email");

        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate/attestation",
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field"], "parentEmail");
    }

    #[tokio::test]
    async fn test_short_name_names_field() {
        let router = test_router();
        let mut body = valid_body();
        body["parentFullName"] = json!("Al");

        let (status, json) = json_request(
            &router,
            "POST",
            "/api/v1/age-gate/attestation",
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["field"], "parentFullName");
    }
}

// =============================================================================
// Content Catalog Tests
// =============================================================================

mod content {
    use super::*;

    #[tokio::test]
    async fn test_catalog_order_is_stable() {
        let router = test_router();
        let (status, json) = json_request(&router, "GET", "/api/v1/content-types", None).await;

        assert_eq!(status, StatusCode::OK);
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], "video-lessons");
        assert_eq!(items[1]["id"], "practice-sets");
        assert_eq!(items[2]["id"], "quizzes");
        assert!(items[0]["name"].as_str().is_some());
        assert!(items[0]["description"].as_str().is_some());
    }
}

// =============================================================================
// Access Guard Tests
// =============================================================================

mod access_guard {
    use super::*;

    #[tokio::test]
    async fn test_protected_path_without_session_redirects() {
        let router = test_router();
        let request = Request::builder()
            .method("GET")
            .uri("/content/videos/42")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/welcome");
    }

    #[tokio::test]
    async fn test_redirect_preserves_no_query_state() {
        let router = test_router();
        let request = Request::builder()
            .method("GET")
            .uri("/feed?topic=science&page=3")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/welcome");
    }

    #[tokio::test]
    async fn test_session_marker_passes_through() {
        let router = test_router();
        let request = Request::builder()
            .method("GET")
            .uri("/content/videos/42")
            .header("Cookie", "agegate_session=abc123")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        // Past the guard; no such route exists in the test router
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unprotected_paths_not_intercepted() {
        let router = test_router();
        let (status, json) = json_request(&router, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_api_surface_not_intercepted() {
        let router = test_router();
        let (status, _) = json_request(&router, "GET", "/api/v1/content-types", None).await;

        assert_eq!(status, StatusCode::OK);
    }
}
