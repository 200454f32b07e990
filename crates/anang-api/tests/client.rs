//! End-to-end client tests against the local mock backend.

use anang_api::mock::{MockBackend, MockResponse, MockRoute};
use anang_api::{ApiClient, ApiError, ApplicationForm, LicenseFile};
use pretty_assertions::assert_eq;
use serde_json::json;

fn client(backend: &MockBackend) -> ApiClient {
    ApiClient::new(backend.base_url())
}

#[tokio::test]
async fn login_401_is_auth_error_with_detail() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/login",
        MockResponse::detail(401, "Invalid credentials"),
    )])
    .unwrap();

    let err = client(&backend).login("a@b.ca", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Auth { .. }));
    assert_eq!(err.to_string(), "Invalid credentials");

    let sent = backend.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].json().unwrap(),
        json!({ "email": "a@b.ca", "password": "wrong" })
    );
}

#[tokio::test]
async fn login_accepts_flat_account_record() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/login",
        MockResponse::ok(&json!({
            "email": "sage@cafe.ca",
            "business_name": "Sage Café",
            "name": "sage",
            "progress": 2,
            "status": "approved",
            "is_verified": false
        })),
    )])
    .unwrap();

    let login = client(&backend).login(" sage@cafe.ca ", "secret1").await.unwrap();
    assert_eq!(login.user.email, "sage@cafe.ca");
    assert_eq!(login.token, "session:sage@cafe.ca");
    assert_eq!(login.account.unwrap().progress, Some(2));
}

#[tokio::test]
async fn signup_conflict_surfaces_backend_detail() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/signup",
        MockResponse::detail(409, "Email already registered. Please log in."),
    )])
    .unwrap();

    let err = client(&backend).signup("a@b.ca", "secret1").await.unwrap_err();
    assert!(matches!(err, ApiError::Conflict { .. }));
    assert_eq!(err.to_string(), "Email already registered. Please log in.");
}

#[tokio::test]
async fn finalize_without_application_is_precondition() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/finalize-account",
        MockResponse {
            status: 400,
            body: String::new(),
        },
    )])
    .unwrap();

    let err = client(&backend)
        .finalize_account("a@b.ca", "secret1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Precondition { status: 400, .. }));
    assert_eq!(err.to_string(), "Please submit your business details first.");
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let api = ApiClient::new(MockBackend::unreachable_url().unwrap());
    let err = api.login("a@b.ca", "pw").await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.to_string(), "Cannot reach server. Is the API running?");
}

#[tokio::test]
async fn unreachable_business_listing_filters_fallback() {
    let api = ApiClient::new(MockBackend::unreachable_url().unwrap());
    let list = api.get_verified_businesses(Some("Restaurant")).await;
    assert!(list.from_fallback);
    assert!(!list.businesses.is_empty());
    assert!(list.businesses.iter().all(|b| b.category == "Restaurant"));
}

#[tokio::test]
async fn business_listing_error_status_uses_fallback() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "GET",
        "/api/businesses",
        MockResponse::detail(500, "boom"),
    )])
    .unwrap();
    let list = client(&backend).get_verified_businesses(None).await;
    assert!(list.from_fallback);
}

#[tokio::test]
async fn live_business_listing_is_not_fallback() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "GET",
        "/api/businesses",
        MockResponse::ok(&json!({ "businesses": [{
            "id": "sage_cafe_ca", "name": "Sage Café", "description": "",
            "category": "Cafe", "address": "", "sustainability": "", "live": false
        }]})),
    )])
    .unwrap();

    let list = client(&backend).get_verified_businesses(Some("Cafe")).await;
    assert!(!list.from_fallback);
    assert_eq!(list.businesses.len(), 1);
    assert_eq!(backend.requests()[0].query_param("category").as_deref(), Some("Cafe"));
}

#[tokio::test]
async fn update_progress_sends_step_and_email() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "PATCH",
        "/api/user/progress",
        MockResponse::ok(&json!({ "email": "a@b.ca", "progress": 4, "is_verified": false })),
    )])
    .unwrap();

    let update = client(&backend).update_progress("a@b.ca", Some(4)).await.unwrap();
    assert_eq!(update.progress, 4);

    let sent = &backend.requests()[0];
    assert_eq!(sent.query_param("email").as_deref(), Some("a@b.ca"));
    assert_eq!(sent.json().unwrap(), json!({ "step": 4 }));
}

#[tokio::test]
async fn upload_rejects_bad_extension_without_request() {
    let backend = MockBackend::routes(vec![]).unwrap();
    let err = client(&backend)
        .upload_license("a@b.ca", LicenseFile::new("license.docx", b"x".to_vec()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn upload_failure_without_detail_says_upload_failed() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/upload-license",
        MockResponse {
            status: 500,
            body: "{}".into(),
        },
    )])
    .unwrap();
    let err = client(&backend)
        .upload_license("a@b.ca", LicenseFile::new("license.pdf", b"%PDF".to_vec()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Upload failed");
}

#[tokio::test]
async fn submit_application_sends_multipart_fields() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/submit-application",
        MockResponse::ok(&json!({ "email": "a@b.ca", "message": "Application received." })),
    )])
    .unwrap();

    let form = ApplicationForm {
        email: "a@b.ca".into(),
        business_name: "Sage Café".into(),
        business_type: "Cafe".into(),
        business_description: "Farm to table".into(),
        contact: "613-555-0100".into(),
    };
    let receipt = client(&backend)
        .submit_application(form, Some(LicenseFile::new("license.pdf", b"%PDF".to_vec())))
        .await
        .unwrap();
    assert_eq!(receipt.email, "a@b.ca");

    let sent = &backend.requests()[0];
    assert!(sent.content_type.as_deref().unwrap().starts_with("multipart/form-data"));
    for field in ["email", "businessName", "businessType", "businessDescription", "contact", "license_file"] {
        assert!(sent.has_form_field(field), "missing {field}");
    }
}

#[tokio::test]
async fn discovery_unknown_category_is_precondition() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "GET",
        "/api/discovery/data",
        MockResponse::detail(404, "Category 'nope' not found"),
    )])
    .unwrap();
    let err = client(&backend).get_discovery_data("nope").await.unwrap_err();
    assert!(matches!(err, ApiError::Precondition { status: 404, .. }));
    assert_eq!(err.to_string(), "Category 'nope' not found");
}

#[tokio::test]
async fn chat_blank_question_is_rejected_locally() {
    let backend = MockBackend::routes(vec![]).unwrap();
    let err = client(&backend).chat_ask("   ").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn admin_approve_round_trip() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "POST",
        "/api/admin/approve",
        MockResponse::ok(&json!({ "email": "a@b.ca", "status": "approved", "is_verified": true })),
    )])
    .unwrap();
    let decision = client(&backend).admin_approve("a@b.ca").await.unwrap();
    assert_eq!(decision.is_verified, Some(true));
    assert_eq!(backend.requests()[0].json().unwrap(), json!({ "email": "a@b.ca" }));
}

#[tokio::test]
async fn health_reports_status() {
    let backend = MockBackend::routes(vec![MockRoute::new(
        "GET",
        "/health",
        MockResponse::ok(&json!({ "status": "ok" })),
    )])
    .unwrap();
    assert_eq!(client(&backend).health().await.unwrap().status, "ok");
}
