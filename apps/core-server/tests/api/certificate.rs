use serde_json::{Value, json};

use crate::fixtures;
use crate::utils::context::TestContext;
use crate::utils::mock_server::MockServer;

const SECURE_URL: &str =
    "https://res.cloudinary.com/test-cloud/image/upload/v1715000000/certificates/abc123.png";

fn complete_request() -> Value {
    json!({
        "studentName": "Ana Pérez",
        "courseName": "Seguridad Web",
        "date": "2024-05-01",
    })
}

async fn context_with_unsigned_storage(mock_server: &MockServer) -> TestContext {
    TestContext::new(Some(fixtures::unsigned_cloudinary_config(
        &mock_server.uri(),
    )))
    .await
}

#[tokio::test]
async fn test_generate_certificate_success() {
    let mock_server = MockServer::new().await;
    mock_server.image_upload(SECURE_URL).await;
    let context = context_with_unsigned_storage(&mock_server).await;

    let resp = context
        .api
        .post("/api/certificate/v1/generate", complete_request())
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let url = body["certificateUrl"].as_str().unwrap();
    // the adapter's URL is passed through unmodified
    assert_eq!(url, SECURE_URL);
    assert!(url.starts_with("https://"));
    assert!(url.contains("/certificates/"));
}

#[tokio::test]
async fn test_generate_certificate_success_with_signed_storage() {
    let mock_server = MockServer::new().await;
    mock_server.image_upload(SECURE_URL).await;
    let context = TestContext::new(Some(fixtures::signed_cloudinary_config(&mock_server.uri())))
        .await;

    let resp = context
        .api
        .post("/api/certificate/v1/generate", complete_request())
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["certificateUrl"], SECURE_URL);
}

#[tokio::test]
async fn test_missing_field_rejected_without_upload() {
    let mock_server = MockServer::new().await;
    mock_server.refuse_image_upload().await;
    let context = context_with_unsigned_storage(&mock_server).await;

    for request in [
        json!({ "courseName": "Seguridad Web", "date": "2024-05-01" }),
        json!({ "studentName": "Ana Pérez", "date": "2024-05-01" }),
        json!({ "studentName": "Ana Pérez", "courseName": "Seguridad Web" }),
        json!({ "studentName": "", "courseName": "Seguridad Web", "date": "2024-05-01" }),
        json!({}),
    ] {
        let resp = context
            .api
            .post("/api/certificate/v1/generate", request)
            .await;
        assert_eq!(resp.status(), 400);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Missing required fields");
    }
}

#[tokio::test]
async fn test_identical_requests_create_distinct_objects() {
    let mock_server = MockServer::new().await;
    mock_server
        .image_upload_once(
            "https://res.cloudinary.com/test-cloud/image/upload/v1/certificates/first.png",
        )
        .await;
    mock_server
        .image_upload_once(
            "https://res.cloudinary.com/test-cloud/image/upload/v1/certificates/second.png",
        )
        .await;
    let context = context_with_unsigned_storage(&mock_server).await;

    let first: Value = context
        .api
        .post("/api/certificate/v1/generate", complete_request())
        .await
        .json()
        .await
        .unwrap();
    let second: Value = context
        .api
        .post("/api/certificate/v1/generate", complete_request())
        .await
        .json()
        .await
        .unwrap();

    assert_ne!(first["certificateUrl"], second["certificateUrl"]);
}

#[tokio::test]
async fn test_upload_failure_maps_to_server_error() {
    let mock_server = MockServer::new().await;
    mock_server
        .image_upload_failure(401, "Invalid upload preset")
        .await;
    let context = context_with_unsigned_storage(&mock_server).await;

    let resp = context
        .api
        .post("/api/certificate/v1/generate", complete_request())
        .await;
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Failed to upload image to Cloudinary");
    assert_eq!(body["details"]["error"]["message"], "Invalid upload preset");
}

#[tokio::test]
async fn test_no_storage_configured() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .post("/api/certificate/v1/generate", complete_request())
        .await;
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Cloudinary config missing");
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let mock_server = MockServer::new().await;
    mock_server.refuse_image_upload().await;
    let context = context_with_unsigned_storage(&mock_server).await;

    let resp = context
        .api
        .post(
            "/api/certificate/v1/generate",
            json!({ "studentName": 42, "courseName": "Seguridad Web", "date": "2024-05-01" }),
        )
        .await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing required fields");
}
