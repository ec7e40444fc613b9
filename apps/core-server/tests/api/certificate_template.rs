use serde_json::{Value, json};
use uuid::Uuid;

use crate::utils::context::TestContext;

async fn create_template(context: &TestContext, organisation_id: &str, name: &str) -> String {
    let resp = context
        .api
        .post(
            "/api/certificate-template/v1",
            json!({
                "organisationId": organisation_id,
                "name": name,
                "description": "Completion certificate",
            }),
        )
        .await;
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_and_get_certificate_template() {
    let context = TestContext::new(None).await;
    let organisation_id = context.create_organisation("org").await;

    let id = create_template(&context, &organisation_id, "Course completion").await;

    let resp = context
        .api
        .get(&format!("/api/certificate-template/v1/{id}"))
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Course completion");
    assert_eq!(body["organisationId"].as_str().unwrap(), organisation_id);
    assert_eq!(body["description"], "Completion certificate");
}

#[tokio::test]
async fn test_create_template_for_unknown_organisation() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .post(
            "/api/certificate-template/v1",
            json!({ "organisationId": Uuid::new_v4(), "name": "any" }),
        )
        .await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_create_template_duplicate_name_fails() {
    let context = TestContext::new(None).await;
    let organisation_id = context.create_organisation("org").await;

    create_template(&context, &organisation_id, "Course completion").await;

    let resp = context
        .api
        .post(
            "/api/certificate-template/v1",
            json!({ "organisationId": organisation_id, "name": "Course completion" }),
        )
        .await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "Template002");
}

#[tokio::test]
async fn test_list_templates_scoped_to_organisation() {
    let context = TestContext::new(None).await;
    let organisation_id = context.create_organisation("org").await;
    let other_organisation = context.create_organisation("other").await;

    create_template(&context, &organisation_id, "mine").await;
    create_template(&context, &other_organisation, "theirs").await;

    let resp = context
        .api
        .get(&format!(
            "/api/certificate-template/v1?organisationId={organisation_id}"
        ))
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let templates = body.as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["name"], "mine");
}

#[tokio::test]
async fn test_delete_certificate_template() {
    let context = TestContext::new(None).await;
    let organisation_id = context.create_organisation("org").await;
    let id = create_template(&context, &organisation_id, "Course completion").await;

    let resp = context
        .api
        .delete(&format!("/api/certificate-template/v1/{id}"))
        .await;
    assert_eq!(resp.status(), 204);

    let resp = context
        .api
        .get(&format!("/api/certificate-template/v1/{id}"))
        .await;
    assert_eq!(resp.status(), 404);

    // the name becomes available again
    create_template(&context, &organisation_id, "Course completion").await;
}

#[tokio::test]
async fn test_delete_unknown_template_not_found() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .delete(&format!("/api/certificate-template/v1/{}", Uuid::new_v4()))
        .await;
    assert_eq!(resp.status(), 404);
}
