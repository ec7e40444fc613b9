use serde_json::{Value, json};
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_and_get_organisation() {
    let context = TestContext::new(None).await;

    let id = context.create_organisation("School of Rust").await;

    let resp = context.api.get(&format!("/api/organisation/v1/{id}")).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_str().unwrap(), id);
    assert_eq!(body["name"], "School of Rust");
    assert!(body["createdDate"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_organisation_with_provided_id() {
    let context = TestContext::new(None).await;
    let id = Uuid::new_v4().to_string();

    let resp = context
        .api
        .post("/api/organisation/v1", json!({ "id": id, "name": "org" }))
        .await;
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn test_create_organisation_twice_fails() {
    let context = TestContext::new(None).await;

    context.create_organisation("org").await;

    let resp = context
        .api
        .post("/api/organisation/v1", json!({ "name": "org" }))
        .await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "Organisation002");
}

#[tokio::test]
async fn test_get_unknown_organisation_not_found() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .get(&format!("/api/organisation/v1/{}", Uuid::new_v4()))
        .await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_list_organisations() {
    let context = TestContext::new(None).await;

    context.create_organisation("first").await;
    context.create_organisation("second").await;

    let resp = context.api.get("/api/organisation/v1").await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_add_and_list_members() {
    let context = TestContext::new(None).await;
    let id = context.create_organisation("org").await;

    let resp = context
        .api
        .post(
            &format!("/api/organisation/v1/{id}/member"),
            json!({ "userId": "auth0|123", "role": "ADMIN" }),
        )
        .await;
    assert_eq!(resp.status(), 201);

    let resp = context
        .api
        .get(&format!("/api/organisation/v1/{id}/member"))
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["userId"], "auth0|123");
    assert_eq!(members[0]["role"], "ADMIN");
}

#[tokio::test]
async fn test_add_member_twice_fails() {
    let context = TestContext::new(None).await;
    let id = context.create_organisation("org").await;

    let member = json!({ "userId": "auth0|123", "role": "MEMBER" });
    let resp = context
        .api
        .post(&format!("/api/organisation/v1/{id}/member"), member.clone())
        .await;
    assert_eq!(resp.status(), 201);

    let resp = context
        .api
        .post(&format!("/api/organisation/v1/{id}/member"), member)
        .await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "Member001");
}

#[tokio::test]
async fn test_add_member_to_unknown_organisation() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .post(
            &format!("/api/organisation/v1/{}/member", Uuid::new_v4()),
            json!({ "userId": "auth0|123", "role": "MEMBER" }),
        )
        .await;
    assert_eq!(resp.status(), 404);
}
