use crate::utils::client;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let context = TestContext::new(None).await;

    let resp = client()
        .get(format!("{}/api/organisation/v1", context.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let context = TestContext::new(None).await;

    let resp = client()
        .post(format!(
            "{}/api/certificate/v1/generate",
            context.base_url
        ))
        .bearer_auth("wrong")
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_technical_endpoints_need_no_token() {
    let context = TestContext::new(None).await;

    let resp = client()
        .get(format!("{}/health", context.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 204);
}
