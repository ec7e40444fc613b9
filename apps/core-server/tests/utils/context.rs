use core_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use crate::fixtures;

pub struct TestContext {
    pub api: Client,
    pub base_url: String,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new(additional_config: Option<String>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(&base_url, additional_config);
        let db = fixtures::create_db(&config).await;

        let _handle = tokio::spawn(async move { start_server(listener, config, db).await });

        Self {
            api: Client::new(base_url.clone(), "test".into()),
            base_url,
            _handle,
        }
    }

    /// Creates an organisation through the API and returns its id.
    pub async fn create_organisation(&self, name: &str) -> String {
        let resp = self
            .api
            .post("/api/organisation/v1", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = resp.json().await.unwrap();
        body["id"].as_str().unwrap().to_string()
    }
}
