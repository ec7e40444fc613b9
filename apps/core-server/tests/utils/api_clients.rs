use reqwest::Response;
use serde_json::Value;

use super::client;

pub struct Client {
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(base_url: String, token: String) -> Self {
        Self { base_url, token }
    }

    pub async fn get(&self, path: &str) -> Response {
        client()
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post(&self, path: &str, body: Value) -> Response {
        client()
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn delete(&self, path: &str) -> Response {
        client()
            .delete(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await
            .expect("request failed")
    }
}
