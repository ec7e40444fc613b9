use serde_json::json;
use wiremock::http::Method;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const UPLOAD_PATH: &str = "/v1_1/test-cloud/image/upload";

pub struct MockServer {
    mock: wiremock::MockServer,
}

impl MockServer {
    pub async fn new() -> Self {
        let mock = wiremock::MockServer::start().await;
        Self { mock }
    }

    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    pub async fn image_upload(&self, secure_url: &str) {
        Mock::given(method(Method::POST))
            .and(path(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "secure_url": secure_url,
                "public_id": "certificates/mocked",
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    /// One-shot success; mount several to simulate distinct stored objects.
    pub async fn image_upload_once(&self, secure_url: &str) {
        Mock::given(method(Method::POST))
            .and(path(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "secure_url": secure_url,
                "public_id": "certificates/mocked",
            })))
            .up_to_n_times(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn image_upload_failure(&self, status: u16, message: &str) {
        Mock::given(method(Method::POST))
            .and(path(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "message": message },
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn refuse_image_upload(&self) {
        Mock::given(method(Method::POST))
            .and(path(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.mock)
            .await;
    }
}
