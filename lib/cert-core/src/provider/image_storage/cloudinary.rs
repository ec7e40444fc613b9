use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{ImageStorage, UploadedImage};
use crate::provider::http_client::HttpClient;
use crate::provider::image_storage::error::ImageStorageError;

const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Server-held credentials; every upload is signed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedCloudinaryParams {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: SecretString,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

/// Unauthenticated upload through a preconfigured upload preset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedCloudinaryParams {
    pub cloud_name: String,
    pub upload_preset: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

pub struct SignedCloudinaryStorage {
    params: SignedCloudinaryParams,
    client: Arc<dyn HttpClient>,
}

impl SignedCloudinaryStorage {
    pub fn new(params: SignedCloudinaryParams, client: Arc<dyn HttpClient>) -> Self {
        Self { params, client }
    }
}

#[async_trait]
impl ImageStorage for SignedCloudinaryStorage {
    async fn upload_image(
        &self,
        folder: &str,
        image: Vec<u8>,
    ) -> Result<UploadedImage, ImageStorageError> {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp();

        // params to sign, concatenated in alphabetical order. Cloudinary
        // detects the digest algorithm from the signature length.
        let to_sign = format!(
            "folder={folder}&timestamp={timestamp}{}",
            self.params.api_secret.expose_secret()
        );
        let signature = hex::encode(Sha256::digest(to_sign.as_bytes()));

        let mut form = MultipartForm::new();
        form.text("api_key", &self.params.api_key);
        form.text("folder", folder);
        form.text("signature", &signature);
        form.text("timestamp", &timestamp.to_string());
        form.file("file", "certificate.png", "image/png", &image);

        send_upload(
            &*self.client,
            &upload_url(&self.params.api_base_url, &self.params.cloud_name),
            form,
        )
        .await
    }
}

pub struct UnsignedCloudinaryStorage {
    params: UnsignedCloudinaryParams,
    client: Arc<dyn HttpClient>,
}

impl UnsignedCloudinaryStorage {
    pub fn new(params: UnsignedCloudinaryParams, client: Arc<dyn HttpClient>) -> Self {
        Self { params, client }
    }
}

#[async_trait]
impl ImageStorage for UnsignedCloudinaryStorage {
    async fn upload_image(
        &self,
        folder: &str,
        image: Vec<u8>,
    ) -> Result<UploadedImage, ImageStorageError> {
        let mut form = MultipartForm::new();
        form.text("folder", folder);
        form.text("upload_preset", &self.params.upload_preset);
        form.file("file", "certificate.png", "image/png", &image);

        send_upload(
            &*self.client,
            &upload_url(&self.params.api_base_url, &self.params.cloud_name),
            form,
        )
        .await
    }
}

fn upload_url(api_base_url: &str, cloud_name: &str) -> String {
    format!(
        "{}/v1_1/{cloud_name}/image/upload",
        api_base_url.trim_end_matches('/')
    )
}

async fn send_upload(
    client: &dyn HttpClient,
    url: &str,
    form: MultipartForm,
) -> Result<UploadedImage, ImageStorageError> {
    let (content_type, body) = form.finish();

    let response = client
        .post(url)
        .header("Content-Type", &content_type)
        .body(body)
        .send()
        .await?;

    if !response.status.is_success() {
        let message = match serde_json::from_slice::<CloudinaryErrorResponse>(&response.body) {
            Ok(error) => error.error.message,
            Err(_) => format!("HTTP {}", response.status),
        };
        let details = serde_json::from_slice::<serde_json::Value>(&response.body).ok();

        return Err(ImageStorageError::Upstream { message, details });
    }

    let uploaded: CloudinaryUploadResponse = response.json()?;

    Ok(UploadedImage {
        url: uploaded.secure_url,
        public_id: uploaded.public_id,
    })
}

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorResponse {
    error: CloudinaryErrorBody,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    message: String,
}

struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    fn new() -> Self {
        Self {
            boundary: format!("----cert-core-{}", Uuid::new_v4().simple()),
            body: vec![],
        }
    }

    fn text(&mut self, name: &str, value: &str) {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
    }

    fn file(&mut self, name: &str, file_name: &str, content_type: &str, content: &[u8]) {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
    }

    fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}
