use thiserror::Error;

use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum ImageStorageError {
    #[error("image storage is not configured")]
    ConfigurationMissing,

    #[error("upload rejected by Cloudinary: {message}")]
    Upstream {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] http_client::Error),
}
