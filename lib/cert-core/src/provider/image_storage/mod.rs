pub mod cloudinary;
pub mod error;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ConfigValidationError;
use crate::config::core_config::{ImageStorageConfig, ImageStorageType};
use crate::provider::http_client::HttpClient;
use crate::provider::image_storage::cloudinary::{
    SignedCloudinaryStorage, UnsignedCloudinaryStorage,
};
use crate::provider::image_storage::error::ImageStorageError;

/// Boundary to the remote object storage holding generated certificate
/// images. Implementations return a stable, publicly resolvable URL; a
/// repeated upload of identical bytes creates a new remote object.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn upload_image(
        &self,
        folder: &str,
        image: Vec<u8>,
    ) -> Result<UploadedImage, ImageStorageError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}

/// Selects the image storage from configuration: the enabled entry with
/// the lowest `order` wins. Returns `None` when nothing is enabled; the
/// caller surfaces that as an upload-time failure.
pub(crate) fn image_storage_from_config(
    config: &ImageStorageConfig,
    client: Arc<dyn HttpClient>,
) -> Result<Option<Arc<dyn ImageStorage>>, ConfigValidationError> {
    let mut enabled: Vec<_> = config.iter().filter(|(_, fields)| fields.enabled).collect();
    enabled.sort_by_key(|(_, fields)| fields.order.unwrap_or(u64::MAX));

    let Some((key, fields)) = enabled.into_iter().next() else {
        return Ok(None);
    };

    let invalid_params = |source| ConfigValidationError::InvalidParams {
        key: key.to_owned(),
        source,
    };

    let storage: Arc<dyn ImageStorage> = match fields.r#type {
        ImageStorageType::CloudinarySigned => Arc::new(SignedCloudinaryStorage::new(
            fields.deserialize_params().map_err(invalid_params)?,
            client,
        )),
        ImageStorageType::CloudinaryUnsigned => Arc::new(UnsignedCloudinaryStorage::new(
            fields.deserialize_params().map_err(invalid_params)?,
            client,
        )),
    };

    tracing::debug!("Using image storage: {}", fields.r#type);

    Ok(Some(storage))
}
