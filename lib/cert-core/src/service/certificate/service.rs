use super::CertificateService;
use super::dto::{GenerateCertificateRequestDTO, GenerateCertificateResponseDTO};
use super::validator::validate_required_fields;
use crate::provider::image_storage::error::ImageStorageError;
use crate::service::error::ServiceError;

/// Logical folder under which all generated certificates are stored.
pub const CERTIFICATE_FOLDER: &str = "certificates";

impl CertificateService {
    /// Runs the generation pipeline: validate → render → upload. The
    /// returned URL is the upload adapter's result, unmodified. Every
    /// invocation creates a new remote object; there is no deduplication
    /// and no retry.
    pub async fn generate_certificate(
        &self,
        request: GenerateCertificateRequestDTO,
    ) -> Result<GenerateCertificateResponseDTO, ServiceError> {
        let certificate = validate_required_fields(&request)?;

        let image_storage = self
            .image_storage
            .clone()
            .ok_or(ImageStorageError::ConfigurationMissing)?;

        // rasterization is CPU-bound, keep it off the async runtime
        let renderer = self.renderer.clone();
        let image = tokio::task::spawn_blocking(move || renderer.render(&certificate))
            .await
            .map_err(|error| ServiceError::GeneralRuntimeError(error.to_string()))??;

        let uploaded = image_storage
            .upload_image(CERTIFICATE_FOLDER, image)
            .await?;

        Ok(GenerateCertificateResponseDTO {
            certificate_url: uploaded.url,
        })
    }
}
