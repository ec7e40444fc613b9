use std::sync::Arc;

use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::config::core_config::CoreConfig;
use crate::provider::certificate_renderer::{FixedLayoutRenderer, RenderError};
use crate::provider::http_client::HttpClient;
use crate::provider::image_storage::image_storage_from_config;
use crate::repository::DataRepository;
use crate::service::certificate::CertificateService;
use crate::service::certificate_template::CertificateTemplateService;
use crate::service::organisation::OrganisationService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Debug, Error)]
pub enum CoreInitError {
    #[error(transparent)]
    ConfigValidation(#[from] ConfigValidationError),
    #[error("Renderer initialization error: `{0}`")]
    Renderer(#[from] RenderError),
}

/// Entry point to the certificate management core. All services and their
/// collaborators are constructed here and dependency-injected; no
/// module-level state exists anywhere in the crate.
#[derive(Clone)]
pub struct CertCore {
    pub organisation_service: OrganisationService,
    pub certificate_template_service: CertificateTemplateService,
    pub certificate_service: CertificateService,
}

impl CertCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        core_config: CoreConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<CertCore, CoreInitError> {
        let image_storage = image_storage_from_config(&core_config.image_storage, http_client)?;
        let renderer = Arc::new(FixedLayoutRenderer::new()?);

        Ok(CertCore {
            organisation_service: OrganisationService::new(
                data_provider.get_organisation_repository(),
                data_provider.get_membership_repository(),
            ),
            certificate_template_service: CertificateTemplateService::new(
                data_provider.get_certificate_template_repository(),
                data_provider.get_organisation_repository(),
            ),
            certificate_service: CertificateService::new(renderer, image_storage),
        })
    }
}
