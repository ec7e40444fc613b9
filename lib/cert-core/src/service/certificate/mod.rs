use std::sync::Arc;

use crate::provider::certificate_renderer::CertificateRenderer;
use crate::provider::image_storage::ImageStorage;

pub mod dto;
pub mod service;
pub(crate) mod validator;

/// Certificate generation pipeline: validate → render → upload → respond.
/// Stateless; nothing survives a single call apart from the remote object
/// created by the upload.
#[derive(Clone)]
pub struct CertificateService {
    renderer: Arc<dyn CertificateRenderer>,
    image_storage: Option<Arc<dyn ImageStorage>>,
}

impl CertificateService {
    pub fn new(
        renderer: Arc<dyn CertificateRenderer>,
        image_storage: Option<Arc<dyn ImageStorage>>,
    ) -> Self {
        Self {
            renderer,
            image_storage,
        }
    }
}
