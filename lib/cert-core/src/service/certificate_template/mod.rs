use std::sync::Arc;

use crate::repository::certificate_template_repository::CertificateTemplateRepository;
use crate::repository::organisation_repository::OrganisationRepository;

pub mod dto;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct CertificateTemplateService {
    certificate_template_repository: Arc<dyn CertificateTemplateRepository>,
    organisation_repository: Arc<dyn OrganisationRepository>,
}

impl CertificateTemplateService {
    pub fn new(
        certificate_template_repository: Arc<dyn CertificateTemplateRepository>,
        organisation_repository: Arc<dyn OrganisationRepository>,
    ) -> Self {
        Self {
            certificate_template_repository,
            organisation_repository,
        }
    }
}

#[cfg(test)]
mod test;
