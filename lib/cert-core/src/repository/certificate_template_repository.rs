use shared_types::{OrganisationId, TemplateId};

use super::error::DataLayerError;
use crate::model::certificate_template::CertificateTemplate;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CertificateTemplateRepository: Send + Sync {
    async fn create_certificate_template(
        &self,
        request: CertificateTemplate,
    ) -> Result<TemplateId, DataLayerError>;

    async fn get_certificate_template(
        &self,
        id: &TemplateId,
    ) -> Result<Option<CertificateTemplate>, DataLayerError>;

    /// Returns non-deleted templates of the given organisation.
    async fn get_certificate_template_list(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<CertificateTemplate>, DataLayerError>;

    /// Marks the template as deleted, keeping the row.
    async fn delete_certificate_template(&self, id: &TemplateId) -> Result<(), DataLayerError>;
}
