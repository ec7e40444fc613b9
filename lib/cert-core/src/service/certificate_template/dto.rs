use one_dto_mapper::From;
use shared_types::{OrganisationId, TemplateId};
use time::OffsetDateTime;

use crate::model::certificate_template::CertificateTemplate;

#[derive(Clone, Debug)]
pub struct CreateCertificateTemplateRequestDTO {
    pub organisation_id: OrganisationId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, From)]
#[from(CertificateTemplate)]
pub struct GetCertificateTemplateResponseDTO {
    pub id: TemplateId,
    pub organisation_id: OrganisationId,
    pub name: String,
    pub description: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}
