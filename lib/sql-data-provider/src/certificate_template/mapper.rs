use cert_core::model::certificate_template::CertificateTemplate;
use sea_orm::Set;

use crate::entity::certificate_template;

impl From<CertificateTemplate> for certificate_template::ActiveModel {
    fn from(value: CertificateTemplate) -> Self {
        Self {
            id: Set(value.id),
            organisation_id: Set(value.organisation_id),
            name: Set(value.name),
            description: Set(value.description),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            deleted_at: Set(value.deleted_at),
        }
    }
}
