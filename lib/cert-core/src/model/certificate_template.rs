use shared_types::{OrganisationId, TemplateId};
use time::OffsetDateTime;

/// A named certificate layout owned by an organisation. The visual layout
/// itself is fixed; templates carry the descriptive metadata shown in the
/// management API.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateTemplate {
    pub id: TemplateId,
    pub organisation_id: OrganisationId,
    pub name: String,
    pub description: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}
