use cert_core::service::certificate_template::dto::{
    CreateCertificateTemplateRequestDTO, GetCertificateTemplateResponseDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{OrganisationId, TemplateId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateCertificateTemplateRequestDTO)]
pub(crate) struct CreateCertificateTemplateRequestRestDTO {
    pub organisation_id: OrganisationId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCertificateTemplateResponseRestDTO {
    pub id: TemplateId,
}

impl From<TemplateId> for CreateCertificateTemplateResponseRestDTO {
    fn from(id: TemplateId) -> Self {
        Self { id }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetCertificateTemplateResponseDTO)]
pub(crate) struct GetCertificateTemplateResponseRestDTO {
    pub id: TemplateId,
    pub organisation_id: OrganisationId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CertificateTemplatesFilterQueryParamsRest {
    /// Return templates of this organisation.
    pub organisation_id: OrganisationId,
}
