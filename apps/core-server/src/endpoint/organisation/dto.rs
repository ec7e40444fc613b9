use cert_core::model::membership::MemberRole;
use cert_core::service::organisation::dto::{
    AddMemberRequestDTO, CreateOrganisationRequestDTO, GetMemberResponseDTO,
    GetOrganisationDetailsResponseDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{MembershipId, OrganisationId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Default, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateOrganisationRequestDTO)]
pub(crate) struct CreateOrganisationRequestRestDTO {
    pub id: Option<OrganisationId>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrganisationResponseRestDTO {
    pub id: OrganisationId,
}

impl From<OrganisationId> for CreateOrganisationResponseRestDTO {
    fn from(id: OrganisationId) -> Self {
        Self { id }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetOrganisationDetailsResponseDTO)]
pub(crate) struct GetOrganisationDetailsResponseRestDTO {
    pub id: OrganisationId,
    pub name: String,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(AddMemberRequestDTO)]
pub(crate) struct AddMemberRequestRestDTO {
    pub user_id: UserId,
    pub role: MemberRoleRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from(MemberRole)]
#[into(MemberRole)]
pub(crate) enum MemberRoleRestEnum {
    Admin,
    Member,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateMemberResponseRestDTO {
    pub id: MembershipId,
}

impl From<MembershipId> for CreateMemberResponseRestDTO {
    fn from(id: MembershipId) -> Self {
        Self { id }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetMemberResponseDTO)]
pub(crate) struct GetMemberResponseRestDTO {
    pub id: MembershipId,
    pub user_id: UserId,
    pub role: MemberRoleRestEnum,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
}
