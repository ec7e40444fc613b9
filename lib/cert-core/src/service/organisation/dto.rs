use one_dto_mapper::From;
use shared_types::{MembershipId, OrganisationId, UserId};
use time::OffsetDateTime;

use crate::model::membership::{MemberRole, OrganisationMember};
use crate::model::organisation::Organisation;

#[derive(Clone, Debug)]
pub struct CreateOrganisationRequestDTO {
    pub id: Option<OrganisationId>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, From)]
#[from(Organisation)]
pub struct GetOrganisationDetailsResponseDTO {
    pub id: OrganisationId,
    pub name: String,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct AddMemberRequestDTO {
    pub user_id: UserId,
    pub role: MemberRole,
}

#[derive(Clone, Debug, From)]
#[from(OrganisationMember)]
pub struct GetMemberResponseDTO {
    pub id: MembershipId,
    pub user_id: UserId,
    pub role: MemberRole,
    pub created_date: OffsetDateTime,
}
