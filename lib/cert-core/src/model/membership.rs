use shared_types::{MembershipId, OrganisationId, UserId};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrganisationMember {
    pub id: MembershipId,
    pub organisation_id: OrganisationId,
    pub user_id: UserId,
    pub role: MemberRole,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberRole {
    Admin,
    Member,
}
