use cert_core::model::membership::OrganisationMember;
use sea_orm::Set;

use crate::entity::organisation_member;

impl From<OrganisationMember> for organisation_member::ActiveModel {
    fn from(value: OrganisationMember) -> Self {
        Self {
            id: Set(value.id),
            organisation_id: Set(value.organisation_id),
            user_id: Set(value.user_id),
            role: Set(value.role.into()),
            created_date: Set(value.created_date),
        }
    }
}
