use shared_types::{MembershipId, OrganisationId};

use super::error::DataLayerError;
use crate::model::membership::OrganisationMember;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn create_member(
        &self,
        request: OrganisationMember,
    ) -> Result<MembershipId, DataLayerError>;

    async fn get_members(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<OrganisationMember>, DataLayerError>;
}
