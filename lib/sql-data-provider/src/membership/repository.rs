use autometrics::autometrics;
use cert_core::model::membership::OrganisationMember;
use cert_core::repository::error::DataLayerError;
use cert_core::repository::membership_repository::MembershipRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{MembershipId, OrganisationId};

use super::MembershipProvider;
use crate::entity::organisation_member;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl MembershipRepository for MembershipProvider {
    async fn create_member(
        &self,
        member: OrganisationMember,
    ) -> Result<MembershipId, DataLayerError> {
        let member =
            organisation_member::Entity::insert(organisation_member::ActiveModel::from(member))
                .exec(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        Ok(member.last_insert_id)
    }

    async fn get_members(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<OrganisationMember>, DataLayerError> {
        let members: Vec<organisation_member::Model> = organisation_member::Entity::find()
            .filter(organisation_member::Column::OrganisationId.eq(organisation_id))
            .order_by_asc(organisation_member::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(members))
    }
}
