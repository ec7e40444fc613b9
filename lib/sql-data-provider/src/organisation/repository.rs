use autometrics::autometrics;
use cert_core::model::organisation::Organisation;
use cert_core::repository::error::DataLayerError;
use cert_core::repository::organisation_repository::OrganisationRepository;
use one_dto_mapper::convert_inner;
use sea_orm::EntityTrait;
use shared_types::OrganisationId;

use super::OrganisationProvider;
use crate::entity::organisation;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl OrganisationRepository for OrganisationProvider {
    async fn create_organisation(
        &self,
        organisation: Organisation,
    ) -> Result<OrganisationId, DataLayerError> {
        let organisation =
            organisation::Entity::insert(organisation::ActiveModel::from(organisation))
                .exec(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        Ok(organisation.last_insert_id)
    }

    async fn get_organisation(
        &self,
        id: &OrganisationId,
    ) -> Result<Option<Organisation>, DataLayerError> {
        let organisation = organisation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(organisation))
    }

    async fn get_organisation_list(&self) -> Result<Vec<Organisation>, DataLayerError> {
        let organisations: Vec<organisation::Model> = organisation::Entity::find()
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(organisations))
    }
}
