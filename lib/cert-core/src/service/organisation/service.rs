use one_dto_mapper::convert_inner;
use shared_types::{MembershipId, OrganisationId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::OrganisationService;
use super::dto::{
    AddMemberRequestDTO, CreateOrganisationRequestDTO, GetMemberResponseDTO,
    GetOrganisationDetailsResponseDTO,
};
use crate::model::membership::OrganisationMember;
use crate::model::organisation::Organisation;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl OrganisationService {
    /// Returns all existing organisations
    pub async fn get_organisation_list(
        &self,
    ) -> Result<Vec<GetOrganisationDetailsResponseDTO>, ServiceError> {
        let organisations = self.organisation_repository.get_organisation_list().await?;
        Ok(convert_inner(organisations))
    }

    /// Returns details of an organisation
    pub async fn get_organisation(
        &self,
        id: &OrganisationId,
    ) -> Result<GetOrganisationDetailsResponseDTO, ServiceError> {
        let organisation = self.organisation_repository.get_organisation(id).await?;

        let Some(organisation) = organisation else {
            return Err(EntityNotFoundError::Organisation(*id).into());
        };

        Ok(organisation.into())
    }

    /// Accepts an optional id and optional name for a new organisation and
    /// returns the created organisation id. A missing id is generated; a
    /// missing name defaults to the textual representation of the id.
    pub async fn create_organisation(
        &self,
        request: CreateOrganisationRequestDTO,
    ) -> Result<OrganisationId, ServiceError> {
        let now = OffsetDateTime::now_utc();
        let id = request.id.unwrap_or_else(|| Uuid::new_v4().into());
        let name = request.name.unwrap_or_else(|| id.to_string());

        let result = self
            .organisation_repository
            .create_organisation(Organisation {
                id,
                name,
                created_date: now,
                last_modified: now,
            })
            .await;

        match result {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => {
                Err(BusinessLogicError::OrganisationAlreadyExists.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Registers the auth-provider subject as a member of the organisation.
    pub async fn add_member(
        &self,
        organisation_id: &OrganisationId,
        request: AddMemberRequestDTO,
    ) -> Result<MembershipId, ServiceError> {
        self.ensure_organisation_exists(organisation_id).await?;

        let result = self
            .membership_repository
            .create_member(OrganisationMember {
                id: Uuid::new_v4().into(),
                organisation_id: *organisation_id,
                user_id: request.user_id.clone(),
                role: request.role,
                created_date: OffsetDateTime::now_utc(),
            })
            .await;

        match result {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => Err(BusinessLogicError::MemberAlreadyExists {
                organisation: *organisation_id,
                user: request.user_id,
            }
            .into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Returns all members of an organisation
    pub async fn get_members(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<GetMemberResponseDTO>, ServiceError> {
        self.ensure_organisation_exists(organisation_id).await?;

        let members = self
            .membership_repository
            .get_members(organisation_id)
            .await?;
        Ok(convert_inner(members))
    }

    async fn ensure_organisation_exists(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<(), ServiceError> {
        self.organisation_repository
            .get_organisation(organisation_id)
            .await?
            .ok_or(EntityNotFoundError::Organisation(*organisation_id))?;
        Ok(())
    }
}
