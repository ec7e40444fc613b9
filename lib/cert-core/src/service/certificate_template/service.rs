use one_dto_mapper::convert_inner;
use shared_types::{OrganisationId, TemplateId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::CertificateTemplateService;
use super::dto::{CreateCertificateTemplateRequestDTO, GetCertificateTemplateResponseDTO};
use super::validator::validate_template_name;
use crate::model::certificate_template::CertificateTemplate;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl CertificateTemplateService {
    /// Creates a certificate template within an existing organisation and
    /// returns the new template id.
    pub async fn create_certificate_template(
        &self,
        request: CreateCertificateTemplateRequestDTO,
    ) -> Result<TemplateId, ServiceError> {
        validate_template_name(&request.name)?;

        self.organisation_repository
            .get_organisation(&request.organisation_id)
            .await?
            .ok_or(EntityNotFoundError::Organisation(request.organisation_id))?;

        // the unique index treats NULL deleted_at values as distinct, so
        // live-name collisions are checked here
        let existing = self
            .certificate_template_repository
            .get_certificate_template_list(&request.organisation_id)
            .await?;
        if existing.iter().any(|template| template.name == request.name) {
            return Err(BusinessLogicError::TemplateNameAlreadyTaken(request.name).into());
        }

        let now = OffsetDateTime::now_utc();
        let result = self
            .certificate_template_repository
            .create_certificate_template(CertificateTemplate {
                id: Uuid::new_v4().into(),
                organisation_id: request.organisation_id,
                name: request.name.clone(),
                description: request.description,
                created_date: now,
                last_modified: now,
                deleted_at: None,
            })
            .await;

        match result {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => {
                Err(BusinessLogicError::TemplateNameAlreadyTaken(request.name).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns details of a template. Soft-deleted templates are reported
    /// as missing.
    pub async fn get_certificate_template(
        &self,
        id: &TemplateId,
    ) -> Result<GetCertificateTemplateResponseDTO, ServiceError> {
        let template = self
            .certificate_template_repository
            .get_certificate_template(id)
            .await?;

        match template {
            Some(template) if template.deleted_at.is_none() => Ok(template.into()),
            _ => Err(EntityNotFoundError::CertificateTemplate(*id).into()),
        }
    }

    /// Returns all non-deleted templates of an organisation
    pub async fn get_certificate_template_list(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<GetCertificateTemplateResponseDTO>, ServiceError> {
        self.organisation_repository
            .get_organisation(organisation_id)
            .await?
            .ok_or(EntityNotFoundError::Organisation(*organisation_id))?;

        let templates = self
            .certificate_template_repository
            .get_certificate_template_list(organisation_id)
            .await?;
        Ok(convert_inner(templates))
    }

    /// Soft-deletes a template
    pub async fn delete_certificate_template(&self, id: &TemplateId) -> Result<(), ServiceError> {
        let result = self
            .certificate_template_repository
            .delete_certificate_template(id)
            .await;

        match result {
            Ok(()) => Ok(()),
            Err(DataLayerError::RecordNotUpdated | DataLayerError::RecordNotFound) => {
                Err(EntityNotFoundError::CertificateTemplate(*id).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
