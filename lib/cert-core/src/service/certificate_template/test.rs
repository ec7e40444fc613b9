use mockall::predicate::*;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

use super::CertificateTemplateService;
use super::dto::CreateCertificateTemplateRequestDTO;
use crate::model::certificate_template::CertificateTemplate;
use crate::model::organisation::Organisation;
use crate::repository::certificate_template_repository::MockCertificateTemplateRepository;
use crate::repository::error::DataLayerError;
use crate::repository::organisation_repository::MockOrganisationRepository;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};

fn setup_service(
    certificate_template_repository: MockCertificateTemplateRepository,
    organisation_repository: MockOrganisationRepository,
) -> CertificateTemplateService {
    CertificateTemplateService::new(
        Arc::new(certificate_template_repository),
        Arc::new(organisation_repository),
    )
}

fn generic_organisation() -> Organisation {
    let now = OffsetDateTime::now_utc();
    Organisation {
        id: Uuid::new_v4().into(),
        name: "org".to_string(),
        created_date: now,
        last_modified: now,
    }
}

fn generic_template() -> CertificateTemplate {
    let now = OffsetDateTime::now_utc();
    CertificateTemplate {
        id: Uuid::new_v4().into(),
        organisation_id: Uuid::new_v4().into(),
        name: "Course completion".to_string(),
        description: None,
        created_date: now,
        last_modified: now,
        deleted_at: None,
    }
}

fn organisation_repository_returning(
    organisation: Option<Organisation>,
) -> MockOrganisationRepository {
    let mut repository = MockOrganisationRepository::default();
    repository
        .expect_get_organisation()
        .returning(move |_| Ok(organisation.clone()));
    repository
}

#[tokio::test]
async fn test_create_certificate_template_success() {
    let organisation = generic_organisation();
    let organisation_id = organisation.id;

    let mut repository = MockCertificateTemplateRepository::default();
    repository
        .expect_get_certificate_template_list()
        .returning(|_| Ok(vec![]));
    repository
        .expect_create_certificate_template()
        .times(1)
        .withf(move |template| {
            template.organisation_id == organisation_id
                && template.name == "Course completion"
                && template.deleted_at.is_none()
        })
        .returning(|template| Ok(template.id));

    let service = setup_service(
        repository,
        organisation_repository_returning(Some(organisation)),
    );

    service
        .create_certificate_template(CreateCertificateTemplateRequestDTO {
            organisation_id,
            name: "Course completion".to_string(),
            description: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_certificate_template_empty_name() {
    let mut repository = MockCertificateTemplateRepository::default();
    repository.expect_create_certificate_template().never();

    let service = setup_service(
        repository,
        organisation_repository_returning(Some(generic_organisation())),
    );

    let result = service
        .create_certificate_template(CreateCertificateTemplateRequestDTO {
            organisation_id: Uuid::new_v4().into(),
            name: "".to_string(),
            description: None,
        })
        .await;
    assert!(result.is_err_and(|e| matches!(
        e,
        ServiceError::Validation(ValidationError::TemplateNameMissing)
    )));
}

#[tokio::test]
async fn test_create_certificate_template_missing_organisation() {
    let mut repository = MockCertificateTemplateRepository::default();
    repository.expect_create_certificate_template().never();

    let service = setup_service(repository, organisation_repository_returning(None));

    let result = service
        .create_certificate_template(CreateCertificateTemplateRequestDTO {
            organisation_id: Uuid::new_v4().into(),
            name: "Course completion".to_string(),
            description: None,
        })
        .await;
    assert!(result.is_err_and(|e| matches!(
        e,
        ServiceError::EntityNotFound(EntityNotFoundError::Organisation(_))
    )));
}

#[tokio::test]
async fn test_create_certificate_template_name_taken() {
    let mut repository = MockCertificateTemplateRepository::default();
    repository
        .expect_get_certificate_template_list()
        .returning(|_| {
            Ok(vec![CertificateTemplate {
                name: "Course completion".to_string(),
                ..generic_template()
            }])
        });
    repository.expect_create_certificate_template().never();

    let service = setup_service(
        repository,
        organisation_repository_returning(Some(generic_organisation())),
    );

    let result = service
        .create_certificate_template(CreateCertificateTemplateRequestDTO {
            organisation_id: Uuid::new_v4().into(),
            name: "Course completion".to_string(),
            description: None,
        })
        .await;
    assert!(result.is_err_and(|e| matches!(
        e,
        ServiceError::BusinessLogic(BusinessLogicError::TemplateNameAlreadyTaken(_))
    )));
}

#[tokio::test]
async fn test_get_certificate_template_success() {
    let template = generic_template();

    let mut repository = MockCertificateTemplateRepository::default();
    {
        let clone = template.clone();
        repository
            .expect_get_certificate_template()
            .times(1)
            .with(eq(template.id))
            .returning(move |_| Ok(Some(clone.clone())));
    }

    let service = setup_service(repository, MockOrganisationRepository::default());

    let result = service
        .get_certificate_template(&template.id)
        .await
        .unwrap();
    assert_eq!(result.id, template.id);
}

#[tokio::test]
async fn test_get_certificate_template_deleted() {
    let template = CertificateTemplate {
        deleted_at: Some(OffsetDateTime::now_utc()),
        ..generic_template()
    };

    let mut repository = MockCertificateTemplateRepository::default();
    {
        let clone = template.clone();
        repository
            .expect_get_certificate_template()
            .returning(move |_| Ok(Some(clone.clone())));
    }

    let service = setup_service(repository, MockOrganisationRepository::default());

    let result = service.get_certificate_template(&template.id).await;
    assert!(result.is_err_and(|e| matches!(
        e,
        ServiceError::EntityNotFound(EntityNotFoundError::CertificateTemplate(_))
    )));
}

#[tokio::test]
async fn test_get_certificate_template_list_success() {
    let organisation = generic_organisation();
    let organisation_id = organisation.id;

    let mut repository = MockCertificateTemplateRepository::default();
    repository
        .expect_get_certificate_template_list()
        .times(1)
        .with(eq(organisation_id))
        .returning(|_| Ok(vec![generic_template()]));

    let service = setup_service(
        repository,
        organisation_repository_returning(Some(organisation)),
    );

    let result = service
        .get_certificate_template_list(&organisation_id)
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_delete_certificate_template_missing() {
    let mut repository = MockCertificateTemplateRepository::default();
    repository
        .expect_delete_certificate_template()
        .returning(|_| Err(DataLayerError::RecordNotUpdated));

    let service = setup_service(repository, MockOrganisationRepository::default());

    let result = service
        .delete_certificate_template(&Uuid::new_v4().into())
        .await;
    assert!(result.is_err_and(|e| matches!(
        e,
        ServiceError::EntityNotFound(EntityNotFoundError::CertificateTemplate(_))
    )));
}

#[tokio::test]
async fn test_delete_certificate_template_success() {
    let template = generic_template();

    let mut repository = MockCertificateTemplateRepository::default();
    repository
        .expect_delete_certificate_template()
        .times(1)
        .with(eq(template.id))
        .returning(|_| Ok(()));

    let service = setup_service(repository, MockOrganisationRepository::default());

    service
        .delete_certificate_template(&template.id)
        .await
        .unwrap();
}
