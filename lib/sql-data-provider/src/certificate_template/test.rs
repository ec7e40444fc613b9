use cert_core::model::certificate_template::CertificateTemplate;
use cert_core::repository::certificate_template_repository::CertificateTemplateRepository;
use cert_core::repository::error::DataLayerError;
use shared_types::OrganisationId;
use uuid::Uuid;

use super::CertificateTemplateProvider;
use crate::test_utilities::*;

async fn setup_with_organisation() -> (CertificateTemplateProvider, OrganisationId) {
    let db = setup_test_database().await;
    let organisation_id = insert_organisation_to_database(&db, None, None)
        .await
        .unwrap();

    (CertificateTemplateProvider { db }, organisation_id)
}

fn template(organisation_id: OrganisationId, name: &str) -> CertificateTemplate {
    CertificateTemplate {
        id: Uuid::new_v4().into(),
        organisation_id,
        name: name.to_string(),
        description: Some("description".to_string()),
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        deleted_at: None,
    }
}

#[tokio::test]
async fn test_create_certificate_template() {
    let (provider, organisation_id) = setup_with_organisation().await;

    let template = template(organisation_id, "Course completion");
    let id = provider
        .create_certificate_template(template.clone())
        .await
        .unwrap();
    assert_eq!(id, template.id);

    let stored = provider
        .get_certificate_template(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, template);
}

#[tokio::test]
async fn test_get_certificate_template_missing() {
    let (provider, _) = setup_with_organisation().await;

    let result = provider
        .get_certificate_template(&Uuid::new_v4().into())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_skips_deleted_and_foreign_templates() {
    let (provider, organisation_id) = setup_with_organisation().await;
    let other_organisation = insert_organisation_to_database(&provider.db, None, None)
        .await
        .unwrap();

    insert_certificate_template_to_database(&provider.db, organisation_id, "live", None)
        .await
        .unwrap();
    insert_certificate_template_to_database(
        &provider.db,
        organisation_id,
        "deleted",
        Some(get_dummy_date()),
    )
    .await
    .unwrap();
    insert_certificate_template_to_database(&provider.db, other_organisation, "foreign", None)
        .await
        .unwrap();

    let templates = provider
        .get_certificate_template_list(&organisation_id)
        .await
        .unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "live");
}

#[tokio::test]
async fn test_delete_certificate_template() {
    let (provider, organisation_id) = setup_with_organisation().await;

    let id = insert_certificate_template_to_database(&provider.db, organisation_id, "live", None)
        .await
        .unwrap();

    provider.delete_certificate_template(&id).await.unwrap();

    let stored = provider
        .get_certificate_template(&id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.deleted_at.is_some());

    let templates = provider
        .get_certificate_template_list(&organisation_id)
        .await
        .unwrap();
    assert!(templates.is_empty());
}

#[tokio::test]
async fn test_delete_certificate_template_twice() {
    let (provider, organisation_id) = setup_with_organisation().await;

    let id = insert_certificate_template_to_database(&provider.db, organisation_id, "live", None)
        .await
        .unwrap();

    provider.delete_certificate_template(&id).await.unwrap();
    let result = provider.delete_certificate_template(&id).await;

    assert!(matches!(result, Err(DataLayerError::RecordNotUpdated)));
}

#[tokio::test]
async fn test_name_can_be_reused_after_delete() {
    let (provider, organisation_id) = setup_with_organisation().await;

    let id = insert_certificate_template_to_database(&provider.db, organisation_id, "live", None)
        .await
        .unwrap();
    provider.delete_certificate_template(&id).await.unwrap();

    provider
        .create_certificate_template(template(organisation_id, "live"))
        .await
        .unwrap();
}
