use cert_core::model::organisation::Organisation;
use cert_core::repository::error::DataLayerError;
use cert_core::repository::organisation_repository::OrganisationRepository;
use uuid::Uuid;

use super::OrganisationProvider;
use crate::test_utilities::*;

async fn setup() -> OrganisationProvider {
    OrganisationProvider {
        db: setup_test_database().await,
    }
}

fn organisation(name: &str) -> Organisation {
    Organisation {
        id: Uuid::new_v4().into(),
        name: name.to_string(),
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
    }
}

#[tokio::test]
async fn test_create_organisation() {
    let provider = setup().await;

    let organisation = organisation("org");
    let id = provider
        .create_organisation(organisation.clone())
        .await
        .unwrap();
    assert_eq!(id, organisation.id);

    let stored = provider.get_organisation(&id).await.unwrap().unwrap();
    assert_eq!(stored, organisation);
}

#[tokio::test]
async fn test_create_organisation_duplicate_name() {
    let provider = setup().await;

    provider
        .create_organisation(organisation("org"))
        .await
        .unwrap();
    let result = provider.create_organisation(organisation("org")).await;

    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_get_organisation_missing() {
    let provider = setup().await;

    let result = provider
        .get_organisation(&Uuid::new_v4().into())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_organisation_list() {
    let provider = setup().await;

    insert_organisation_to_database(&provider.db, None, Some("first"))
        .await
        .unwrap();
    insert_organisation_to_database(&provider.db, None, Some("second"))
        .await
        .unwrap();

    let result = provider.get_organisation_list().await.unwrap();
    assert_eq!(result.len(), 2);
}
