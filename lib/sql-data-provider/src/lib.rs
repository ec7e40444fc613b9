use std::sync::Arc;

use cert_core::repository::DataRepository;
use cert_core::repository::certificate_template_repository::CertificateTemplateRepository;
use cert_core::repository::membership_repository::MembershipRepository;
use cert_core::repository::organisation_repository::OrganisationRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::certificate_template::CertificateTemplateProvider;
use crate::membership::MembershipProvider;
use crate::organisation::OrganisationProvider;

pub mod certificate_template;
pub mod entity;
pub mod membership;
pub mod organisation;

mod mapper;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

/// Connects to the database and brings the schema up to date.
pub async fn db_conn(database_url: &str) -> DbConn {
    let db = sea_orm::Database::connect(database_url)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");

    db
}

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DbConn,
    organisation_repository: Arc<dyn OrganisationRepository>,
    membership_repository: Arc<dyn MembershipRepository>,
    certificate_template_repository: Arc<dyn CertificateTemplateRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        Self {
            organisation_repository: Arc::new(OrganisationProvider { db: db.clone() }),
            membership_repository: Arc::new(MembershipProvider { db: db.clone() }),
            certificate_template_repository: Arc::new(CertificateTemplateProvider {
                db: db.clone(),
            }),
            db,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_organisation_repository(&self) -> Arc<dyn OrganisationRepository> {
        self.organisation_repository.clone()
    }

    fn get_membership_repository(&self) -> Arc<dyn MembershipRepository> {
        self.membership_repository.clone()
    }

    fn get_certificate_template_repository(&self) -> Arc<dyn CertificateTemplateRepository> {
        self.certificate_template_repository.clone()
    }
}
