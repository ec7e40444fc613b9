use std::sync::Arc;

use crate::repository::certificate_template_repository::CertificateTemplateRepository;
use crate::repository::membership_repository::MembershipRepository;
use crate::repository::organisation_repository::OrganisationRepository;

pub mod certificate_template_repository;
pub mod error;
pub mod membership_repository;
pub mod organisation_repository;

pub trait DataRepository: Send + Sync {
    fn get_organisation_repository(&self) -> Arc<dyn OrganisationRepository>;
    fn get_membership_repository(&self) -> Arc<dyn MembershipRepository>;
    fn get_certificate_template_repository(&self) -> Arc<dyn CertificateTemplateRepository>;
}
