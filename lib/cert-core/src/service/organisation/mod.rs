use std::sync::Arc;

use crate::repository::membership_repository::MembershipRepository;
use crate::repository::organisation_repository::OrganisationRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct OrganisationService {
    organisation_repository: Arc<dyn OrganisationRepository>,
    membership_repository: Arc<dyn MembershipRepository>,
}

impl OrganisationService {
    pub fn new(
        organisation_repository: Arc<dyn OrganisationRepository>,
        membership_repository: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            organisation_repository,
            membership_repository,
        }
    }
}
