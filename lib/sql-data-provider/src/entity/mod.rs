pub mod certificate_template;
pub mod organisation;
pub mod organisation_member;
