pub mod certificate_template;
pub mod membership;
pub mod organisation;
