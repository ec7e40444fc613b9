pub mod certificate;
pub mod certificate_template;
pub mod error;
pub mod organisation;
