pub mod certificate;
pub mod certificate_template;
pub mod misc;
pub mod organisation;
