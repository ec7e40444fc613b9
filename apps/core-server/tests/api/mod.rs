mod authorization;
mod certificate;
mod certificate_template;
mod organisation;
