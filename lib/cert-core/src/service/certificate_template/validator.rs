use crate::service::error::ValidationError;

pub(crate) fn validate_template_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::TemplateNameMissing);
    }

    Ok(())
}
