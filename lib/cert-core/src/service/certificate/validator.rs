use super::dto::GenerateCertificateRequestDTO;
use crate::provider::certificate_renderer::CertificateData;
use crate::service::error::ValidationError;

/// All three fields must be present and non-empty. Nothing else is
/// checked: no trimming, no date parsing, no length caps.
pub(crate) fn validate_required_fields(
    request: &GenerateCertificateRequestDTO,
) -> Result<CertificateData, ValidationError> {
    match (
        non_empty(&request.student_name),
        non_empty(&request.course_name),
        non_empty(&request.date),
    ) {
        (Some(student_name), Some(course_name), Some(date)) => Ok(CertificateData {
            student_name: student_name.to_owned(),
            course_name: course_name.to_owned(),
            date: date.to_owned(),
        }),
        _ => Err(ValidationError::MissingRequiredFields),
    }
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|value| !value.is_empty())
}
