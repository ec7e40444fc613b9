/// Raw request fields, kept optional so that presence is checked by the
/// validator rather than the deserializer.
#[derive(Clone, Debug, Default)]
pub struct GenerateCertificateRequestDTO {
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    pub date: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GenerateCertificateResponseDTO {
    pub certificate_url: String,
}
