use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;

use super::dto::{GenerateCertificateRequestRestDTO, GenerateCertificateResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/certificate/v1/generate",
    request_body(
        content = GenerateCertificateRequestRestDTO,
        example = json!({ "studentName": "Ana Pérez", "courseName": "Seguridad Web", "date": "2024-05-01" }),
    ),
    responses(GenerateCertificateResponse),
    tag = "certificate_generation",
    security(
        ("bearer" = [])
    ),
    summary = "Generate certificate",
    description = "Renders the certificate layout with the given fields, uploads \
        the image to Cloudinary and returns its public URL. Every call creates \
        a new stored object.",
)]
pub(crate) async fn generate_certificate(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<GenerateCertificateRequestRestDTO>,
        GenerateCertificateResponse,
    >,
) -> GenerateCertificateResponse {
    let result = state
        .core
        .certificate_service
        .generate_certificate(request.into())
        .await;
    GenerateCertificateResponse::from_result(result)
}
