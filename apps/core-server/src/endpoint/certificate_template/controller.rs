use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use shared_types::TemplateId;

use super::dto::{
    CertificateTemplatesFilterQueryParamsRest, CreateCertificateTemplateRequestRestDTO,
    CreateCertificateTemplateResponseRestDTO, GetCertificateTemplateResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse, VecResponse,
};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/certificate-template/v1",
    request_body = CreateCertificateTemplateRequestRestDTO,
    responses(CreatedOrErrorResponse<CreateCertificateTemplateResponseRestDTO>),
    tag = "certificate_template_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create certificate template",
    description = "Creates a named certificate template owned by an organisation.",
)]
pub(crate) async fn post_certificate_template(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateCertificateTemplateRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreateCertificateTemplateResponseRestDTO> {
    let result = state
        .core
        .certificate_template_service
        .create_certificate_template(request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating certificate template")
}

#[utoipa::path(
    get,
    path = "/api/certificate-template/v1/{id}",
    responses(OkOrErrorResponse<GetCertificateTemplateResponseRestDTO>),
    params(
        ("id" = TemplateId, Path, description = "Certificate template id")
    ),
    tag = "certificate_template_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve certificate template",
    description = "Returns details of a certificate template.",
)]
pub(crate) async fn get_certificate_template(
    state: State<AppState>,
    Path(id): Path<TemplateId>,
) -> OkOrErrorResponse<GetCertificateTemplateResponseRestDTO> {
    let result = state
        .core
        .certificate_template_service
        .get_certificate_template(&id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting certificate template")
}

#[utoipa::path(
    get,
    path = "/api/certificate-template/v1",
    responses(OkOrErrorResponse<VecResponse<GetCertificateTemplateResponseRestDTO>>),
    params(CertificateTemplatesFilterQueryParamsRest),
    tag = "certificate_template_management",
    security(
        ("bearer" = [])
    ),
    summary = "List certificate templates",
    description = "Returns all non-deleted certificate templates of an organisation.",
)]
pub(crate) async fn get_certificate_templates(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<CertificateTemplatesFilterQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VecResponse<GetCertificateTemplateResponseRestDTO>> {
    let result = state
        .core
        .certificate_template_service
        .get_certificate_template_list(&query.organisation_id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting certificate templates")
}

#[utoipa::path(
    delete,
    path = "/api/certificate-template/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = TemplateId, Path, description = "Certificate template id")
    ),
    tag = "certificate_template_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete certificate template",
    description = "Soft-deletes a certificate template; its name becomes available again.",
)]
pub(crate) async fn delete_certificate_template(
    state: State<AppState>,
    Path(id): Path<TemplateId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .certificate_template_service
        .delete_certificate_template(&id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting certificate template")
}
