use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::OrganisationId;

use super::dto::{
    AddMemberRequestRestDTO, CreateMemberResponseRestDTO, CreateOrganisationRequestRestDTO,
    CreateOrganisationResponseRestDTO, GetMemberResponseRestDTO,
    GetOrganisationDetailsResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse, VecResponse};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/organisation/v1/{id}",
    responses(OkOrErrorResponse<GetOrganisationDetailsResponseRestDTO>),
    params(
        ("id" = OrganisationId, Path, description = "Organisation id")
    ),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve organisation",
    description = "Returns information on an organisation",
)]
pub(crate) async fn get_organisation(
    state: State<AppState>,
    Path(id): Path<OrganisationId>,
) -> OkOrErrorResponse<GetOrganisationDetailsResponseRestDTO> {
    let result = state.core.organisation_service.get_organisation(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting organisation details")
}

#[utoipa::path(
    get,
    path = "/api/organisation/v1",
    responses(OkOrErrorResponse<VecResponse<GetOrganisationDetailsResponseRestDTO>>),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "List organisations",
    description = "Returns a list of organisations in the system.",
)]
pub(crate) async fn get_organisations(
    state: State<AppState>,
) -> OkOrErrorResponse<VecResponse<GetOrganisationDetailsResponseRestDTO>> {
    let result = state
        .core
        .organisation_service
        .get_organisation_list()
        .await;
    OkOrErrorResponse::from_result(result, state, "getting organisations")
}

#[utoipa::path(
    post,
    path = "/api/organisation/v1",
    request_body(
        content((Option<CreateOrganisationRequestRestDTO>)),
        example = json!({ "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "name": "default organisation" }),
    ),
    responses(CreatedOrErrorResponse<CreateOrganisationResponseRestDTO>),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create organisation",
    description = "Creates an organisation. All templates and members belong to one organisation.",
)]
pub(crate) async fn post_organisation(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateOrganisationRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreateOrganisationResponseRestDTO> {
    let result = state
        .core
        .organisation_service
        .create_organisation(request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating organisation")
}

#[utoipa::path(
    post,
    path = "/api/organisation/v1/{id}/member",
    request_body = AddMemberRequestRestDTO,
    responses(CreatedOrErrorResponse<CreateMemberResponseRestDTO>),
    params(
        ("id" = OrganisationId, Path, description = "Organisation id")
    ),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Add member",
    description = "Registers an authenticated user as a member of the organisation.",
)]
pub(crate) async fn post_member(
    state: State<AppState>,
    Path(id): Path<OrganisationId>,
    WithRejection(Json(request), _): WithRejection<
        Json<AddMemberRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreateMemberResponseRestDTO> {
    let result = state
        .core
        .organisation_service
        .add_member(&id, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "adding organisation member")
}

#[utoipa::path(
    get,
    path = "/api/organisation/v1/{id}/member",
    responses(OkOrErrorResponse<VecResponse<GetMemberResponseRestDTO>>),
    params(
        ("id" = OrganisationId, Path, description = "Organisation id")
    ),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "List members",
    description = "Returns all members of the organisation.",
)]
pub(crate) async fn get_members(
    state: State<AppState>,
    Path(id): Path<OrganisationId>,
) -> OkOrErrorResponse<VecResponse<GetMemberResponseRestDTO>> {
    let result = state.core.organisation_service.get_members(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting organisation members")
}
