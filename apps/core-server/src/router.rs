#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use cert_core::CertCore;
use cert_core::config::core_config::AppConfig;
use cert_core::provider::http_client::reqwest_client::ReqwestClient;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::endpoint::certificate::dto::GenerateCertificateErrorRestDTO;
use crate::endpoint::{self, certificate, certificate_template, misc, organisation};
use crate::middleware::get_http_request_context;
use crate::{ServerConfig, build_info, dto};

pub(crate) struct InternalAppState {
    pub core: CertCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener.set_nonblocking(true).expect("Invalid TCP listener");

    let core = CertCore::new(
        Arc::new(DataLayer::build(db_conn)),
        config.core,
        Arc::new(ReqwestClient::default()),
    )
    .expect("Failed to initialize core");

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let openapi_documentation = gen_openapi_documentation();

    let protected = Router::new()
        .route(
            "/api/organisation/v1",
            get(organisation::controller::get_organisations)
                .post(organisation::controller::post_organisation),
        )
        .route(
            "/api/organisation/v1/{id}",
            get(organisation::controller::get_organisation),
        )
        .route(
            "/api/organisation/v1/{id}/member",
            get(organisation::controller::get_members)
                .post(organisation::controller::post_member),
        )
        .route(
            "/api/certificate-template/v1",
            get(certificate_template::controller::get_certificate_templates)
                .post(certificate_template::controller::post_certificate_template),
        )
        .route(
            "/api/certificate-template/v1/{id}",
            get(certificate_template::controller::get_certificate_template)
                .delete(certificate_template::controller::delete_certificate_template),
        )
        .route(
            "/api/certificate/v1/generate",
            post(certificate::controller::generate_certificate),
        )
        .layer(middleware::from_fn(crate::middleware::bearer_check));

    let technical_endpoints = Router::new()
        .route("/build-info", get(misc::get_build_info))
        .route("/health", get(misc::health_check))
        .route("/metrics", get(misc::get_metrics));

    Router::new()
        .merge(protected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "cert-core",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::new_sentry_hub))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi_documentation))
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::certificate::controller::generate_certificate,

            endpoint::certificate_template::controller::post_certificate_template,
            endpoint::certificate_template::controller::get_certificate_template,
            endpoint::certificate_template::controller::get_certificate_templates,
            endpoint::certificate_template::controller::delete_certificate_template,

            endpoint::organisation::controller::post_organisation,
            endpoint::organisation::controller::get_organisation,
            endpoint::organisation::controller::get_organisations,
            endpoint::organisation::controller::post_member,
            endpoint::organisation::controller::get_members,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::certificate::dto::GenerateCertificateRequestRestDTO,
                endpoint::certificate::dto::GenerateCertificateResponseRestDTO,
                endpoint::certificate::dto::GenerateCertificateErrorRestDTO,

                endpoint::certificate_template::dto::CreateCertificateTemplateRequestRestDTO,
                endpoint::certificate_template::dto::CreateCertificateTemplateResponseRestDTO,
                endpoint::certificate_template::dto::GetCertificateTemplateResponseRestDTO,

                endpoint::organisation::dto::CreateOrganisationRequestRestDTO,
                endpoint::organisation::dto::CreateOrganisationResponseRestDTO,
                endpoint::organisation::dto::GetOrganisationDetailsResponseRestDTO,
                endpoint::organisation::dto::AddMemberRequestRestDTO,
                endpoint::organisation::dto::CreateMemberResponseRestDTO,
                endpoint::organisation::dto::GetMemberResponseRestDTO,
                endpoint::organisation::dto::MemberRoleRestEnum,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::MembershipId,
                shared_types::OrganisationId,
                shared_types::TemplateId,
                shared_types::UserId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "certificate_generation", description = "Certificate generation"),
            (name = "certificate_template_management", description = "Certificate template management"),
            (name = "organisation_management", description = "Organisation management"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let components = openapi.components.as_mut().expect("OpenAPI Components");
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Service access token"))
                        .build(),
                ),
            );
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = app_version();

    docs
}

fn app_version() -> String {
    format!("{}-{}", build_info::PKG_VERSION, build_info::SHORT_COMMIT)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    // the panic message stays in the logs
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GenerateCertificateErrorRestDTO {
            error: "Internal Server Error".to_string(),
            details: None,
        }),
    )
        .into_response()
}
