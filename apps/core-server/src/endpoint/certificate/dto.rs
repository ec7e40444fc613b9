use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cert_core::provider::image_storage::error::ImageStorageError;
use cert_core::service::certificate::dto::{
    GenerateCertificateRequestDTO, GenerateCertificateResponseDTO,
};
use cert_core::service::error::{ServiceError, ValidationError};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(GenerateCertificateRequestDTO)]
pub(crate) struct GenerateCertificateRequestRestDTO {
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    pub date: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GenerateCertificateResponseDTO)]
pub(crate) struct GenerateCertificateResponseRestDTO {
    pub certificate_url: String,
}

/// Error body of the generation endpoint. The shape is part of the public
/// contract and intentionally differs from the management API envelope.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct GenerateCertificateErrorRestDTO {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

pub(crate) enum GenerateCertificateResponse {
    Ok(GenerateCertificateResponseRestDTO),
    Error(StatusCode, GenerateCertificateErrorRestDTO),
}

impl GenerateCertificateResponse {
    #[track_caller]
    pub(crate) fn from_result(
        result: Result<GenerateCertificateResponseDTO, ServiceError>,
    ) -> Self {
        match result {
            Ok(value) => Self::Ok(value.into()),
            Err(error) => {
                let location = std::panic::Location::caller();
                tracing::error!(%error, %location, "Error while generating certificate");
                Self::from_service_error(&error)
            }
        }
    }

    fn from_service_error(error: &ServiceError) -> Self {
        let (status, message, details) = match error {
            ServiceError::Validation(ValidationError::MissingRequiredFields) => {
                (StatusCode::BAD_REQUEST, "Missing required fields", None)
            }
            ServiceError::ImageStorage(ImageStorageError::ConfigurationMissing) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Cloudinary config missing",
                None,
            ),
            ServiceError::ImageStorage(ImageStorageError::Upstream { details, .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to upload image to Cloudinary",
                details.clone(),
            ),
            ServiceError::ImageStorage(ImageStorageError::Transport(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to upload image to Cloudinary",
                None,
            ),
            // full detail stays in the logs
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                None,
            ),
        };

        Self::Error(
            status,
            GenerateCertificateErrorRestDTO {
                error: message.to_string(),
                details,
            },
        )
    }
}

impl From<JsonRejection> for GenerateCertificateResponse {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Invalid certificate generation request: {rejection}");

        Self::Error(
            StatusCode::BAD_REQUEST,
            GenerateCertificateErrorRestDTO {
                error: "Missing required fields".to_string(),
                details: None,
            },
        )
    }
}

impl IntoResponse for GenerateCertificateResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(status, body) => (status, Json(body)).into_response(),
        }
    }
}

impl utoipa::IntoResponses for GenerateCertificateResponse {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        enum Responses {
            #[response(status = 200, description = "Certificate generated and uploaded")]
            #[allow(dead_code)]
            Ok(#[to_schema] GenerateCertificateResponseRestDTO),
            #[response(status = 400, description = "Missing required fields")]
            #[allow(dead_code)]
            BadRequest(#[to_schema] GenerateCertificateErrorRestDTO),
            #[response(status = 500, description = "Rendering or upload failure")]
            #[allow(dead_code)]
            ServerError(#[to_schema] GenerateCertificateErrorRestDTO),
        }

        use utoipa::IntoResponses;
        Responses::responses()
    }
}
