use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[schema(example = "Organisation001")]
pub enum ErrorCode {
    Organisation001,
    Organisation002,

    Member001,

    Template001,
    Template002,
    Template003,

    Certificate001,
    Certificate002,
    Certificate003,
    Certificate004,

    Database,

    Unmapped,

    // REST-only: the request never reached a service
    InvalidRequest,
}

// Equivalent to a `#[from("cert_core::service::error::ErrorCode")]` derive: the
// `InvalidRequest` variant is REST-only and has no source counterpart, which the
// derive cannot express, so the mapping is written out over the shared variants.
impl From<cert_core::service::error::ErrorCode> for ErrorCode {
    fn from(value: cert_core::service::error::ErrorCode) -> Self {
        use cert_core::service::error::ErrorCode as Source;
        match value {
            Source::Organisation001 => ErrorCode::Organisation001,
            Source::Organisation002 => ErrorCode::Organisation002,
            Source::Member001 => ErrorCode::Member001,
            Source::Template001 => ErrorCode::Template001,
            Source::Template002 => ErrorCode::Template002,
            Source::Template003 => ErrorCode::Template003,
            Source::Certificate001 => ErrorCode::Certificate001,
            Source::Certificate002 => ErrorCode::Certificate002,
            Source::Certificate003 => ErrorCode::Certificate003,
            Source::Certificate004 => ErrorCode::Certificate004,
            Source::Database => ErrorCode::Database,
            Source::Unmapped => ErrorCode::Unmapped,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<&cert_core::service::error::ServiceError> for ErrorResponseRestDTO {
    fn from(error: &cert_core::service::error::ServiceError) -> Self {
        let code = error.error_code();

        ErrorResponseRestDTO {
            message: code.msg().to_string(),
            code: code.into(),
            cause: Some(Cause::with_message_from_error(error)),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                Self {
                    code: ErrorCode::InvalidRequest,
                    message: "General input validation error".to_string(),
                    cause: Some(Cause {
                        message: value.body_text(),
                    }),
                }
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(QueryRejection, ErrorResponseRestDTO);
gen_from_rejection!(PathRejection, ErrorResponseRestDTO);
