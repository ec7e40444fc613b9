use shared_types::{OrganisationId, TemplateId, UserId};
use thiserror::Error;

use crate::provider::certificate_renderer::RenderError;
use crate::provider::image_storage::error::ImageStorageError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("General runtime error: `{0}`")]
    GeneralRuntimeError(String),
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Renderer error: `{0}`")]
    Renderer(#[from] RenderError),
    #[error("Image storage error: `{0}`")]
    ImageStorage(#[from] ImageStorageError),

    #[error("Repository error: `{0}`")]
    Repository(DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Organisation `{0}` not found")]
    Organisation(OrganisationId),

    #[error("Certificate template `{0}` not found")]
    CertificateTemplate(TemplateId),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Organisation already exists")]
    OrganisationAlreadyExists,

    #[error("User `{user}` is already a member of organisation `{organisation}`")]
    MemberAlreadyExists {
        organisation: OrganisationId,
        user: UserId,
    },

    #[error("Certificate template name `{0}` already taken")]
    TemplateNameAlreadyTaken(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Certificate template name must not be empty")]
    TemplateNameMissing,
}

#[derive(Debug)]
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
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Organisation001 => "Organisation not found",
            ErrorCode::Organisation002 => "Organisation already exists",

            ErrorCode::Member001 => "Member already exists",

            ErrorCode::Template001 => "Certificate template not found",
            ErrorCode::Template002 => "Certificate template name already taken",
            ErrorCode::Template003 => "Certificate template name missing",

            ErrorCode::Certificate001 => "Missing required fields",
            ErrorCode::Certificate002 => "Image storage not configured",
            ErrorCode::Certificate003 => "Image upload failed",
            ErrorCode::Certificate004 => "Certificate rendering failed",

            ErrorCode::Database => "Database error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::ImageStorage(error) => error.error_code(),
            ServiceError::Renderer(_) => ErrorCode::Certificate004,
            ServiceError::Repository(error) => error.error_code(),

            ServiceError::GeneralRuntimeError(_) | ServiceError::MappingError(_) => {
                ErrorCode::Unmapped
            }
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Organisation(_) => ErrorCode::Organisation001,
            EntityNotFoundError::CertificateTemplate(_) => ErrorCode::Template001,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::OrganisationAlreadyExists => ErrorCode::Organisation002,
            BusinessLogicError::MemberAlreadyExists { .. } => ErrorCode::Member001,
            BusinessLogicError::TemplateNameAlreadyTaken(_) => ErrorCode::Template002,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingRequiredFields => ErrorCode::Certificate001,
            ValidationError::TemplateNameMissing => ErrorCode::Template003,
        }
    }
}

impl ImageStorageError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ImageStorageError::ConfigurationMissing => ErrorCode::Certificate002,
            ImageStorageError::Upstream { .. } | ImageStorageError::Transport(_) => {
                ErrorCode::Certificate003
            }
        }
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        ServiceError::Repository(value)
    }
}

impl From<uuid::Error> for ServiceError {
    fn from(value: uuid::Error) -> Self {
        ServiceError::MappingError(value.to_string())
    }
}
