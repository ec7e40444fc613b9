use thiserror::Error;

pub mod core_config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parsing(#[from] ConfigParsingError),
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid params for config entry `{key}`: `{source}`")]
    InvalidParams {
        key: String,
        source: serde_json::Error,
    },
}
