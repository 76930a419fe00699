/// Error types for signed-url-service
///
/// Every failure is terminal for the current request; nothing is retried
/// internally. Responses are plain text with the mapped status code.
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::services::cdn::SigningError;
use secret_store::SecretError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Secret error: {0}")]
    Secret(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

impl From<SecretError> for AppError {
    fn from(err: SecretError) -> Self {
        AppError::Secret(err.to_string())
    }
}

impl From<SigningError> for AppError {
    fn from(err: SigningError) -> Self {
        AppError::Signing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::Validation("key query parameter is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_variants_map_to_internal_error() {
        let errors = [
            AppError::Config("BUCKET is not set".to_string()),
            AppError::Storage("list failed".to_string()),
            AppError::Secret("not found".to_string()),
            AppError::Signing("bad key".to_string()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
