//! Error handling - maps handler failures to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use blog_core::error::RepoError;
use blog_shared::MessageResponse;
use thiserror::Error;

/// Application-level error type.
///
/// Client mistakes map to 400, unmatched routes to 404, and every storage
/// failure (not-found lookups included) to a generic 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::MissingField(_) => {
                let message = self.to_string();
                tracing::warn!("{}", message);
                builder.content_type(ContentType::plaintext()).body(message)
            }
            AppError::BadRequest(message) => {
                tracing::warn!("{}", message);
                builder.json(MessageResponse::new(message.as_str()))
            }
            AppError::NotFound => builder.json(MessageResponse::not_found()),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                builder.json(MessageResponse::internal_error())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
