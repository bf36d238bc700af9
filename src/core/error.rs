use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("password must contain letters and numbers")]
    PasswordFormat,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("phone already registered")]
    DuplicatePhone,

    #[error("internal server error: {0}")]
    Internal(String),
}

/// Machine-readable error body for duplicate-resource failures
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateErrorBody {
    /// Stable error code for client-side handling
    pub error_code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            // Structural and business-rule failures surface as a plain
            // message string.
            AppError::BadRequest(_)
            | AppError::Validation(_)
            | AppError::PasswordMismatch
            | AppError::PasswordFormat => (StatusCode::BAD_REQUEST, message).into_response(),
            // Duplicate-resource failures carry a structured body so clients
            // can branch on the code.
            AppError::DuplicateEmail => duplicate_response("EMAIL_DUPLICATE", message),
            AppError::DuplicatePhone => duplicate_response("PHONE_DUPLICATE", message),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

fn duplicate_response(error_code: &str, message: String) -> Response {
    let body = Json(DuplicateErrorBody {
        error_code: error_code.to_string(),
        message,
    });
    (StatusCode::BAD_REQUEST, body).into_response()
}

pub type Result<T> = std::result::Result<T, AppError>;
