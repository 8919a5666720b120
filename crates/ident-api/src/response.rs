//! API response envelope and error translation

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use ident_core::error::DomainError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Translate a domain failure into its HTTP shape. Unknown-identifier and
/// wrong-password failures arrive as one variant and leave as one body.
/// Storage detail is echoed only in development environments.
pub fn domain_error_response(err: &DomainError, development: bool) -> ErrorResponse {
    match err {
        DomainError::Validation(message) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", message)),
        ),
        e if e.is_conflict() => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error("CONFLICT", &e.to_string())),
        ),
        DomainError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("AUTHENTICATION_ERROR", &err.to_string())),
        ),
        DomainError::Database(detail) => {
            let message = if development {
                detail.as_str()
            } else {
                "Internal server error"
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("STORAGE_ERROR", message)),
            )
        }
        other => {
            let message = if development {
                other.to_string()
            } else {
                "Internal server error".to_string()
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("INTERNAL_ERROR", &message)),
            )
        }
    }
}
