use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::validate::FieldError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed ({} error(s))", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Compilation failed: {diagnostic}")]
    Compile {
        diagnostic: String,
        /// Leading slice of the generated markup, for debugging the failure.
        source_excerpt: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": { "code": "NOT_FOUND", "message": msg }
                })),
            )
                .into_response(),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Validation failed",
                        "details": errors,
                    }
                })),
            )
                .into_response(),
            AppError::Compile {
                diagnostic,
                source_excerpt,
            } => {
                tracing::error!("Compilation error: {diagnostic}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": {
                            "code": "COMPILE_ERROR",
                            "message": diagnostic,
                            "source": source_excerpt,
                        }
                    })),
                )
                    .into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": {
                            "code": "INTERNAL_ERROR",
                            "message": "An internal server error occurred",
                        }
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let err = AppError::Validation(vec![FieldError {
            field: "header.name".to_string(),
            message: "required".to_string(),
        }]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_compile_error_status() {
        let err = AppError::Compile {
            diagnostic: "boom".to_string(),
            source_excerpt: "\\documentclass".to_string(),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_status() {
        let err = AppError::NotFound("no preview".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
