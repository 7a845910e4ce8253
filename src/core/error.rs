use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Convert a database error into a more specific AppError.
///
/// Unique violations (SQLSTATE 23505) become `Conflict`, foreign key
/// violations (23503) become `BadRequest`. Anything else stays a database
/// error and is rendered with its SQLSTATE when the backend supplied one.
pub fn db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            Some("23505") => {
                let message = match db_err.constraint() {
                    Some("categories_category_text_key") => {
                        "Category already exists (concurrent seeding)"
                    }
                    Some("users_username_key") => "Username is already taken",
                    _ => "Resource already exists",
                };
                return AppError::Conflict(message.to_string());
            }
            Some("23503") => {
                return AppError::BadRequest("Referenced record does not exist".to_string());
            }
            _ => {}
        }
    }

    AppError::Database(e)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                match e {
                    // Backend rejected the statement: surface its error code
                    sqlx::Error::Database(db_err) => (
                        StatusCode::BAD_REQUEST,
                        db_err
                            .code()
                            .map(|code| code.into_owned())
                            .unwrap_or_else(|| "Database error occurred".to_string()),
                        None,
                    ),
                    sqlx::Error::RowNotFound => {
                        (StatusCode::NOT_FOUND, "Resource not found".to_string(), None)
                    }
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error occurred".to_string(),
                        None,
                    ),
                }
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.clone(), None),
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
