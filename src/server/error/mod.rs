//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so every
//! failure leaves a handler as one `{"error": ...}` envelope.

pub mod config;
pub mod server;
pub mod store;

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, server::ServerError, store::StoreError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Storage contract failure.
    ///
    /// Responds with `StoreError::status_code()` and the error's own message, which
    /// never includes database details.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Listener or accept loop failure.
    #[error(transparent)]
    ServerErr(#[from] ServerError),

    /// Database operation error from SeaORM outside of a storage contract call.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or other I/O failure, typically while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request refused before reaching handler logic: oversized or unreadable body,
    /// undecodable path parameter, unsupported method.
    ///
    /// Results in the given status with the provided message.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - Rejection status (405, 413, ...) - For `Rejected` variant
/// - 504 Gateway Timeout - For `StoreErr(DeadlineExceeded)`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Rejected { status, message } => {
                (status, Json(ErrorDto { error: message })).into_response()
            }
            Self::StoreErr(err) => {
                match &err {
                    StoreError::Database(source) => {
                        tracing::error!("Storage error: {}: {}", err, source)
                    }
                    _ => tracing::warn!("Storage error: {}", err),
                }
                (
                    err.status_code(),
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
