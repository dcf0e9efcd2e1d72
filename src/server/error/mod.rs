//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the JSON error envelope. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Message returned to clients for every 5xx response.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client errors carry their message to the
/// `fail` envelope; server errors are logged and answered with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401 / 403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 400 "Duplicate field value"; everything
    /// else is a 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Bug-indicating conversion failure, always a 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error, 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but not allowed to touch the resource, 403.
    #[error("{0}")]
    Forbidden(String),

    /// Request body above the configured limit, 413.
    #[error("{0}")]
    PayloadTooLarge(String),

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
/// - 400 Bad Request - For `BadRequest` and duplicate-key database errors
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 413 Payload Too Large - For `PayloadTooLarge`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => fail(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => fail(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => fail(StatusCode::FORBIDDEN, msg),
            Self::PayloadTooLarge(msg) => fail(StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    fail(StatusCode::BAD_REQUEST, "Duplicate field value")
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a `fail` envelope response for a client error.
pub fn fail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::fail(message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic `error` envelope so
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::error(GENERIC_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
