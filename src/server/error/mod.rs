//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, making it the single place where failures become status codes.

pub mod config;
pub mod employee;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ProblemDto},
    server::error::{config::ConfigError, employee::EmployeeError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain errors like `EmployeeError` handle
/// their own response mapping, while infrastructure failures become 500 problems.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Validation failure or database-raised rule violation for an employee.
    ///
    /// Delegates to `EmployeeError::into_response()` for 400/409 mapping.
    #[error(transparent)]
    EmployeeErr(#[from] EmployeeError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with the error message as problem detail.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O failure, e.g. binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request / 409 Conflict - For `EmployeeErr`, delegated to `EmployeeError`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every other variant, as a problem whose detail
///   carries the error message. `DbErr` is not logged here; the repository logs it
///   together with the statement it attempted
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::EmployeeErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            // Already logged with its statement by the repository that hit it.
            Self::DbErr(err) => internal_problem(err.to_string()),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a problem body whose detail is the error message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_problem(self.0.to_string())
    }
}

fn internal_problem(detail: String) -> Response {
    problem(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An error occurred while processing your request.",
        detail,
    )
}

/// Builds a problem details response.
pub(crate) fn problem(status: StatusCode, title: &str, detail: String) -> Response {
    (
        status,
        Json(ProblemDto {
            title: title.to_string(),
            status: status.as_u16(),
            detail,
        }),
    )
        .into_response()
}
