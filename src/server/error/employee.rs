use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::error::problem;

#[derive(Error, Debug)]
pub enum EmployeeError {
    /// The candidate employee failed one or more validation rules.
    ///
    /// Carries every violated rule in evaluation order. Results in 400 Bad Request
    /// with the messages as a JSON array.
    #[error("Employee is invalid: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The database refused the write because the office is at its maximum occupancy.
    ///
    /// Results in 409 Conflict.
    #[error("Office {office_id} has reached its max occupancy")]
    OfficeFull { office_id: i32 },

    /// The database refused the write because the office does not exist.
    ///
    /// Results in 409 Conflict.
    #[error("Office {office_id} does not exist")]
    UnknownOffice { office_id: i32 },
}

impl EmployeeError {
    /// Whether this is a business rule raised by the database rather than a
    /// validation failure.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::OfficeFull { .. } | Self::UnknownOffice { .. })
    }
}

/// Converts employee errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Invalid`, body is the list of validation messages
/// - 409 Conflict - For `OfficeFull` and `UnknownOffice`, body is a problem
impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        match self {
            Self::Invalid(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            err => {
                tracing::debug!("Rejected invalid operation: {}", err);

                problem(StatusCode::CONFLICT, "Invalid operation", err.to_string())
            }
        }
    }
}
