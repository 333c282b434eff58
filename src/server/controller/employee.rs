use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ProblemDto},
        employee::{EmployeeDto, NewEmployeeDto},
    },
    server::{
        error::{employee::EmployeeError, AppError},
        model::employee::Employee,
        service::employee::EmployeeService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Get an employee by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Employee ID
///
/// # Returns
/// - `200 OK` - The employee
/// - `404 Not Found` - No employee with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/Employee/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employee", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    let employee = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Create a new employee.
///
/// Validates the payload and inserts it. The database refuses the insert when the
/// target office is full or does not exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Employee data without an ID
///
/// # Returns
/// - `200 OK` - The generated employee ID
/// - `400 Bad Request` - Validation messages, or a body that is not a valid employee
/// - `409 Conflict` - The office is full or does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/Employees",
    tag = EMPLOYEE_TAG,
    request_body = NewEmployeeDto,
    responses(
        (status = 200, description = "Employee created, body is the new ID", body = i32),
        (status = 400, description = "Employee failed validation", body = Vec<String>),
        (status = 409, description = "Office is full or does not exist", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let service = EmployeeService::new(&state.db);

    let id = service.create(Employee::from_new_dto(payload)).await?;

    Ok((StatusCode::OK, Json(id)))
}

/// Update an existing employee.
///
/// The payload must carry the ID of the employee to update.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Full employee data including the ID
///
/// # Returns
/// - `200 OK` - Employee updated
/// - `400 Bad Request` - Validation messages, including a missing ID or a malformed body
/// - `404 Not Found` - No employee with that ID
/// - `409 Conflict` - The new office is full or does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/Employees",
    tag = EMPLOYEE_TAG,
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Employee updated"),
        (status = 400, description = "Employee failed validation", body = Vec<String>),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 409, description = "Office is full or does not exist", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let service = EmployeeService::new(&state.db);

    let id = payload.id;
    if !service.update(Employee::from_dto(payload)).await? {
        return Err(AppError::NotFound(format!(
            "Employee {} not found",
            id.unwrap_or_default()
        )));
    }

    Ok(StatusCode::OK)
}

/// Delete an employee by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Employee ID
///
/// # Returns
/// - `200 OK` - Employee deleted
/// - `404 Not Found` - No employee with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/Employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Employee {} not found", id)));
    }

    Ok(StatusCode::OK)
}

/// A body that does not deserialize into an employee is reported like a validation failure.
fn invalid_body(rejection: JsonRejection) -> EmployeeError {
    EmployeeError::Invalid(vec![rejection.body_text()])
}
