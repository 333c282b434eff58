use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ProblemDto},
        employee::{EmployeeDto, NewEmployeeDto},
    },
    server::{
        controller::employee,
        state::AppState,
    },
};

/// OpenAPI document for the registry API.
///
/// Paths are collected by `OpenApiRouter` as routes are registered.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee registry API",
        description = "Create, read, update and delete employees assigned to offices."
    ),
    components(schemas(EmployeeDto, NewEmployeeDto, ErrorDto, ProblemDto)),
    tags(
        (name = "employee", description = "Employee management")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `swagger_ui` - Serve Swagger UI at `/swagger-ui` and the document at `/api-docs/openapi.json`
///
/// # Returns
/// - `Router<AppState>` - Router awaiting its state
pub fn router(swagger_ui: bool) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(employee::get_employee))
        .routes(routes!(employee::create_employee, employee::update_employee))
        .routes(routes!(employee::delete_employee))
        .split_for_parts();

    let router = if swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
