use crate::{
    model::{
        api::ProblemDto,
        employee::{EmployeeDto, NewEmployeeDto},
    },
    server::{router::router, state::AppState},
};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde::de::DeserializeOwned;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tracing_subscriber::{layer::Context, prelude::*, Layer};

mod get;

/// Builds the application router over the given database, without Swagger UI.
fn app(db: &DatabaseConnection) -> Router {
    router(false).with_state(AppState::new(db.clone()))
}

/// Sends a request with an optional JSON body through a fresh router.
async fn send<T: serde::Serialize>(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: Option<&T>,
) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    app(db).oneshot(request).await.unwrap()
}

/// Reads and deserializes a JSON response body.
async fn json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}

fn birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn new_employee(first_name: &str, last_name: &str, office_id: i32) -> NewEmployeeDto {
    NewEmployeeDto {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birthdate: birthdate(),
        office_id,
    }
}

async fn employee_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::Employee::find().count(db).await
}

/// Counts ERROR events emitted by this crate, ignoring the HTTP trace layer.
#[derive(Clone, Default)]
struct ErrorEvents(Arc<AtomicUsize>);

impl ErrorEvents {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for ErrorEvents {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == tracing::Level::ERROR && metadata.target().starts_with("registry") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
