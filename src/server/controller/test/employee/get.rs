use super::*;

/// Tests fetching an existing employee over HTTP.
///
/// Expected: 200 OK with the employee as camelCase JSON
#[tokio::test]
async fn returns_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let office = factory::create_office(db).await?;
    let employee = factory::employee::EmployeeFactory::new(db, office.id)
        .first_name("John")
        .last_name("Doe")
        .birthdate(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        .build()
        .await?;

    let response = send::<()>(db, Method::GET, &format!("/Employee/{}", employee.id), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json(response).await;
    assert_eq!(
        body,
        serde_json::json!({
            "id": employee.id,
            "firstName": "John",
            "lastName": "Doe",
            "birthdate": "2000-01-01",
            "officeId": office.id,
        })
    );

    Ok(())
}

/// Tests fetching an id that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send::<()>(db, Method::GET, "/Employee/42", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a database failure becomes a problem response carrying the message.
///
/// Uses a database without the registry schema so the query fails.
///
/// Expected: 500 Internal Server Error with problem body
#[tokio::test]
async fn returns_problem_on_database_error() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap();

    let errors = ErrorEvents::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(errors.clone()));

    let response = send::<()>(db, Method::GET, "/Employee/1", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let problem: ProblemDto = json(response).await;
    assert_eq!(problem.status, 500);
    assert!(problem.detail.contains("employees"));
    // Logged by the repository with its statement, not again by the error response.
    assert_eq!(errors.count(), 1);

    Ok(())
}
