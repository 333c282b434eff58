use super::*;

/// Tests inserting an employee into an office with free capacity.
///
/// Verifies that the repository returns the generated id and that reading the row
/// back yields the same field values.
///
/// Expected: Ok with new id, row round-trips
#[tokio::test]
async fn inserts_employee_and_reads_it_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let office = factory::create_office(db).await?;

    let repo = EmployeeRepository::new(db);
    let id = repo
        .insert(&valid_employee(None, "Ada", "Lovelace", office.id))
        .await
        .unwrap();

    let employee = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(employee.id, Some(id));
    assert_eq!(employee.first_name, "Ada");
    assert_eq!(employee.last_name, "Lovelace");
    assert_eq!(employee.birthdate, birthdate());
    assert_eq!(employee.office_id, office.id);

    Ok(())
}

/// Tests that an id carried by the employee does not select the inserted row's id.
///
/// Expected: Ok with a database-assigned id
#[tokio::test]
async fn ignores_carried_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let office = factory::create_office(db).await?;

    let repo = EmployeeRepository::new(db);
    let first = repo
        .insert(&valid_employee(None, "Ada", "Lovelace", office.id))
        .await
        .unwrap();
    let second = repo
        .insert(&valid_employee(Some(first), "Grace", "Hopper", office.id))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(count_in_office(db, office.id).await?, 2);

    Ok(())
}

/// Tests filling an office with max occupancy 2 with employees A, B and C.
///
/// Verifies that A and B are inserted and C is rejected by the database rule,
/// leaving exactly two rows in the office.
///
/// Expected: A and B Ok, C Err(OfficeFull)
#[tokio::test]
async fn rejects_third_employee_in_office_of_two() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let office = factory::create_office_with_capacity(db, 2).await?;

    let repo = EmployeeRepository::new(db);
    assert!(repo.insert(&valid_employee(None, "A", "A", office.id)).await.is_ok());
    assert!(repo.insert(&valid_employee(None, "B", "B", office.id)).await.is_ok());

    let result = repo.insert(&valid_employee(None, "C", "C", office.id)).await;

    assert!(matches!(
        result,
        Err(AppError::EmployeeErr(EmployeeError::OfficeFull { office_id })) if office_id == office.id
    ));
    assert_eq!(count_in_office(db, office.id).await?, 2);

    Ok(())
}

/// Tests inserting into an office whose occupancy is already reached by fixtures.
///
/// Expected: Err(OfficeFull) classified as an invalid operation
#[tokio::test]
async fn rejects_insert_into_full_office() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let office = factory::create_office_with_capacity(db, 1).await?;
    factory::create_employee(db, office.id).await?;

    let repo = EmployeeRepository::new(db);
    let result = repo.insert(&valid_employee(None, "Ada", "Lovelace", office.id)).await;

    match result {
        Err(AppError::EmployeeErr(err)) => assert!(err.is_invalid_operation()),
        other => panic!("expected invalid operation, got {:?}", other),
    }
    assert_eq!(count_in_office(db, office.id).await?, 1);

    Ok(())
}

/// Tests inserting an employee that references an office that does not exist.
///
/// Expected: Err(UnknownOffice), no row inserted
#[tokio::test]
async fn rejects_unknown_office() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo.insert(&valid_employee(None, "Ada", "Lovelace", 999)).await;

    assert!(matches!(
        result,
        Err(AppError::EmployeeErr(EmployeeError::UnknownOffice { office_id: 999 }))
    ));
    assert_eq!(entity::prelude::Employee::find().count(db).await?, 0);

    Ok(())
}

/// Tests that failures unrelated to office rules propagate as database errors.
///
/// Uses a database without the registry schema so the insert fails on the missing table.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn propagates_unexpected_database_error() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo.insert(&valid_employee(None, "Ada", "Lovelace", 1)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
