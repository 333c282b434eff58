use super::*;

/// Tests deleting one of two employees.
///
/// Verifies that only the row with the given id is removed and the other
/// employee is still readable.
///
/// Expected: Ok(true), exactly one row removed
#[tokio::test]
async fn deletes_only_the_given_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (office, employee) = factory::helpers::create_employee_with_office(db).await?;
    let colleague = factory::create_employee(db, office.id).await?;

    let repo = EmployeeRepository::new(db);
    let deleted = repo.delete(employee.id).await.unwrap();

    assert!(deleted);
    assert!(repo.get_by_id(employee.id).await.unwrap().is_none());
    let remaining = repo.get_by_id(colleague.id).await.unwrap().unwrap();
    assert_eq!(remaining, Employee::from_entity(colleague));
    assert_eq!(entity::prelude::Employee::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(false), other rows untouched
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, employee) = factory::helpers::create_employee_with_office(db).await?;

    let repo = EmployeeRepository::new(db);
    let deleted = repo.delete(employee.id + 1000).await.unwrap();

    assert!(!deleted);
    assert_eq!(entity::prelude::Employee::find().count(db).await?, 1);

    Ok(())
}

/// Tests that deleting an employee frees a seat in a full office.
///
/// Expected: insert after delete succeeds
#[tokio::test]
async fn frees_office_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_registry_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let office = factory::create_office_with_capacity(db, 1).await?;
    let employee = factory::create_employee(db, office.id).await?;

    let repo = EmployeeRepository::new(db);
    assert!(repo.delete(employee.id).await.unwrap());

    let result = repo.insert(&valid_employee(None, "Ada", "Lovelace", office.id)).await;

    assert!(result.is_ok());
    assert_eq!(count_in_office(db, office.id).await?, 1);

    Ok(())
}
