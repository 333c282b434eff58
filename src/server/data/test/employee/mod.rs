use crate::server::{
    data::employee::EmployeeRepository,
    error::{employee::EmployeeError, AppError},
    model::employee::{validation::EmployeeValidator, Employee, ValidEmployee},
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod insert;

fn birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

/// Builds a validated employee for repository calls.
fn valid_employee(id: Option<i32>, first_name: &str, last_name: &str, office_id: i32) -> ValidEmployee {
    let candidate = Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birthdate: birthdate(),
        office_id,
    };

    EmployeeValidator::as_of(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .validate(candidate)
        .into_result()
        .unwrap()
}

/// Counts employee rows assigned to an office.
async fn count_in_office(db: &sea_orm::DatabaseConnection, office_id: i32) -> Result<u64, DbErr> {
    entity::prelude::Employee::find()
        .filter(entity::employee::Column::OfficeId.eq(office_id))
        .count(db)
        .await
}
