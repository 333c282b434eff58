//! Employee factory for creating test employee entities.
//!
//! Inserts go straight through SeaORM, bypassing the registry's validator, so
//! the factory can also seed rows that would fail validation today.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::employee::EmployeeFactory;
///
/// let employee = EmployeeFactory::new(&db, office.id)
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    birthdate: NaiveDate,
    office_id: i32,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Employee"`
    /// - last_name: `"Number{id}"` where id is auto-incremented
    /// - birthdate: 1990-01-01
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `office_id` - Office the employee is assigned to
    pub fn new(db: &'a DatabaseConnection, office_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Employee".to_string(),
            last_name: format!("Number{}", id),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            office_id,
        }
    }

    /// Sets the first name of the employee.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name of the employee.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the birth date of the employee.
    pub fn birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = birthdate;
        self
    }

    /// Builds and inserts the employee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert, including office rule violations
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birthdate: ActiveValue::Set(self.birthdate),
            office_id: ActiveValue::Set(self.office_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values in the given office.
///
/// Shorthand for `EmployeeFactory::new(db, office_id).build().await`.
pub async fn create_employee(
    db: &DatabaseConnection,
    office_id: i32,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, office_id).build().await
}
