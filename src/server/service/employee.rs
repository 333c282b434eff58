use sea_orm::DatabaseConnection;

use crate::server::{
    data::employee::EmployeeRepository,
    error::{employee::EmployeeError, AppError},
    model::employee::{validation::EmployeeValidator, Employee},
};

/// Validates employees and persists them through `EmployeeRepository`.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
    validator: EmployeeValidator,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            validator: EmployeeValidator::new(),
        }
    }

    /// Replaces the validator, e.g. with one pinned to a fixed date.
    #[cfg(test)]
    pub fn with_validator(mut self, validator: EmployeeValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Gets an employee by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let repo = EmployeeRepository::new(self.db);

        repo.get_by_id(id).await
    }

    /// Validates and inserts a new employee.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the inserted employee
    /// - `Err(AppError::EmployeeErr(Invalid))` - Validation failed; nothing was written
    /// - `Err(AppError::EmployeeErr(_))` - The database rejected the office assignment
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn create(&self, candidate: Employee) -> Result<i32, AppError> {
        let employee = self
            .validator
            .validate(candidate)
            .into_result()
            .map_err(EmployeeError::Invalid)?;

        let repo = EmployeeRepository::new(self.db);

        repo.insert(&employee).await
    }

    /// Validates and updates an existing employee.
    ///
    /// # Returns
    /// - `Ok(true)` - Employee updated
    /// - `Ok(false)` - No employee with that id
    /// - `Err(AppError::EmployeeErr(Invalid))` - Validation failed, including a missing id
    /// - `Err(AppError::EmployeeErr(_))` - The database rejected the office assignment
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn update(&self, candidate: Employee) -> Result<bool, AppError> {
        let employee = self
            .validator
            .validate_existing(candidate)
            .into_result()
            .map_err(EmployeeError::Invalid)?;

        let repo = EmployeeRepository::new(self.db);

        repo.update(&employee).await
    }

    /// Deletes an employee by ID, returning whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = EmployeeRepository::new(self.db);

        repo.delete(id).await
    }
}
