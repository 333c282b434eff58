use migration::{MAX_OCCUPANCY_MESSAGE, UNKNOWN_OFFICE_MESSAGE};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryTrait, SqlErr, Statement,
};

use crate::server::{
    error::{employee::EmployeeError, AppError},
    model::employee::{Employee, ValidEmployee},
};

/// Repository for the `employees` table.
///
/// Every call borrows a connection from the SeaORM pool for the duration of a single
/// statement; the pool takes it back on every exit path. Office capacity and office
/// existence are enforced by database triggers, and the violations they raise are
/// translated into `EmployeeError` here.
pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated employee.
    ///
    /// Any id carried by the employee is ignored; the database assigns a new one.
    ///
    /// # Arguments
    /// - `employee` - The validated employee to persist
    ///
    /// # Returns
    /// - `Ok(i32)` - The generated id
    /// - `Err(AppError::EmployeeErr)` - The office is full or does not exist
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn insert(&self, employee: &ValidEmployee) -> Result<i32, AppError> {
        let query = entity::prelude::Employee::insert(entity::employee::ActiveModel {
            first_name: ActiveValue::Set(employee.first_name().to_string()),
            last_name: ActiveValue::Set(employee.last_name().to_string()),
            birthdate: ActiveValue::Set(employee.birthdate()),
            office_id: ActiveValue::Set(employee.office_id()),
            ..Default::default()
        });
        // On backends with RETURNING support SeaORM appends a RETURNING clause when
        // executing, so the logged command is the statement before that suffix.
        let statement = query.build(self.db.get_database_backend());

        let result = query
            .exec(self.db)
            .await
            .map_err(|err| translate(err, &statement, employee.office_id()))?;

        Ok(result.last_insert_id)
    }

    /// Updates an existing employee by id.
    ///
    /// # Arguments
    /// - `employee` - The validated employee; its id selects the row
    ///
    /// # Returns
    /// - `Ok(true)` - The row was updated
    /// - `Ok(false)` - No row has that id, or the employee carries no id
    /// - `Err(AppError::EmployeeErr)` - Moving into a full or unknown office
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn update(&self, employee: &ValidEmployee) -> Result<bool, AppError> {
        let Some(id) = employee.id() else {
            return Ok(false);
        };

        let query = entity::prelude::Employee::update_many()
            .set(entity::employee::ActiveModel {
                first_name: ActiveValue::Set(employee.first_name().to_string()),
                last_name: ActiveValue::Set(employee.last_name().to_string()),
                birthdate: ActiveValue::Set(employee.birthdate()),
                office_id: ActiveValue::Set(employee.office_id()),
                ..Default::default()
            })
            .filter(entity::employee::Column::Id.eq(id));
        let statement = query.build(self.db.get_database_backend());

        let result = query
            .exec(self.db)
            .await
            .map_err(|err| translate(err, &statement, employee.office_id()))?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an employee by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No row has that id
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let query = entity::prelude::Employee::delete_many()
            .filter(entity::employee::Column::Id.eq(id));
        let statement = query.build(self.db.get_database_backend());

        let result = query
            .exec(self.db)
            .await
            .map_err(|err| unexpected(err, &statement))?;

        Ok(result.rows_affected > 0)
    }

    /// Gets an employee by id.
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - The employee exists
    /// - `Ok(None)` - No row has that id
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let query = entity::prelude::Employee::find_by_id(id);
        let statement = query.build(self.db.get_database_backend());

        let entity = query
            .one(self.db)
            .await
            .map_err(|err| unexpected(err, &statement))?;

        Ok(entity.map(Employee::from_entity))
    }
}

/// Maps a failed write to the office rule it violated, or logs it as unexpected.
fn translate(err: DbErr, statement: &Statement, office_id: i32) -> AppError {
    let Some(rule) = office_rule_violation(&err, office_id) else {
        return unexpected(err, statement);
    };

    tracing::warn!(office_id, command = %statement.sql, "Employee write rejected: {}", rule);

    rule.into()
}

fn office_rule_violation(err: &DbErr, office_id: i32) -> Option<EmployeeError> {
    let message = err.to_string();

    if message.contains(MAX_OCCUPANCY_MESSAGE) {
        return Some(EmployeeError::OfficeFull { office_id });
    }

    if message.contains(UNKNOWN_OFFICE_MESSAGE)
        || matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    {
        return Some(EmployeeError::UnknownOffice { office_id });
    }

    None
}

fn unexpected(err: DbErr, statement: &Statement) -> AppError {
    tracing::error!(command = %statement.sql, "Employee query failed: {}", err);

    err.into()
}
