pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_office_table;
mod m20260101_000002_create_employee_table;
mod m20260101_000003_create_employee_office_triggers;

/// Message raised by the database when an employee would exceed an office's
/// maximum occupancy.
pub const MAX_OCCUPANCY_MESSAGE: &str = "max occupancy reached";

/// Message raised by the database when an employee references an office that
/// does not exist.
pub const UNKNOWN_OFFICE_MESSAGE: &str = "unknown office";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_office_table::Migration),
            Box::new(m20260101_000002_create_employee_table::Migration),
            Box::new(m20260101_000003_create_employee_office_triggers::Migration),
        ]
    }
}
