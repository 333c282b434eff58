use sea_orm_migration::prelude::*;

use crate::{MAX_OCCUPANCY_MESSAGE, UNKNOWN_OFFICE_MESSAGE};

const INSERT_TRIGGER: &str = "employees_insert_office_rules";
const UPDATE_TRIGGER: &str = "employees_update_office_rules";

/// Office rules shared by both triggers. `NEW` is the row being written.
fn office_rules() -> String {
    format!(
        "SELECT RAISE(ABORT, '{UNKNOWN_OFFICE_MESSAGE}') \
             WHERE NOT EXISTS (SELECT 1 FROM offices WHERE id = NEW.office_id); \
         SELECT RAISE(ABORT, '{MAX_OCCUPANCY_MESSAGE}') \
             WHERE (SELECT COUNT(*) FROM employees WHERE office_id = NEW.office_id) \
                 >= (SELECT max_occupancy FROM offices WHERE id = NEW.office_id);"
    )
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&format!(
            "CREATE TRIGGER IF NOT EXISTS {INSERT_TRIGGER} \
             BEFORE INSERT ON employees \
             BEGIN {} END",
            office_rules()
        ))
        .await?;

        // Only moves between offices are checked; editing a name must not
        // trip the occupancy rule for an office that is already full.
        db.execute_unprepared(&format!(
            "CREATE TRIGGER IF NOT EXISTS {UPDATE_TRIGGER} \
             BEFORE UPDATE OF office_id ON employees \
             WHEN NEW.office_id <> OLD.office_id \
             BEGIN {} END",
            office_rules()
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {UPDATE_TRIGGER}"))
            .await?;
        db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {INSERT_TRIGGER}"))
            .await?;

        Ok(())
    }
}
