use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_office_table::Office;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::FirstName))
                    .col(string(Employee::LastName))
                    .col(date(Employee::Birthdate))
                    .col(integer(Employee::OfficeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_office_id")
                            .from(Employee::Table, Employee::OfficeId)
                            .to(Office::Table, Office::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    #[sea_orm(iden = "employees")]
    Table,
    Id,
    FirstName,
    LastName,
    Birthdate,
    OfficeId,
}
