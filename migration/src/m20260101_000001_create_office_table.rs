use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Office::Table)
                    .if_not_exists()
                    .col(pk_auto(Office::Id))
                    .col(string(Office::Location))
                    .col(integer(Office::MaxOccupancy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Office::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Office {
    #[sea_orm(iden = "offices")]
    Table,
    Id,
    Location,
    MaxOccupancy,
}
