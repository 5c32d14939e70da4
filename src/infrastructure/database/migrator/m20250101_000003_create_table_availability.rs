//! Create table_availability table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TableAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TableAvailability::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TableAvailability::Date).date().not_null())
                    .col(ColumnDef::new(TableAvailability::TimeSlot).time().not_null())
                    .col(
                        ColumnDef::new(TableAvailability::AvailableTables)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TableAvailability::MaxPartySize)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_table_availability_slot")
                    .table(TableAvailability::Table)
                    .col(TableAvailability::Date)
                    .col(TableAvailability::TimeSlot)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TableAvailability::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TableAvailability {
    Table,
    Id,
    Date,
    TimeSlot,
    AvailableTables,
    MaxPartySize,
}
