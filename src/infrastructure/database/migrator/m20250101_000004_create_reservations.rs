//! Create reservations table
//!
//! Confirmation codes are unique at the store level; nothing else checks.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ConfirmationCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::CustomerName).string().not_null())
                    .col(ColumnDef::new(Reservations::CustomerPhone).string().not_null())
                    .col(ColumnDef::new(Reservations::CustomerEmail).string())
                    .col(ColumnDef::new(Reservations::PartySize).integer().not_null())
                    .col(ColumnDef::new(Reservations::ReservationDate).date().not_null())
                    .col(ColumnDef::new(Reservations::ReservationTime).time().not_null())
                    .col(ColumnDef::new(Reservations::SpecialRequests).text())
                    .col(ColumnDef::new(Reservations::DietaryRestrictions).text())
                    .col(ColumnDef::new(Reservations::Occasion).string())
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(ColumnDef::new(Reservations::SessionId).string())
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_confirmation_code")
                    .table(Reservations::Table)
                    .col(Reservations::ConfirmationCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_date")
                    .table(Reservations::Table)
                    .col(Reservations::ReservationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    ConfirmationCode,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    PartySize,
    ReservationDate,
    ReservationTime,
    SpecialRequests,
    DietaryRestrictions,
    Occasion,
    Status,
    SessionId,
    CreatedAt,
}
