//! Create seats table
//!
//! Stores the per-screen seat grid with hold/booking state. Guarded
//! updates against Status and HoldExpiresAt implement the atomic
//! seat transitions.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_screens::Screens;
use super::m20240101_000005_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seats::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seats::ScreenId).big_integer().not_null())
                    .col(ColumnDef::new(Seats::SeatRow).integer().not_null())
                    .col(ColumnDef::new(Seats::SeatNumber).integer().not_null())
                    .col(ColumnDef::new(Seats::SeatCode).string().not_null())
                    .col(
                        ColumnDef::new(Seats::Status)
                            .string()
                            .not_null()
                            .default("AVAILABLE"),
                    )
                    .col(ColumnDef::new(Seats::HeldByUserId).big_integer())
                    .col(ColumnDef::new(Seats::HoldExpiresAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Seats::BookingId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seats_screen")
                            .from(Seats::Table, Seats::ScreenId)
                            .to(Screens::Table, Screens::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seats_booking")
                            .from(Seats::Table, Seats::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_seats_screen_code")
                    .table(Seats::Table)
                    .col(Seats::ScreenId)
                    .col(Seats::SeatCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seats_status")
                    .table(Seats::Table)
                    .col(Seats::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seats_hold_expiry")
                    .table(Seats::Table)
                    .col(Seats::HoldExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seats::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Seats {
    Table,
    Id,
    ScreenId,
    SeatRow,
    SeatNumber,
    SeatCode,
    Status,
    HeldByUserId,
    HoldExpiresAt,
    BookingId,
}
