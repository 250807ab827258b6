//! Create shows table
//!
//! One row per screening. The unique (screen, date, time) index is a
//! backstop behind the application-level overlap validation.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_screens::Screens;
use super::m20240101_000002_create_movies::Movies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shows::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shows::ShowDate).date().not_null())
                    .col(ColumnDef::new(Shows::StartTime).time().not_null())
                    .col(ColumnDef::new(Shows::TicketPrice).double().not_null())
                    .col(
                        ColumnDef::new(Shows::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Shows::MovieId).big_integer().not_null())
                    .col(ColumnDef::new(Shows::ScreenId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Shows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shows_movie")
                            .from(Shows::Table, Shows::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shows_screen")
                            .from(Shows::Table, Shows::ScreenId)
                            .to(Screens::Table, Screens::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shows_screen_date")
                    .table(Shows::Table)
                    .col(Shows::ScreenId)
                    .col(Shows::ShowDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_shows_screen_date_time")
                    .table(Shows::Table)
                    .col(Shows::ScreenId)
                    .col(Shows::ShowDate)
                    .col(Shows::StartTime)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shows::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Shows {
    Table,
    Id,
    ShowDate,
    StartTime,
    TicketPrice,
    IsActive,
    MovieId,
    ScreenId,
    CreatedAt,
}
