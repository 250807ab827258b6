//! Create screens table
//!
//! Auditoriums with a fixed row/column grid. Seats are provisioned
//! from this grid when the screen is created.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Screens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Screens::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Screens::Name).string().not_null())
                    .col(ColumnDef::new(Screens::TotalRows).integer().not_null())
                    .col(ColumnDef::new(Screens::SeatsPerRow).integer().not_null())
                    .col(
                        ColumnDef::new(Screens::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Screens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Screens {
    Table,
    Id,
    Name,
    TotalRows,
    SeatsPerRow,
    IsActive,
}
