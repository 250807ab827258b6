//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_screens;
mod m20240101_000002_create_movies;
mod m20240101_000003_create_users;
mod m20240101_000004_create_shows;
mod m20240101_000005_create_bookings;
mod m20240101_000006_create_seats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_screens::Migration),
            Box::new(m20240101_000002_create_movies::Migration),
            Box::new(m20240101_000003_create_users::Migration),
            Box::new(m20240101_000004_create_shows::Migration),
            Box::new(m20240101_000005_create_bookings::Migration),
            Box::new(m20240101_000006_create_seats::Migration),
        ]
    }
}
