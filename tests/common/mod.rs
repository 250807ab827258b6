//! Shared fixtures for integration tests
//!
//! Each test gets its own in-memory SQLite database with a pool of one
//! connection, so connections never see different databases.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use sea_orm_migration::MigratorTrait;

use cinema_booking::application::{BookingService, ScreenService, SeatService, ShowService};
use cinema_booking::domain::{Movie, RepositoryProvider, Screen, Show, User};
use cinema_booking::{
    create_event_bus, init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider,
    SharedEventBus,
};

pub const HOLD_TTL_SECS: u64 = 300;
pub const MAX_SEATS: usize = 6;

pub struct TestContext {
    pub repos: Arc<dyn RepositoryProvider>,
    pub event_bus: SharedEventBus,
    pub seat_service: SeatService,
    pub booking_service: BookingService,
    pub show_service: ShowService,
    pub screen_service: ScreenService,
}

pub async fn setup() -> TestContext {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let db = init_database(&config).await.expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));
    let event_bus = create_event_bus();

    TestContext {
        seat_service: SeatService::new(
            repos.clone(),
            event_bus.clone(),
            HOLD_TTL_SECS,
            MAX_SEATS,
        ),
        booking_service: BookingService::new(repos.clone(), event_bus.clone(), MAX_SEATS),
        show_service: ShowService::new(repos.clone()),
        screen_service: ScreenService::new(repos.clone()),
        repos,
        event_bus,
    }
}

impl TestContext {
    /// Screen with its full seat grid provisioned.
    pub async fn seed_screen(&self, name: &str, rows: i32, seats_per_row: i32) -> Screen {
        self.screen_service
            .create_screen(name.to_string(), rows, seats_per_row)
            .await
            .expect("seed screen")
    }

    pub async fn seed_movie(&self, title: &str, duration_minutes: i32) -> Movie {
        self.repos
            .movies()
            .save(Movie::new(title.to_string(), duration_minutes))
            .await
            .expect("seed movie")
    }

    pub async fn seed_user(&self, name: &str, email: &str) -> User {
        self.repos
            .users()
            .save(User::new(name.to_string(), email.to_string()))
            .await
            .expect("seed user")
    }

    /// Show saved straight through the repository, skipping schedule
    /// validation. Tests that need a rejected schedule go through
    /// `ShowService` instead.
    pub async fn seed_show(
        &self,
        movie_id: i64,
        screen_id: i64,
        date: NaiveDate,
        start_hhmm: (u32, u32),
        ticket_price: f64,
    ) -> Show {
        let start_time = chrono::NaiveTime::from_hms_opt(start_hhmm.0, start_hhmm.1, 0).unwrap();
        self.repos
            .shows()
            .save(Show::new(date, start_time, ticket_price, movie_id, screen_id))
            .await
            .expect("seed show")
    }

    /// First `n` seat ids of a screen, in grid order.
    pub async fn seat_ids(&self, screen_id: i64, n: usize) -> Vec<i64> {
        self.repos
            .seats()
            .find_by_screen(screen_id)
            .await
            .expect("load seats")
            .into_iter()
            .take(n)
            .map(|s| s.id)
            .collect()
    }
}

pub fn tomorrow() -> NaiveDate {
    Utc::now().date_naive() + Duration::days(1)
}
