//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::movie::MovieRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::screen::ScreenRepository;
use crate::domain::seat::SeatRepository;
use crate::domain::show::ShowRepository;
use crate::domain::user::UserRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::movie_repository::SeaOrmMovieRepository;
use super::screen_repository::SeaOrmScreenRepository;
use super::seat_repository::SeaOrmSeatRepository;
use super::show_repository::SeaOrmShowRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let show = repos.shows().find_by_id(3).await?;
/// let seats = repos.seats().find_by_screen(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    seats: SeaOrmSeatRepository,
    shows: SeaOrmShowRepository,
    bookings: SeaOrmBookingRepository,
    movies: SeaOrmMovieRepository,
    screens: SeaOrmScreenRepository,
    users: SeaOrmUserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            seats: SeaOrmSeatRepository::new(db.clone()),
            shows: SeaOrmShowRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            movies: SeaOrmMovieRepository::new(db.clone()),
            screens: SeaOrmScreenRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn seats(&self) -> &dyn SeatRepository {
        &self.seats
    }

    fn shows(&self) -> &dyn ShowRepository {
        &self.shows
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn movies(&self) -> &dyn MovieRepository {
        &self.movies
    }

    fn screens(&self) -> &dyn ScreenRepository {
        &self.screens
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}
