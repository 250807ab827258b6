pub mod booking;
pub mod movie;
pub mod repositories;
pub mod screen;
pub mod seat;
pub mod show;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingRepository, BookingStatus};
pub use movie::{Movie, MovieRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use screen::{Screen, ScreenRepository, MAX_ROWS};
pub use seat::{Seat, SeatRepository, SeatStatus};
pub use show::{windows_overlap, Show, ShowRepository};
pub use user::{User, UserRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
