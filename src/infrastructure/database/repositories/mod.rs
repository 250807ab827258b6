//! SeaORM repository implementations

mod booking_repository;
mod movie_repository;
mod repository_provider;
mod screen_repository;
mod seat_repository;
mod show_repository;
mod user_repository;

pub use booking_repository::SeaOrmBookingRepository;
pub use movie_repository::SeaOrmMovieRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use screen_repository::SeaOrmScreenRepository;
pub use seat_repository::SeaOrmSeatRepository;
pub use show_repository::SeaOrmShowRepository;
pub use user_repository::SeaOrmUserRepository;
