//! Application services

mod bookings;
mod screens;
mod seats;
mod shows;
mod sweeper;

pub use bookings::{BookingDetails, BookingService};
pub use screens::ScreenService;
pub use seats::SeatService;
pub use shows::ShowService;
pub use sweeper::start_expiry_sweeper;
