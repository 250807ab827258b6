pub mod bookings;
pub mod catalog;
pub mod health;
pub mod metrics;
pub mod screens;
pub mod seats;
pub mod shows;
