//! SeaORM entity definitions

pub mod booking;
pub mod movie;
pub mod screen;
pub mod seat;
pub mod show;
pub mod user;
