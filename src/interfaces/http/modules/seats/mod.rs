//! Seat map, hold and release endpoints

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
