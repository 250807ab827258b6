pub mod services;

pub use services::{
    start_expiry_sweeper, BookingDetails, BookingService, ScreenService, SeatService, ShowService,
};
