//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::BookingDetails;
use crate::domain::booking::Booking;

/// Request to confirm a booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(range(min = 1))]
    pub show_id: i64,
    /// Seats to book; held seats of this user and free seats both qualify
    #[validate(length(min = 1, max = 6, message = "between 1 and 6 seats per booking"))]
    pub seat_ids: Vec<i64>,
}

/// Request to cancel a booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CancelBookingRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
}

/// Booking summary in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: i64,
    pub booking_reference: String,
    pub total_amount: f64,
    /// CONFIRMED, CANCELLED or COMPLETED
    pub status: String,
    pub booking_date: String,
    pub user_id: i64,
    pub show_id: i64,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            booking_reference: b.booking_reference,
            total_amount: b.total_amount,
            status: b.status.as_str().to_string(),
            booking_date: b.booking_date.to_rfc3339(),
            user_id: b.user_id,
            show_id: b.show_id,
        }
    }
}

/// Booking with its seat codes
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDetailsDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub seat_codes: Vec<String>,
}

impl From<BookingDetails> for BookingDetailsDto {
    fn from(d: BookingDetails) -> Self {
        Self {
            booking: BookingDto::from(d.booking),
            seat_codes: d.seats.into_iter().map(|s| s.seat_code).collect(),
        }
    }
}
