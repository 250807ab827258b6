//! Seat DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::seat::Seat;

/// Seat state in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct SeatDto {
    pub id: i64,
    pub seat_code: String,
    pub seat_row: i32,
    pub seat_number: i32,
    /// AVAILABLE, BLOCKED or BOOKED
    pub status: String,
    pub held_by_user_id: Option<i64>,
    /// Hold expiry (ISO 8601), only while BLOCKED
    pub hold_expires_at: Option<String>,
    pub booking_id: Option<i64>,
}

impl From<Seat> for SeatDto {
    fn from(s: Seat) -> Self {
        Self {
            id: s.id,
            seat_code: s.seat_code,
            seat_row: s.seat_row,
            seat_number: s.seat_number,
            status: s.status.as_str().to_string(),
            held_by_user_id: s.held_by_user_id,
            hold_expires_at: s.hold_expires_at.map(|t| t.to_rfc3339()),
            booking_id: s.booking_id,
        }
    }
}

/// Request to place a hold on seats
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BlockSeatsRequest {
    /// Seats to hold, all on the addressed screen
    #[validate(length(min = 1, max = 6, message = "between 1 and 6 seats per request"))]
    pub seat_ids: Vec<i64>,
    #[validate(range(min = 1))]
    pub user_id: i64,
}

/// Request to release holds
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UnblockSeatsRequest {
    #[validate(length(min = 1, max = 6, message = "between 1 and 6 seats per request"))]
    pub seat_ids: Vec<i64>,
}
