use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Booking;
use crate::domain::seat::Seat;
use crate::shared::errors::DomainResult;

/// Persistence port for bookings.
///
/// The write operations pair the booking row with its seat transitions
/// in one transaction, so a booking can never be observed in a state
/// its seats do not match.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and claim its seats in the same
    /// transaction. Each seat must be AVAILABLE, carry a lapsed hold,
    /// or carry a live hold of the booking's user; on the first seat
    /// that fails the transaction rolls back, leaving neither the
    /// booking row nor any seat change behind.
    async fn create_with_seats(
        &self,
        booking: Booking,
        seat_ids: &[i64],
        now: DateTime<Utc>,
    ) -> DomainResult<(Booking, Vec<Seat>)>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>>;

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Booking>>;

    async fn find_by_user(&self, user_id: i64) -> DomainResult<Vec<Booking>>;

    /// Flip a CONFIRMED booking to CANCELLED and free its BOOKED seats
    /// in the same transaction. Returns the freed seats. Fails with
    /// `InvalidBookingState` when the booking is not CONFIRMED, without
    /// touching any seat.
    async fn cancel_and_release(&self, booking_id: i64) -> DomainResult<Vec<Seat>>;
}
