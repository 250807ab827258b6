//! Booking confirmation and cancellation
//!
//! Confirmation re-checks every seat at claim time inside the store's
//! guarded batch update, so a hold that expired and was grabbed by
//! someone else fails the whole booking rather than half of it. The
//! booking row and its seat transitions share one transaction on both
//! paths; neither can be observed committed without the other.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::booking::Booking;
use crate::domain::seat::Seat;
use crate::domain::show::Show;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::events::{
    BookingCancelledEvent, BookingCreatedEvent, Event, SeatState, SeatsChangedEvent,
};
use crate::notifications::SharedEventBus;

/// A booking together with the seats it owns
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub booking: Booking,
    pub seats: Vec<Seat>,
}

/// Service for booking operations
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
    max_seats_per_booking: usize,
}

impl BookingService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        event_bus: SharedEventBus,
        max_seats_per_booking: usize,
    ) -> Self {
        Self {
            repos,
            event_bus,
            max_seats_per_booking,
        }
    }

    /// Confirm a booking for the given seats of a show. All seats are
    /// claimed atomically; the total is seat count times ticket price.
    pub async fn create_booking(
        &self,
        user_id: i64,
        show_id: i64,
        seat_ids: &[i64],
    ) -> DomainResult<BookingDetails> {
        let mut ids: Vec<i64> = seat_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Err(DomainError::Validation(
                "At least one seat must be selected".to_string(),
            ));
        }
        if ids.len() > self.max_seats_per_booking {
            return Err(DomainError::Validation(format!(
                "At most {} seats may be booked per request",
                self.max_seats_per_booking
            )));
        }

        self.repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })?;

        let show = self.require_active_show(show_id).await?;

        // Seats must belong to the show's screen
        let snapshot = self.repos.seats().find_by_ids(&ids).await?;
        for &id in &ids {
            let seat = snapshot
                .iter()
                .find(|s| s.id == id)
                .ok_or(DomainError::NotFound {
                    entity: "Seat",
                    field: "id",
                    value: id.to_string(),
                })?;
            if seat.screen_id != show.screen_id {
                return Err(DomainError::WrongScreen {
                    seat_code: seat.seat_code.clone(),
                });
            }
        }

        let total = show.ticket_price * ids.len() as f64;
        let now = Utc::now();
        let (booking, seats) = self
            .repos
            .bookings()
            .create_with_seats(Booking::new(user_id, show_id, total), &ids, now)
            .await?;

        metrics::counter!("bookings_created_total").increment(1);
        metrics::counter!("seats_booked_total").increment(seats.len() as u64);
        info!(
            booking_id = booking.id,
            reference = %booking.booking_reference,
            user_id,
            show_id,
            seat_count = seats.len(),
            total_amount = total,
            "Booking confirmed"
        );

        self.event_bus
            .publish(Event::BookingCreated(BookingCreatedEvent {
                booking_id: booking.id,
                booking_reference: booking.booking_reference.clone(),
                user_id,
                show_id,
                screen_id: show.screen_id,
                seat_count: seats.len(),
                total_amount: total,
                timestamp: Utc::now(),
            }));
        self.publish_seat_change(show.screen_id, &seats);

        Ok(BookingDetails { booking, seats })
    }

    /// Cancel a confirmed booking and free its seats.
    pub async fn cancel_booking(&self, booking_id: i64, user_id: i64) -> DomainResult<Booking> {
        let mut booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        if booking.user_id != user_id {
            return Err(DomainError::Validation(
                "Booking belongs to another user".to_string(),
            ));
        }

        // Status flip and seat release commit together; a non-CONFIRMED
        // booking fails here without touching any seat
        let freed = self.repos.bookings().cancel_and_release(booking_id).await?;
        booking.cancel()?;

        metrics::counter!("bookings_cancelled_total").increment(1);
        info!(
            booking_id,
            reference = %booking.booking_reference,
            freed_seats = freed.len(),
            "Booking cancelled"
        );

        let screen_id = freed.first().map(|s| s.screen_id);
        self.event_bus
            .publish(Event::BookingCancelled(BookingCancelledEvent {
                booking_id,
                booking_reference: booking.booking_reference.clone(),
                screen_id: screen_id.unwrap_or(0),
                freed_seats: freed.len(),
                timestamp: Utc::now(),
            }));
        if let Some(screen_id) = screen_id {
            self.publish_seat_change(screen_id, &freed);
        }

        Ok(booking)
    }

    pub async fn get_booking(&self, booking_id: i64) -> DomainResult<BookingDetails> {
        let booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        let seats = self.repos.seats().find_by_booking(booking_id).await?;
        Ok(BookingDetails { booking, seats })
    }

    pub async fn get_booking_by_reference(&self, reference: &str) -> DomainResult<BookingDetails> {
        let booking = self
            .repos
            .bookings()
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Booking",
                field: "booking_reference",
                value: reference.to_string(),
            })?;

        let seats = self.repos.seats().find_by_booking(booking.id).await?;
        Ok(BookingDetails { booking, seats })
    }

    pub async fn list_bookings_for_user(&self, user_id: i64) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_by_user(user_id).await
    }

    async fn require_active_show(&self, show_id: i64) -> DomainResult<Show> {
        let show = self
            .repos
            .shows()
            .find_by_id(show_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Show",
                field: "id",
                value: show_id.to_string(),
            })?;

        if !show.is_active {
            return Err(DomainError::Validation(
                "Show is no longer active".to_string(),
            ));
        }
        Ok(show)
    }

    fn publish_seat_change(&self, screen_id: i64, seats: &[Seat]) {
        self.event_bus.publish(Event::SeatsChanged(SeatsChangedEvent {
            screen_id,
            seats: seats
                .iter()
                .map(|s| SeatState {
                    seat_id: s.id,
                    seat_code: s.seat_code.clone(),
                    status: s.status.as_str().to_string(),
                })
                .collect(),
            timestamp: Utc::now(),
        }));
    }
}
