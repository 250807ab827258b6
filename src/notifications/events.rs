//! Notification events
//!
//! Defines all event types broadcast to in-process subscribers
//! (the seat-availability feed and metrics listeners).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event types for notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// Seat states changed on a screen (block, release or book)
    SeatsChanged(SeatsChangedEvent),
    /// A booking was confirmed
    BookingCreated(BookingCreatedEvent),
    /// A booking was cancelled and its seats freed
    BookingCancelled(BookingCancelledEvent),
    /// The sweeper released expired holds
    HoldsExpired(HoldsExpiredEvent),
    /// Past-dated shows were deactivated
    ShowsDeactivated(ShowsDeactivatedEvent),
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::SeatsChanged(_) => "seats_changed",
            Event::BookingCreated(_) => "booking_created",
            Event::BookingCancelled(_) => "booking_cancelled",
            Event::HoldsExpired(_) => "holds_expired",
            Event::ShowsDeactivated(_) => "shows_deactivated",
        }
    }

    /// Get the screen ID if applicable
    pub fn screen_id(&self) -> Option<i64> {
        match self {
            Event::SeatsChanged(e) => Some(e.screen_id),
            Event::BookingCreated(e) => Some(e.screen_id),
            Event::BookingCancelled(e) => Some(e.screen_id),
            Event::HoldsExpired(_) => None,
            Event::ShowsDeactivated(_) => None,
        }
    }
}

/// One seat's new state, as exposed to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatState {
    pub seat_id: i64,
    pub seat_code: String,
    pub status: String,
}

/// Seat states changed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatsChangedEvent {
    pub screen_id: i64,
    pub seats: Vec<SeatState>,
    pub timestamp: DateTime<Utc>,
}

/// Booking created event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedEvent {
    pub booking_id: i64,
    pub booking_reference: String,
    pub user_id: i64,
    pub show_id: i64,
    pub screen_id: i64,
    pub seat_count: usize,
    pub total_amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Booking cancelled event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCancelledEvent {
    pub booking_id: i64,
    pub booking_reference: String,
    pub screen_id: i64,
    pub freed_seats: usize,
    pub timestamp: DateTime<Utc>,
}

/// Expired holds released by the sweeper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldsExpiredEvent {
    pub released_seats: usize,
    pub timestamp: DateTime<Utc>,
}

/// Past-dated shows deactivated by the sweeper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowsDeactivatedEvent {
    pub deactivated_shows: u64,
    pub timestamp: DateTime<Utc>,
}

/// Envelope for events sent over the bus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}
