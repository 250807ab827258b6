//! Booking domain entity and lifecycle

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "CANCELLED" => BookingStatus::Cancelled,
            "COMPLETED" => BookingStatus::Completed,
            _ => BookingStatus::Confirmed,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A confirmed purchase of one or more seats for a show.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i64,
    pub booking_reference: String,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub user_id: i64,
    pub show_id: i64,
}

impl Booking {
    pub fn new(user_id: i64, show_id: i64, total_amount: f64) -> Self {
        Self {
            id: 0,
            booking_reference: generate_reference(),
            total_amount,
            status: BookingStatus::Confirmed,
            booking_date: Utc::now(),
            user_id,
            show_id,
        }
    }

    /// Cancel the booking. Only a CONFIRMED booking can be cancelled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if self.status != BookingStatus::Confirmed {
            return Err(DomainError::InvalidBookingState {
                status: self.status.as_str().to_string(),
            });
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }

    pub fn complete(&mut self) {
        self.status = BookingStatus::Completed;
    }
}

/// Human-readable reference: "BK" + epoch millis + 4 random digits.
fn generate_reference() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
    format!("BK{}{}", millis, suffix)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_booking_is_confirmed_with_reference() {
        let b = Booking::new(7, 3, 500.0);
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert!(b.booking_reference.starts_with("BK"));
        assert!(b.booking_reference.len() > 6);
        assert_eq!(b.total_amount, 500.0);
    }

    #[test]
    fn cancel_confirmed_booking() {
        let mut b = Booking::new(7, 3, 500.0);
        b.cancel().unwrap();
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn cancel_twice_is_rejected() {
        let mut b = Booking::new(7, 3, 500.0);
        b.cancel().unwrap();
        let err = b.cancel().unwrap_err();
        match err {
            DomainError::InvalidBookingState { status } => assert_eq!(status, "CANCELLED"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cancel_completed_booking_is_rejected() {
        let mut b = Booking::new(7, 3, 500.0);
        b.complete();
        assert!(b.cancel().is_err());
    }

    #[test]
    fn status_roundtrip() {
        for s in [
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::from_str(s.as_str()), s);
        }
    }

    #[test]
    fn references_are_distinct() {
        let a = Booking::new(1, 1, 250.0);
        let b = Booking::new(1, 1, 250.0);
        assert_ne!(a.booking_reference, b.booking_reference);
    }
}
