//! Seat domain entity and state machine

use chrono::{DateTime, Utc};

/// Seat status
///
/// Closed set: a seat is in exactly one of these states at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// Free to be held or booked
    Available,
    /// Temporarily held by a user, pending booking or expiry
    Blocked,
    /// Owned by a confirmed booking
    Booked,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Blocked => "BLOCKED",
            Self::Booked => "BOOKED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "BLOCKED" => Self::Blocked,
            "BOOKED" => Self::Booked,
            _ => Self::Available,
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single seat of a screen.
///
/// Invariants (enforced at every mutation site):
/// - `held_by_user_id` and `hold_expires_at` are both set iff status is
///   `Blocked`, and cleared together;
/// - `booking_id` is set iff status is `Booked`;
/// - never `Blocked` and `Booked` at once.
#[derive(Debug, Clone)]
pub struct Seat {
    pub id: i64,
    pub screen_id: i64,
    /// 1-based row index within the screen
    pub seat_row: i32,
    /// 1-based position within the row
    pub seat_number: i32,
    /// Display code, e.g. "A1", "B5"
    pub seat_code: String,
    pub status: SeatStatus,
    pub held_by_user_id: Option<i64>,
    pub hold_expires_at: Option<DateTime<Utc>>,
    pub booking_id: Option<i64>,
}

impl Seat {
    /// Create a fresh AVAILABLE seat for a screen position.
    ///
    /// Rows are capped at 26 by screen validation, so the row letter is
    /// always a single character.
    pub fn new(screen_id: i64, seat_row: i32, seat_number: i32) -> Self {
        Self {
            id: 0,
            screen_id,
            seat_row,
            seat_number,
            seat_code: Self::code_for(seat_row, seat_number),
            status: SeatStatus::Available,
            held_by_user_id: None,
            hold_expires_at: None,
            booking_id: None,
        }
    }

    /// Display code for a position: row letter + seat number ("A1", "C12").
    pub fn code_for(seat_row: i32, seat_number: i32) -> String {
        let letter = (b'A' + (seat_row.clamp(1, 26) as u8 - 1)) as char;
        format!("{}{}", letter, seat_number)
    }

    /// Place a hold on this seat.
    pub fn block(&mut self, user_id: i64, expires_at: DateTime<Utc>) {
        self.status = SeatStatus::Blocked;
        self.held_by_user_id = Some(user_id);
        self.hold_expires_at = Some(expires_at);
        self.booking_id = None;
    }

    /// Clear a hold, returning the seat to AVAILABLE.
    pub fn release_hold(&mut self) {
        self.status = SeatStatus::Available;
        self.held_by_user_id = None;
        self.hold_expires_at = None;
    }

    /// Attach this seat to a confirmed booking.
    pub fn book(&mut self, booking_id: i64) {
        self.status = SeatStatus::Booked;
        self.booking_id = Some(booking_id);
        self.held_by_user_id = None;
        self.hold_expires_at = None;
    }

    /// Detach from a cancelled booking.
    pub fn release_booking(&mut self) {
        self.status = SeatStatus::Available;
        self.booking_id = None;
        self.held_by_user_id = None;
        self.hold_expires_at = None;
    }

    /// Whether the hold on this seat has lapsed at `now`.
    ///
    /// Only meaningful for BLOCKED seats; a seat without an expiry is
    /// never considered expired.
    pub fn hold_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == SeatStatus::Blocked
            && self.hold_expires_at.map(|at| at < now).unwrap_or(false)
    }

    /// Whether the seat can be taken at `now`: AVAILABLE, or BLOCKED with
    /// a lapsed hold. Expiry is re-checked against the wall clock here,
    /// never trusted to the sweeper alone.
    pub fn is_takeable(&self, now: DateTime<Utc>) -> bool {
        match self.status {
            SeatStatus::Available => true,
            SeatStatus::Blocked => self.hold_expired(now),
            SeatStatus::Booked => false,
        }
    }

    /// Whether `user_id` currently holds a live (unexpired) hold on this seat.
    pub fn held_by(&self, user_id: i64, now: DateTime<Utc>) -> bool {
        self.status == SeatStatus::Blocked
            && self.held_by_user_id == Some(user_id)
            && !self.hold_expired(now)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_seat() -> Seat {
        Seat::new(1, 2, 5)
    }

    #[test]
    fn new_seat_is_available() {
        let s = sample_seat();
        assert_eq!(s.status, SeatStatus::Available);
        assert_eq!(s.seat_code, "B5");
        assert!(s.held_by_user_id.is_none());
        assert!(s.hold_expires_at.is_none());
        assert!(s.booking_id.is_none());
    }

    #[test]
    fn block_sets_holder_and_expiry_together() {
        let mut s = sample_seat();
        let until = Utc::now() + Duration::minutes(5);
        s.block(42, until);
        assert_eq!(s.status, SeatStatus::Blocked);
        assert_eq!(s.held_by_user_id, Some(42));
        assert_eq!(s.hold_expires_at, Some(until));
        assert!(s.booking_id.is_none());
    }

    #[test]
    fn release_hold_clears_holder_and_expiry_together() {
        let mut s = sample_seat();
        s.block(42, Utc::now() + Duration::minutes(5));
        s.release_hold();
        assert_eq!(s.status, SeatStatus::Available);
        assert!(s.held_by_user_id.is_none());
        assert!(s.hold_expires_at.is_none());
    }

    #[test]
    fn book_clears_hold_fields() {
        let mut s = sample_seat();
        s.block(42, Utc::now() + Duration::minutes(5));
        s.book(7);
        assert_eq!(s.status, SeatStatus::Booked);
        assert_eq!(s.booking_id, Some(7));
        assert!(s.held_by_user_id.is_none());
        assert!(s.hold_expires_at.is_none());
    }

    #[test]
    fn release_booking_returns_to_available() {
        let mut s = sample_seat();
        s.book(7);
        s.release_booking();
        assert_eq!(s.status, SeatStatus::Available);
        assert!(s.booking_id.is_none());
    }

    #[test]
    fn expired_hold_is_takeable() {
        let now = Utc::now();
        let mut s = sample_seat();
        s.block(42, now - Duration::seconds(1));
        assert!(s.hold_expired(now));
        assert!(s.is_takeable(now));
        assert!(!s.held_by(42, now));
    }

    #[test]
    fn live_hold_is_not_takeable() {
        let now = Utc::now();
        let mut s = sample_seat();
        s.block(42, now + Duration::minutes(5));
        assert!(!s.hold_expired(now));
        assert!(!s.is_takeable(now));
        assert!(s.held_by(42, now));
        assert!(!s.held_by(43, now));
    }

    #[test]
    fn booked_seat_is_never_takeable() {
        let mut s = sample_seat();
        s.book(7);
        assert!(!s.is_takeable(Utc::now()));
    }

    #[test]
    fn status_display_roundtrip() {
        for status in &[SeatStatus::Available, SeatStatus::Blocked, SeatStatus::Booked] {
            assert_eq!(&SeatStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn code_for_first_and_last_rows() {
        assert_eq!(Seat::code_for(1, 1), "A1");
        assert_eq!(Seat::code_for(26, 10), "Z10");
    }
}
