//! Seat repository interface
//!
//! The seat table is the single shared mutable resource of the engine.
//! Seat state only changes through the transition primitives: `try_block`
//! and `release_holds` here, and the booking-coupled transitions on
//! `BookingRepository` which claim and free seats inside the booking's
//! own transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Seat;
use crate::domain::DomainResult;

#[async_trait]
pub trait SeatRepository: Send + Sync {
    /// Persist a freshly provisioned seat grid (screen creation only)
    async fn save_all(&self, seats: Vec<Seat>) -> DomainResult<()>;

    /// Find a seat by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Seat>>;

    /// Find seats by ID, ordered by ID; absent ids are simply missing
    /// from the result
    async fn find_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<Seat>>;

    /// All seats of a screen, ordered by row then number
    async fn find_by_screen(&self, screen_id: i64) -> DomainResult<Vec<Seat>>;

    /// Seats owned by a booking
    async fn find_by_booking(&self, booking_id: i64) -> DomainResult<Vec<Seat>>;

    /// BLOCKED seats whose hold lapsed before `now`
    async fn find_expired_holds(&self, now: DateTime<Utc>) -> DomainResult<Vec<Seat>>;

    /// Number of seats provisioned for a screen
    async fn count_for_screen(&self, screen_id: i64) -> DomainResult<u64>;

    // ── Atomic transition primitives ────────────────────────────
    //
    // Each primitive runs as one transaction with a per-seat
    // compare-and-set on the expected prior state. If any seat in the
    // batch is not in an eligible state the whole batch rolls back and
    // the error names the offending seat. All-or-nothing, always.

    /// AVAILABLE (or expired-hold BLOCKED) → BLOCKED for every seat,
    /// holder/expiry set. Returns the updated seats.
    async fn try_block(
        &self,
        seat_ids: &[i64],
        user_id: i64,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Seat>>;

    /// BLOCKED → AVAILABLE with hold fields cleared; seats in any other
    /// state are silently skipped (idempotent). Returns only the seats
    /// actually freed.
    async fn release_holds(&self, seat_ids: &[i64]) -> DomainResult<Vec<Seat>>;
}
