//! Seat availability and hold operations
//!
//! Holds follow a validate-then-claim discipline: cheap existence and
//! ownership checks run first against a snapshot, then the repository's
//! guarded batch update settles the race. Snapshot checks can pass for
//! a seat another request claims a moment later; only the claim decides.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::seat::Seat;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::events::{Event, SeatState, SeatsChangedEvent};
use crate::notifications::SharedEventBus;

/// Service for seat queries, holds and releases
pub struct SeatService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
    hold_ttl_secs: u64,
    max_seats_per_hold: usize,
}

impl SeatService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        event_bus: SharedEventBus,
        hold_ttl_secs: u64,
        max_seats_per_hold: usize,
    ) -> Self {
        Self {
            repos,
            event_bus,
            hold_ttl_secs,
            max_seats_per_hold,
        }
    }

    /// Seat map for a screen. Holds that have already lapsed are shown
    /// as AVAILABLE even before the sweeper reclaims them.
    pub async fn get_seats_for_screen(&self, screen_id: i64) -> DomainResult<Vec<Seat>> {
        self.repos
            .screens()
            .find_by_id(screen_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Screen",
                field: "id",
                value: screen_id.to_string(),
            })?;

        let now = Utc::now();
        let seats = self
            .repos
            .seats()
            .find_by_screen(screen_id)
            .await?
            .into_iter()
            .map(|mut seat| {
                if seat.hold_expired(now) {
                    seat.release_hold();
                }
                seat
            })
            .collect();
        Ok(seats)
    }

    /// Place a hold on a batch of seats. All seats transition together
    /// or none do.
    pub async fn block_seats(
        &self,
        screen_id: i64,
        seat_ids: &[i64],
        user_id: i64,
    ) -> DomainResult<Vec<Seat>> {
        let ids = self.validate_batch(seat_ids)?;

        self.repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })?;

        self.check_seats_on_screen(screen_id, &ids).await?;

        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.hold_ttl_secs as i64);

        let seats = self
            .repos
            .seats()
            .try_block(&ids, user_id, expires_at, now)
            .await?;

        metrics::counter!("seats_blocked_total").increment(seats.len() as u64);
        info!(
            screen_id,
            user_id,
            count = seats.len(),
            expires_at = %expires_at,
            "Seats blocked"
        );

        self.publish_seat_change(screen_id, &seats);
        Ok(seats)
    }

    /// Release holds on the given seats. Seats that are not blocked are
    /// skipped, so repeating the call is harmless.
    pub async fn unblock_seats(
        &self,
        screen_id: i64,
        seat_ids: &[i64],
    ) -> DomainResult<Vec<Seat>> {
        let ids = self.validate_batch(seat_ids)?;
        self.check_seats_on_screen(screen_id, &ids).await?;

        let freed = self.repos.seats().release_holds(&ids).await?;

        if !freed.is_empty() {
            metrics::counter!("seats_unblocked_total").increment(freed.len() as u64);
            info!(screen_id, count = freed.len(), "Seat holds released");
            self.publish_seat_change(screen_id, &freed);
        }
        Ok(freed)
    }

    /// Collapse duplicates, then enforce the batch size on distinct ids.
    fn validate_batch(&self, seat_ids: &[i64]) -> DomainResult<Vec<i64>> {
        let mut ids: Vec<i64> = seat_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Err(DomainError::Validation(
                "At least one seat must be selected".to_string(),
            ));
        }
        if ids.len() > self.max_seats_per_hold {
            return Err(DomainError::Validation(format!(
                "At most {} seats may be selected per request",
                self.max_seats_per_hold
            )));
        }
        Ok(ids)
    }

    /// Every requested seat must exist and belong to the screen.
    async fn check_seats_on_screen(&self, screen_id: i64, seat_ids: &[i64]) -> DomainResult<()> {
        let seats = self.repos.seats().find_by_ids(seat_ids).await?;

        for &id in seat_ids {
            let seat = seats.iter().find(|s| s.id == id).ok_or(DomainError::NotFound {
                entity: "Seat",
                field: "id",
                value: id.to_string(),
            })?;

            if seat.screen_id != screen_id {
                return Err(DomainError::WrongScreen {
                    seat_code: seat.seat_code.clone(),
                });
            }
        }
        Ok(())
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
