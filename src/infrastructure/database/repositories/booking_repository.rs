//! SeaORM implementation of BookingRepository
//!
//! The booking row and its seat transitions share one transaction:
//! `create_with_seats` inserts the row and claims every seat with the
//! same guarded updates the seat repository uses, and
//! `cancel_and_release` flips the status and frees the seats together.
//! A failure anywhere rolls the whole operation back, so a booking is
//! never observable without its seats, nor CANCELLED with seats still
//! BOOKED.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::booking::{Booking, BookingRepository, BookingStatus};
use crate::domain::seat::{Seat, SeatStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, seat};

use super::seat_repository::{
    classify_book_miss, live_hold_condition, load_by_ids, takeable_condition,
};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        booking_reference: m.booking_reference,
        total_amount: m.total_amount,
        status: BookingStatus::from_str(&m.status),
        booking_date: m.booking_date,
        user_id: m.user_id,
        show_id: m.show_id,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create_with_seats(
        &self,
        b: Booking,
        seat_ids: &[i64],
        now: DateTime<Utc>,
    ) -> DomainResult<(Booking, Vec<Seat>)> {
        debug!(
            "Creating booking {} for user {} with seats {:?}",
            b.booking_reference, b.user_id, seat_ids
        );

        // Ascending id order keeps concurrent batches from deadlocking
        let mut ids: Vec<i64> = seat_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let txn = self.db.begin().await.map_err(db_err)?;

        let model = booking::ActiveModel {
            id: Default::default(),
            booking_reference: Set(b.booking_reference),
            total_amount: Set(b.total_amount),
            status: Set(b.status.as_str().to_string()),
            booking_date: Set(b.booking_date),
            user_id: Set(b.user_id),
            show_id: Set(b.show_id),
        };
        let inserted = model.insert(&txn).await.map_err(db_err)?;

        // The seat is bookable if anyone could take it, or if this user
        // still holds a live block on it.
        let eligible = Condition::any()
            .add(takeable_condition(now))
            .add(live_hold_condition(now).add(seat::Column::HeldByUserId.eq(inserted.user_id)));

        for &id in &ids {
            let update = seat::ActiveModel {
                status: Set(SeatStatus::Booked.as_str().to_string()),
                held_by_user_id: Set(None),
                hold_expires_at: Set(None),
                booking_id: Set(Some(inserted.id)),
                ..Default::default()
            };

            let res = seat::Entity::update_many()
                .set(update)
                .filter(seat::Column::Id.eq(id))
                .filter(eligible.clone())
                .exec(&txn)
                .await
                .map_err(db_err)?;

            if res.rows_affected == 0 {
                let err = classify_book_miss(&txn, id, inserted.user_id, now).await;
                // Rollback discards the booking row along with the claims
                txn.rollback().await.map_err(db_err)?;
                return Err(err);
            }
        }

        let seats = load_by_ids(&txn, &ids).await?;
        txn.commit().await.map_err(db_err)?;
        Ok((model_to_domain(inserted), seats))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find()
            .filter(booking::Column::BookingReference.eq(reference))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_user(&self, user_id: i64) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::BookingDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn cancel_and_release(&self, booking_id: i64) -> DomainResult<Vec<Seat>> {
        debug!("Cancelling booking {}", booking_id);

        let txn = self.db.begin().await.map_err(db_err)?;

        // Guarded status flip; only CONFIRMED may cancel
        let update = booking::ActiveModel {
            status: Set(BookingStatus::Cancelled.as_str().to_string()),
            ..Default::default()
        };
        let res = booking::Entity::update_many()
            .set(update)
            .filter(booking::Column::Id.eq(booking_id))
            .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            let err = match booking::Entity::find_by_id(booking_id).one(&txn).await {
                Ok(Some(row)) => DomainError::InvalidBookingState { status: row.status },
                Ok(None) => DomainError::NotFound {
                    entity: "Booking",
                    field: "id",
                    value: booking_id.to_string(),
                },
                Err(e) => db_err(e),
            };
            txn.rollback().await.map_err(db_err)?;
            return Err(err);
        }

        let owned: Vec<i64> = seat::Entity::find()
            .filter(seat::Column::BookingId.eq(booking_id))
            .filter(seat::Column::Status.eq(SeatStatus::Booked.as_str()))
            .all(&txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let seats = if owned.is_empty() {
            Vec::new()
        } else {
            let free = seat::ActiveModel {
                status: Set(SeatStatus::Available.as_str().to_string()),
                booking_id: Set(None),
                ..Default::default()
            };
            seat::Entity::update_many()
                .set(free)
                .filter(seat::Column::Id.is_in(owned.clone()))
                .exec(&txn)
                .await
                .map_err(db_err)?;
            load_by_ids(&txn, &owned).await?
        };

        txn.commit().await.map_err(db_err)?;
        Ok(seats)
    }
}
