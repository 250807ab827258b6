//! SeaORM implementation of SeatRepository
//!
//! The transition primitives run as a single transaction with one
//! guarded `update_many` per seat. The filter encodes the expected
//! prior state, so a concurrent writer that got there first leaves
//! `rows_affected == 0` and the whole batch rolls back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::seat::{Seat, SeatRepository, SeatStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::seat;

pub struct SeaOrmSeatRepository {
    db: DatabaseConnection,
}

impl SeaOrmSeatRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: seat::Model) -> Seat {
    Seat {
        id: m.id,
        screen_id: m.screen_id,
        seat_row: m.seat_row,
        seat_number: m.seat_number,
        seat_code: m.seat_code,
        status: SeatStatus::from_str(&m.status),
        held_by_user_id: m.held_by_user_id,
        hold_expires_at: m.hold_expires_at,
        booking_id: m.booking_id,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

/// A hold that is still counted as live: BLOCKED with expiry after `now`.
pub(super) fn live_hold_condition(now: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(seat::Column::Status.eq(SeatStatus::Blocked.as_str()))
        .add(seat::Column::HoldExpiresAt.gt(now))
}

/// A seat anyone may take: AVAILABLE, or BLOCKED with a lapsed hold.
/// Expired holds are claimable without waiting for the sweeper.
pub(super) fn takeable_condition(now: DateTime<Utc>) -> Condition {
    Condition::any()
        .add(seat::Column::Status.eq(SeatStatus::Available.as_str()))
        .add(
            Condition::all()
                .add(seat::Column::Status.eq(SeatStatus::Blocked.as_str()))
                .add(seat::Column::HoldExpiresAt.lte(now)),
        )
}

/// Why a hold's guarded update missed: any seat not takeable is simply
/// unavailable to block.
async fn classify_block_miss(txn: &DatabaseTransaction, seat_id: i64) -> DomainError {
    let row = match seat::Entity::find_by_id(seat_id).one(txn).await {
        Ok(row) => row,
        Err(e) => return db_err(e),
    };

    let Some(row) = row else {
        return DomainError::NotFound {
            entity: "Seat",
            field: "id",
            value: seat_id.to_string(),
        };
    };

    DomainError::SeatUnavailable {
        seat_code: row.seat_code,
    }
}

/// Why a booking's guarded update missed: booked seats and live holds
/// of other users are reported precisely.
pub(super) async fn classify_book_miss(
    txn: &DatabaseTransaction,
    seat_id: i64,
    user_id: i64,
    now: DateTime<Utc>,
) -> DomainError {
    let row = match seat::Entity::find_by_id(seat_id).one(txn).await {
        Ok(row) => row,
        Err(e) => return db_err(e),
    };

    let Some(row) = row else {
        return DomainError::NotFound {
            entity: "Seat",
            field: "id",
            value: seat_id.to_string(),
        };
    };

    match SeatStatus::from_str(&row.status) {
        SeatStatus::Booked => DomainError::SeatTaken {
            seat_code: row.seat_code,
        },
        SeatStatus::Blocked => {
            let live = row.hold_expires_at.map(|e| e > now).unwrap_or(false);
            if live && row.held_by_user_id != Some(user_id) {
                DomainError::SeatHeldByOther {
                    seat_code: row.seat_code,
                }
            } else {
                DomainError::SeatUnavailable {
                    seat_code: row.seat_code,
                }
            }
        }
        SeatStatus::Available => DomainError::SeatUnavailable {
            seat_code: row.seat_code,
        },
    }
}

pub(super) async fn load_by_ids(txn: &DatabaseTransaction, ids: &[i64]) -> DomainResult<Vec<Seat>> {
    let models = seat::Entity::find()
        .filter(seat::Column::Id.is_in(ids.to_vec()))
        .order_by_asc(seat::Column::Id)
        .all(txn)
        .await
        .map_err(db_err)?;
    Ok(models.into_iter().map(model_to_domain).collect())
}

// ── SeatRepository impl ─────────────────────────────────────────

#[async_trait]
impl SeatRepository for SeaOrmSeatRepository {
    async fn save_all(&self, seats: Vec<Seat>) -> DomainResult<()> {
        debug!("Provisioning {} seats", seats.len());

        let models: Vec<seat::ActiveModel> = seats
            .into_iter()
            .map(|s| seat::ActiveModel {
                id: Default::default(),
                screen_id: Set(s.screen_id),
                seat_row: Set(s.seat_row),
                seat_number: Set(s.seat_number),
                seat_code: Set(s.seat_code),
                status: Set(s.status.as_str().to_string()),
                held_by_user_id: Set(s.held_by_user_id),
                hold_expires_at: Set(s.hold_expires_at),
                booking_id: Set(s.booking_id),
            })
            .collect();

        seat::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Seat>> {
        let model = seat::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<Seat>> {
        let models = seat::Entity::find()
            .filter(seat::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(seat::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_screen(&self, screen_id: i64) -> DomainResult<Vec<Seat>> {
        let models = seat::Entity::find()
            .filter(seat::Column::ScreenId.eq(screen_id))
            .order_by_asc(seat::Column::SeatRow)
            .order_by_asc(seat::Column::SeatNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_booking(&self, booking_id: i64) -> DomainResult<Vec<Seat>> {
        let models = seat::Entity::find()
            .filter(seat::Column::BookingId.eq(booking_id))
            .order_by_asc(seat::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_expired_holds(&self, now: DateTime<Utc>) -> DomainResult<Vec<Seat>> {
        let models = seat::Entity::find()
            .filter(seat::Column::Status.eq(SeatStatus::Blocked.as_str()))
            .filter(seat::Column::HoldExpiresAt.lte(now))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn count_for_screen(&self, screen_id: i64) -> DomainResult<u64> {
        seat::Entity::find()
            .filter(seat::Column::ScreenId.eq(screen_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn try_block(
        &self,
        seat_ids: &[i64],
        user_id: i64,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Seat>> {
        debug!("Blocking seats {:?} for user {}", seat_ids, user_id);

        // Ascending id order keeps concurrent batches from deadlocking
        let mut ids: Vec<i64> = seat_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let txn = self.db.begin().await.map_err(db_err)?;

        for &id in &ids {
            let update = seat::ActiveModel {
                status: Set(SeatStatus::Blocked.as_str().to_string()),
                held_by_user_id: Set(Some(user_id)),
                hold_expires_at: Set(Some(expires_at)),
                ..Default::default()
            };

            let res = seat::Entity::update_many()
                .set(update)
                .filter(seat::Column::Id.eq(id))
                .filter(takeable_condition(now))
                .exec(&txn)
                .await
                .map_err(db_err)?;

            if res.rows_affected == 0 {
                let err = classify_block_miss(&txn, id).await;
                txn.rollback().await.map_err(db_err)?;
                return Err(err);
            }
        }

        let seats = load_by_ids(&txn, &ids).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(seats)
    }

    async fn release_holds(&self, seat_ids: &[i64]) -> DomainResult<Vec<Seat>> {
        debug!("Releasing holds on seats {:?}", seat_ids);

        let txn = self.db.begin().await.map_err(db_err)?;

        // Only BLOCKED rows are touched, so re-releasing or mixing in
        // booked seats is harmless.
        let held: Vec<i64> = seat::Entity::find()
            .filter(seat::Column::Id.is_in(seat_ids.to_vec()))
            .filter(seat::Column::Status.eq(SeatStatus::Blocked.as_str()))
            .all(&txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if held.is_empty() {
            txn.commit().await.map_err(db_err)?;
            return Ok(Vec::new());
        }

        let update = seat::ActiveModel {
            status: Set(SeatStatus::Available.as_str().to_string()),
            held_by_user_id: Set(None),
            hold_expires_at: Set(None),
            ..Default::default()
        };

        seat::Entity::update_many()
            .set(update)
            .filter(seat::Column::Id.is_in(held.clone()))
            .filter(seat::Column::Status.eq(SeatStatus::Blocked.as_str()))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let seats = load_by_ids(&txn, &held).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(seats)
    }
}
