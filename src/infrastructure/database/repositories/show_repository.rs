//! SeaORM implementation of ShowRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::show::{Show, ShowRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::show;

pub struct SeaOrmShowRepository {
    db: DatabaseConnection,
}

impl SeaOrmShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: show::Model) -> Show {
    Show {
        id: m.id,
        date: m.show_date,
        start_time: m.start_time,
        ticket_price: m.ticket_price,
        is_active: m.is_active,
        movie_id: m.movie_id,
        screen_id: m.screen_id,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── ShowRepository impl ─────────────────────────────────────────

#[async_trait]
impl ShowRepository for SeaOrmShowRepository {
    async fn save(&self, s: Show) -> DomainResult<Show> {
        debug!(
            "Saving show: movie {} on screen {} at {} {}",
            s.movie_id, s.screen_id, s.date, s.start_time
        );

        let model = show::ActiveModel {
            id: Default::default(),
            show_date: Set(s.date),
            start_time: Set(s.start_time),
            ticket_price: Set(s.ticket_price),
            is_active: Set(s.is_active),
            movie_id: Set(s.movie_id),
            screen_id: Set(s.screen_id),
            created_at: Set(s.created_at),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn update(&self, s: Show) -> DomainResult<Show> {
        debug!("Updating show: {}", s.id);

        let existing = show::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Show",
                field: "id",
                value: s.id.to_string(),
            });
        }

        let model = show::ActiveModel {
            id: Set(s.id),
            show_date: Set(s.date),
            start_time: Set(s.start_time),
            ticket_price: Set(s.ticket_price),
            is_active: Set(s.is_active),
            movie_id: Set(s.movie_id),
            screen_id: Set(s.screen_id),
            created_at: Set(s.created_at),
        };
        let updated = model.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let res = show::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Show",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Show>> {
        let model = show::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all_active(&self) -> DomainResult<Vec<Show>> {
        let models = show::Entity::find()
            .filter(show::Column::IsActive.eq(true))
            .order_by_asc(show::Column::ShowDate)
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_active_by_movie(&self, movie_id: i64) -> DomainResult<Vec<Show>> {
        let models = show::Entity::find()
            .filter(show::Column::MovieId.eq(movie_id))
            .filter(show::Column::IsActive.eq(true))
            .order_by_asc(show::Column::ShowDate)
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_active_for_screen_date(
        &self,
        screen_id: i64,
        date: NaiveDate,
        exclude_id: Option<i64>,
    ) -> DomainResult<Vec<Show>> {
        let mut query = show::Entity::find()
            .filter(show::Column::ScreenId.eq(screen_id))
            .filter(show::Column::ShowDate.eq(date))
            .filter(show::Column::IsActive.eq(true));

        if let Some(id) = exclude_id {
            query = query.filter(show::Column::Id.ne(id));
        }

        let models = query
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_active_before(&self, today: NaiveDate) -> DomainResult<Vec<Show>> {
        let models = show::Entity::find()
            .filter(show::Column::IsActive.eq(true))
            .filter(show::Column::ShowDate.lt(today))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn set_inactive(&self, ids: &[i64]) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let update = show::ActiveModel {
            is_active: Set(false),
            ..Default::default()
        };

        let res = show::Entity::update_many()
            .set(update)
            .filter(show::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected)
    }
}
