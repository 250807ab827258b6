//! SeaORM implementation of ScreenRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::screen::{Screen, ScreenRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::screen;

pub struct SeaOrmScreenRepository {
    db: DatabaseConnection,
}

impl SeaOrmScreenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: screen::Model) -> Screen {
    Screen {
        id: m.id,
        name: m.name,
        total_rows: m.total_rows,
        seats_per_row: m.seats_per_row,
        is_active: m.is_active,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

#[async_trait]
impl ScreenRepository for SeaOrmScreenRepository {
    async fn save(&self, s: Screen) -> DomainResult<Screen> {
        let model = screen::ActiveModel {
            id: Default::default(),
            name: Set(s.name),
            total_rows: Set(s.total_rows),
            seats_per_row: Set(s.seats_per_row),
            is_active: Set(s.is_active),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Screen>> {
        let model = screen::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all_active(&self) -> DomainResult<Vec<Screen>> {
        let models = screen::Entity::find()
            .filter(screen::Column::IsActive.eq(true))
            .order_by_asc(screen::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
