//! SeaORM implementation of MovieRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::movie::{Movie, MovieRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::movie;

pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: movie::Model) -> Movie {
    Movie {
        id: m.id,
        title: m.title,
        description: m.description,
        genre: m.genre,
        duration_minutes: m.duration_minutes,
        release_date: m.release_date,
        is_active: m.is_active,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn save(&self, m: Movie) -> DomainResult<Movie> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(m.title),
            description: Set(m.description),
            genre: Set(m.genre),
            duration_minutes: Set(m.duration_minutes),
            release_date: Set(m.release_date),
            is_active: Set(m.is_active),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Movie>> {
        let model = movie::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all_active(&self) -> DomainResult<Vec<Movie>> {
        let models = movie::Entity::find()
            .filter(movie::Column::IsActive.eq(true))
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
