use async_trait::async_trait;

use super::model::Movie;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn save(&self, movie: Movie) -> DomainResult<Movie>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Movie>>;

    async fn find_all_active(&self) -> DomainResult<Vec<Movie>>;
}
