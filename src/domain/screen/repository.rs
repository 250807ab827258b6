use async_trait::async_trait;

use super::model::Screen;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait ScreenRepository: Send + Sync {
    async fn save(&self, screen: Screen) -> DomainResult<Screen>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Screen>>;

    async fn find_all_active(&self) -> DomainResult<Vec<Screen>>;
}
