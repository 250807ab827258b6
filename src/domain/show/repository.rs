use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Show;
use crate::shared::errors::DomainResult;

/// Persistence port for scheduled shows.
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Persist a new show and return it with its assigned id.
    async fn save(&self, show: Show) -> DomainResult<Show>;

    async fn update(&self, show: Show) -> DomainResult<Show>;

    async fn delete(&self, id: i64) -> DomainResult<()>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Show>>;

    async fn find_all_active(&self) -> DomainResult<Vec<Show>>;

    async fn find_active_by_movie(&self, movie_id: i64) -> DomainResult<Vec<Show>>;

    /// Active shows booked on `screen_id` for `date`, excluding `exclude_id`
    /// when present (used when rescheduling an existing show).
    async fn find_active_for_screen_date(
        &self,
        screen_id: i64,
        date: NaiveDate,
        exclude_id: Option<i64>,
    ) -> DomainResult<Vec<Show>>;

    /// Active shows dated strictly before `today`, for the deactivation sweep.
    async fn find_active_before(&self, today: NaiveDate) -> DomainResult<Vec<Show>>;

    /// Mark the given shows inactive. Returns the number updated.
    async fn set_inactive(&self, ids: &[i64]) -> DomainResult<u64>;
}
