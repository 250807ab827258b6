//! Screen management and seat grid provisioning

use std::sync::Arc;

use tracing::info;

use crate::domain::screen::{Screen, MAX_ROWS};
use crate::domain::seat::Seat;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for screens. Creating a screen provisions its full seat
/// grid; the grid is fixed afterwards.
pub struct ScreenService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ScreenService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_screen(
        &self,
        name: String,
        total_rows: i32,
        seats_per_row: i32,
    ) -> DomainResult<Screen> {
        if total_rows < 1 || total_rows > MAX_ROWS {
            return Err(DomainError::Validation(format!(
                "Rows must be between 1 and {}",
                MAX_ROWS
            )));
        }
        if seats_per_row < 1 {
            return Err(DomainError::Validation(
                "Seats per row must be at least 1".to_string(),
            ));
        }

        let screen = self
            .repos
            .screens()
            .save(Screen::new(name, total_rows, seats_per_row))
            .await?;

        let mut seats = Vec::with_capacity((total_rows * seats_per_row) as usize);
        for row in 1..=total_rows {
            for number in 1..=seats_per_row {
                seats.push(Seat::new(screen.id, row, number));
            }
        }
        self.repos.seats().save_all(seats).await?;

        info!(
            screen_id = screen.id,
            name = %screen.name,
            capacity = screen.capacity(),
            "Screen created with seat grid"
        );
        Ok(screen)
    }

    pub async fn get_screen(&self, screen_id: i64) -> DomainResult<Screen> {
        self.repos
            .screens()
            .find_by_id(screen_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Screen",
                field: "id",
                value: screen_id.to_string(),
            })
    }

    pub async fn list_screens(&self) -> DomainResult<Vec<Screen>> {
        self.repos.screens().find_all_active().await
    }

    pub async fn seat_count(&self, screen_id: i64) -> DomainResult<u64> {
        self.get_screen(screen_id).await?;
        self.repos.seats().count_for_screen(screen_id).await
    }
}
