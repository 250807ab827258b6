//! Screen DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::screen::Screen;

/// Request to create a screen with its seat grid
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateScreenRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Rows map to letters, so at most 26
    #[validate(range(min = 1, max = 26))]
    pub total_rows: i32,
    #[validate(range(min = 1, max = 100))]
    pub seats_per_row: i32,
}

/// Screen details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ScreenDto {
    pub id: i64,
    pub name: String,
    pub total_rows: i32,
    pub seats_per_row: i32,
    pub capacity: i32,
    pub is_active: bool,
}

impl From<Screen> for ScreenDto {
    fn from(s: Screen) -> Self {
        let capacity = s.capacity();
        Self {
            id: s.id,
            name: s.name,
            total_rows: s.total_rows,
            seats_per_row: s.seats_per_row,
            capacity,
            is_active: s.is_active,
        }
    }
}
