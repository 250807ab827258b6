//! Show DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::show::Show;

/// Request to schedule a show
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateShowRequest {
    #[validate(range(min = 1))]
    pub movie_id: i64,
    #[validate(range(min = 1))]
    pub screen_id: i64,
    /// Show date (YYYY-MM-DD), must be after today
    #[schema(value_type = String, example = "2026-09-14")]
    pub date: NaiveDate,
    /// Start time (HH:MM or HH:MM:SS)
    #[schema(value_type = String, example = "19:30:00")]
    pub start_time: NaiveTime,
    #[validate(range(min = 0.01, message = "must be positive"))]
    pub ticket_price: f64,
}

/// Request to reschedule or reprice a show
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateShowRequest {
    #[schema(value_type = String, example = "2026-09-15")]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "21:00:00")]
    pub start_time: NaiveTime,
    #[validate(range(min = 0.01, message = "must be positive"))]
    pub ticket_price: f64,
}

/// Show details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ShowDto {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub ticket_price: f64,
    pub is_active: bool,
    pub movie_id: i64,
    pub screen_id: i64,
}

impl From<Show> for ShowDto {
    fn from(s: Show) -> Self {
        Self {
            id: s.id,
            date: s.date.to_string(),
            start_time: s.start_time.to_string(),
            ticket_price: s.ticket_price,
            is_active: s.is_active,
            movie_id: s.movie_id,
            screen_id: s.screen_id,
        }
    }
}
