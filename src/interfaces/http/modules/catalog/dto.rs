//! Movie and user DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::movie::Movie;
use crate::domain::user::User;

/// Request to add a movie to the catalogue
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    /// Runtime in minutes; drives the schedule overlap window
    #[validate(range(min = 1, max = 600))]
    pub duration_minutes: i32,
    /// Release date (YYYY-MM-DD); shows cannot be scheduled earlier
    #[schema(value_type = Option<String>, example = "2026-09-20")]
    pub release_date: Option<NaiveDate>,
}

/// Movie details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub duration_minutes: i32,
    pub release_date: Option<String>,
    pub is_active: bool,
}

impl From<Movie> for MovieDto {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            genre: m.genre,
            duration_minutes: m.duration_minutes,
            release_date: m.release_date.map(|d| d.to_string()),
            is_active: m.is_active,
        }
    }
}

/// Request to register a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone_number: Option<String>,
}

/// User details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            phone_number: u.phone_number,
        }
    }
}
