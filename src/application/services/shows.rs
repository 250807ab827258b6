//! Show scheduling with overlap validation
//!
//! A show occupies its screen for the movie's runtime, as a half-open
//! window starting at the show's start time. Scheduling is rejected
//! when the new window overlaps any active show on the same screen and
//! date. Back-to-back shows are allowed.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::info;

use crate::domain::movie::Movie;
use crate::domain::show::{windows_overlap, Show};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for show scheduling
pub struct ShowService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ShowService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_show(
        &self,
        movie_id: i64,
        screen_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
        ticket_price: f64,
    ) -> DomainResult<Show> {
        let movie = self.require_movie(movie_id).await?;
        self.require_screen(screen_id).await?;
        self.validate_schedule(&movie, screen_id, date, start_time, None)
            .await?;

        if ticket_price <= 0.0 {
            return Err(DomainError::Validation(
                "Ticket price must be positive".to_string(),
            ));
        }

        let show = self
            .repos
            .shows()
            .save(Show::new(date, start_time, ticket_price, movie_id, screen_id))
            .await?;

        info!(
            show_id = show.id,
            movie_id,
            screen_id,
            date = %date,
            start_time = %start_time,
            "Show scheduled"
        );
        Ok(show)
    }

    pub async fn update_show(
        &self,
        show_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
        ticket_price: f64,
    ) -> DomainResult<Show> {
        let mut show = self.require_show(show_id).await?;
        let movie = self.require_movie(show.movie_id).await?;

        // The show being moved must not collide with its own old slot
        self.validate_schedule(&movie, show.screen_id, date, start_time, Some(show_id))
            .await?;

        if ticket_price <= 0.0 {
            return Err(DomainError::Validation(
                "Ticket price must be positive".to_string(),
            ));
        }

        show.date = date;
        show.start_time = start_time;
        show.ticket_price = ticket_price;

        let updated = self.repos.shows().update(show).await?;
        info!(show_id, date = %date, start_time = %start_time, "Show rescheduled");
        Ok(updated)
    }

    pub async fn delete_show(&self, show_id: i64) -> DomainResult<()> {
        self.require_show(show_id).await?;
        self.repos.shows().delete(show_id).await?;
        info!(show_id, "Show deleted");
        Ok(())
    }

    pub async fn get_show(&self, show_id: i64) -> DomainResult<Show> {
        self.require_show(show_id).await
    }

    pub async fn list_shows(&self) -> DomainResult<Vec<Show>> {
        self.repos.shows().find_all_active().await
    }

    pub async fn list_shows_for_movie(&self, movie_id: i64) -> DomainResult<Vec<Show>> {
        self.require_movie(movie_id).await?;
        self.repos.shows().find_active_by_movie(movie_id).await
    }

    /// Date gating plus the overlap check against every active show on
    /// the screen that day.
    async fn validate_schedule(
        &self,
        movie: &Movie,
        screen_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
        exclude_id: Option<i64>,
    ) -> DomainResult<()> {
        let today = Utc::now().date_naive();
        if date <= today {
            return Err(DomainError::Validation(
                "Show date must be after today".to_string(),
            ));
        }
        if !movie.released_by(date) {
            return Err(DomainError::Validation(format!(
                "'{}' is not released on {}",
                movie.title, date
            )));
        }

        let new_start = minutes_from_midnight(start_time);
        let new_end = (new_start + movie.duration_minutes).min(24 * 60);

        let existing = self
            .repos
            .shows()
            .find_active_for_screen_date(screen_id, date, exclude_id)
            .await?;

        for other in existing {
            let other_movie = self.require_movie(other.movie_id).await?;
            let other_start = other.start_minutes();
            let other_end = other.end_minutes(other_movie.duration_minutes);

            if windows_overlap(new_start, new_end, other_start, other_end) {
                metrics::counter!("schedule_conflicts_total").increment(1);
                return Err(DomainError::ScheduleConflict {
                    movie_title: other_movie.title,
                    starts: other.start_time,
                    ends: minutes_to_time(other_end),
                });
            }
        }
        Ok(())
    }

    async fn require_movie(&self, movie_id: i64) -> DomainResult<Movie> {
        self.repos
            .movies()
            .find_by_id(movie_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Movie",
                field: "id",
                value: movie_id.to_string(),
            })
    }

    async fn require_screen(&self, screen_id: i64) -> DomainResult<()> {
        self.repos
            .screens()
            .find_by_id(screen_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Screen",
                field: "id",
                value: screen_id.to_string(),
            })?;
        Ok(())
    }

    async fn require_show(&self, show_id: i64) -> DomainResult<Show> {
        self.repos
            .shows()
            .find_by_id(show_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Show",
                field: "id",
                value: show_id.to_string(),
            })
    }
}

fn minutes_from_midnight(t: NaiveTime) -> i32 {
    use chrono::Timelike;
    (t.num_seconds_from_midnight() / 60) as i32
}

/// Clamped inverse of the minute arithmetic, for error messages.
fn minutes_to_time(minutes: i32) -> NaiveTime {
    let capped = minutes.clamp(0, 24 * 60 - 1) as u32;
    NaiveTime::from_hms_opt(capped / 60, capped % 60, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(23, 59, 0).unwrap())
}
