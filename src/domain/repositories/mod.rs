//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::booking::BookingRepository;
use super::movie::MovieRepository;
use super::screen::ScreenRepository;
use super::seat::SeatRepository;
use super::show::ShowRepository;
use super::user::UserRepository;

pub use crate::shared::errors::DomainResult;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let show = repos.shows().find_by_id(3).await?;
///     let seats = repos.seats().find_by_screen(show.unwrap().screen_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn seats(&self) -> &dyn SeatRepository;
    fn shows(&self) -> &dyn ShowRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn movies(&self) -> &dyn MovieRepository;
    fn screens(&self) -> &dyn ScreenRepository;
    fn users(&self) -> &dyn UserRepository;
}
