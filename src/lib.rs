//! # Cinema Booking Service
//!
//! Seat inventory and hold engine for cinema ticket sales, with show
//! scheduling and conflict validation.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, state machines and repository traits
//! - **application**: Services for holds, bookings, scheduling and the expiry sweeper
//! - **infrastructure**: SeaORM persistence (entities, migrations, repositories)
//! - **interfaces**: REST API with Swagger documentation
//! - **notifications**: In-process event bus for seat map updates

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod notifications;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;

// Re-export notifications
pub use notifications::{create_event_bus, Event, EventBus, SharedEventBus};
