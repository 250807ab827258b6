use thiserror::Error;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Seat {seat_code} is not available")]
    SeatUnavailable { seat_code: String },

    #[error("Seat {seat_code} is already booked")]
    SeatTaken { seat_code: String },

    #[error("Seat {seat_code} is blocked by another user")]
    SeatHeldByOther { seat_code: String },

    #[error("Seat {seat_code} does not belong to the show's screen")]
    WrongScreen { seat_code: String },

    #[error("Schedule conflict: '{movie_title}' already runs from {starts} to {ends} on this screen")]
    ScheduleConflict {
        movie_title: String,
        starts: chrono::NaiveTime,
        ends: chrono::NaiveTime,
    },

    #[error("Booking is {status}, only confirmed bookings can be cancelled")]
    InvalidBookingState { status: String },
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            // DB errors mapped from repositories carry a "Database error:" prefix
            DomainError::Validation(msg) => msg.starts_with("Database error:"),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
