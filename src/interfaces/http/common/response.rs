//! Common API response envelope

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard envelope for all JSON responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    /// Error description, `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for a domain error
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) | DomainError::WrongScreen { .. } => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_)
        | DomainError::SeatUnavailable { .. }
        | DomainError::SeatTaken { .. }
        | DomainError::SeatHeldByOther { .. }
        | DomainError::ScheduleConflict { .. }
        | DomainError::InvalidBookingState { .. } => StatusCode::CONFLICT,
    }
}

/// Map a domain error to the standard `(status, envelope)` pair.
pub fn domain_error<T>(err: DomainError) -> (StatusCode, axum::Json<ApiResponse<T>>) {
    (status_for(&err), axum::Json(ApiResponse::error(err.to_string())))
}
