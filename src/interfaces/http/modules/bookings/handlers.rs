//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::BookingService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub booking_service: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking confirmed", body = ApiResponse<BookingDetailsDto>),
        (status = 404, description = "User, show or seat not found"),
        (status = 409, description = "A seat was taken or is held by another user"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingDetailsDto>>, (StatusCode, Json<ApiResponse<BookingDetailsDto>>)>
{
    let details = state
        .booking_service
        .create_booking(request.user_id, request.show_id, &request.seat_ids)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/cancel",
    tag = "Bookings",
    params(("booking_id" = i64, Path, description = "Booking ID")),
    request_body = CancelBookingRequest,
    responses(
        (status = 200, description = "Booking cancelled, seats freed", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is not in a cancellable state")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CancelBookingRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .booking_service
        .cancel_booking(booking_id, request.user_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}",
    tag = "Bookings",
    params(("booking_id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDetailsDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<ApiResponse<BookingDetailsDto>>, (StatusCode, Json<ApiResponse<BookingDetailsDto>>)>
{
    let details = state
        .booking_service
        .get_booking(booking_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/reference/{reference}",
    tag = "Bookings",
    params(("reference" = String, Path, description = "Booking reference, e.g. BK17093...")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDetailsDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking_by_reference(
    State(state): State<BookingAppState>,
    Path(reference): Path<String>,
) -> Result<Json<ApiResponse<BookingDetailsDto>>, (StatusCode, Json<ApiResponse<BookingDetailsDto>>)>
{
    let details = state
        .booking_service
        .get_booking_by_reference(&reference)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/bookings",
    tag = "Bookings",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Bookings of the user, newest first", body = ApiResponse<Vec<BookingDto>>)
    )
)]
pub async fn list_user_bookings(
    State(state): State<BookingAppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<BookingDto>>>, (StatusCode, Json<ApiResponse<Vec<BookingDto>>>)> {
    let bookings = state
        .booking_service
        .list_bookings_for_user(user_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        bookings.into_iter().map(BookingDto::from).collect(),
    )))
}
