//! Seat HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::SeatService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for seat handlers.
#[derive(Clone)]
pub struct SeatAppState {
    pub seat_service: Arc<SeatService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/screens/{screen_id}/seats",
    tag = "Seats",
    params(("screen_id" = i64, Path, description = "Screen ID")),
    responses(
        (status = 200, description = "Seat map for the screen", body = ApiResponse<Vec<SeatDto>>),
        (status = 404, description = "Screen not found")
    )
)]
pub async fn get_screen_seats(
    State(state): State<SeatAppState>,
    Path(screen_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<SeatDto>>>, (StatusCode, Json<ApiResponse<Vec<SeatDto>>>)> {
    let seats = state
        .seat_service
        .get_seats_for_screen(screen_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        seats.into_iter().map(SeatDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/screens/{screen_id}/seats/block",
    tag = "Seats",
    params(("screen_id" = i64, Path, description = "Screen ID")),
    request_body = BlockSeatsRequest,
    responses(
        (status = 200, description = "Seats held", body = ApiResponse<Vec<SeatDto>>),
        (status = 404, description = "Screen, user or seat not found"),
        (status = 409, description = "A seat is booked or held by another user"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn block_seats(
    State(state): State<SeatAppState>,
    Path(screen_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<BlockSeatsRequest>,
) -> Result<Json<ApiResponse<Vec<SeatDto>>>, (StatusCode, Json<ApiResponse<Vec<SeatDto>>>)> {
    let seats = state
        .seat_service
        .block_seats(screen_id, &request.seat_ids, request.user_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        seats.into_iter().map(SeatDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/screens/{screen_id}/seats/unblock",
    tag = "Seats",
    params(("screen_id" = i64, Path, description = "Screen ID")),
    request_body = UnblockSeatsRequest,
    responses(
        (status = 200, description = "Holds released; already-free seats are skipped", body = ApiResponse<Vec<SeatDto>>),
        (status = 404, description = "Screen or seat not found"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn unblock_seats(
    State(state): State<SeatAppState>,
    Path(screen_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UnblockSeatsRequest>,
) -> Result<Json<ApiResponse<Vec<SeatDto>>>, (StatusCode, Json<ApiResponse<Vec<SeatDto>>>)> {
    let seats = state
        .seat_service
        .unblock_seats(screen_id, &request.seat_ids)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        seats.into_iter().map(SeatDto::from).collect(),
    )))
}
